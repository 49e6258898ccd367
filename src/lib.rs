//! Kaigyo Navi - Restaurant-Opening Planning Backend
//!
//! This crate scores a user's business-planning progress across eight
//! planning axes, tracks chat-based deep-dive work, and assembles
//! business-plan reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
