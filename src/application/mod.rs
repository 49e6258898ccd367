//! Application layer - use-case handlers behind the HTTP surface.

pub mod handlers;
