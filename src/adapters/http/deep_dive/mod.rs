//! Deep-dive HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DeepDiveAppState;
pub use routes::deep_dive_routes;
