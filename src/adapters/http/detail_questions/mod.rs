//! Detail-question HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DetailQuestionsAppState;
pub use routes::detail_questions_routes;
