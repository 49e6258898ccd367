//! Detail-question checklist handlers.

mod get_answers;
mod list_questions;
mod save_answers;

pub use get_answers::{GetAnswersHandler, GetAnswersQuery, GetAnswersResult};
pub use list_questions::{
    AxisQuestionGroup, ListQuestionsHandler, ListQuestionsQuery, ListQuestionsResult, QuestionView,
};
pub use save_answers::{SaveAnswersCommand, SaveAnswersHandler};
