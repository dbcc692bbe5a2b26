//! Terminal quiz: a fixed pack of multiple-choice questions, a running
//! score, and a summary screen with a restart action.

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod loggers;
pub mod models;
pub mod views;

pub use error::QuizError;
pub use models::game::{default_pack, Pack, Question};
pub use models::state::{Phase, QuizState};
