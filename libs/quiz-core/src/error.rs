//! Error types for quiz-core.

use crate::shuffle::MAX_OPTIONS;
use thiserror::Error;

/// Errors from preparing a question for presentation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShuffleError {
    #[error("question has {count} options, more than the {max} supported", max = MAX_OPTIONS)]
    TooManyOptions { count: usize },

    #[error("question has no options or no correct option")]
    NotQuizzable,
}

/// Errors from normalizing user quiz input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("empty answer")]
    Empty,

    #[error("could not read answer letters from {input:?}")]
    Unparseable { input: String },
}

/// Errors from building or driving a quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no quizzable questions to run")]
    NoQuestions,

    #[error("question {index} has no options or no correct option")]
    UnquizzableQuestion { index: usize },

    #[error("all questions have already been answered")]
    AlreadyFinished,
}
