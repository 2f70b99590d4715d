//! Core quiz library shared by the quizmark CLI.
//!
//! Provides:
//! - Markdown question parser (`###` blocks with checkbox options)
//! - Option shuffling with A, B, C… letter labels
//! - Answer normalization and set-equality grading
//! - Quiz session state machine with score reporting

pub mod error;
pub mod grading;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod types;

pub use error::{AnswerError, SessionError, ShuffleError};
pub use grading::{grade, parse_answer};
pub use parser::{parse, ParseSummary};
pub use session::{GradeOutcome, QuizSession};
pub use shuffle::{present, MAX_OPTIONS, OPTION_LETTERS};
pub use types::{
    LabeledOption, PresentedQuestion, Question, QuizReport, Remark, ScoreState, PASS_THRESHOLD,
};
