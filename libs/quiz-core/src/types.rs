//! Core types for the quiz engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimum raw correct-answer count for a passing remark.
///
/// The threshold is on the raw count, not a percentage.
pub const PASS_THRESHOLD: usize = 10;

/// A multiple-choice question extracted from a markdown document.
///
/// `correct_options` holds the option *texts* that carried the checked
/// marker. Text, not position, is the identity key: shuffling reorders
/// `options` freely and correctness is recovered by value equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_options: Vec<String>,
}

impl Question {
    pub fn new(stem: String, options: Vec<String>, correct_options: Vec<String>) -> Self {
        Self {
            stem,
            options,
            correct_options,
        }
    }

    /// A question can be quizzed only if it has options and at least one
    /// of them is marked correct.
    pub fn is_quizzable(&self) -> bool {
        !self.options.is_empty() && !self.correct_options.is_empty()
    }

    /// Whether more than one option is marked correct.
    pub fn is_multi_answer(&self) -> bool {
        self.correct_options.len() > 1
    }
}

/// One labeled answer choice of a presented question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOption {
    pub letter: char,
    pub text: String,
}

/// A question prepared for display: options shuffled and labeled A, B, C…
///
/// `correct_letters` is recomputed from the shuffled positions, never
/// from the original parse order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedQuestion {
    pub stem: String,
    pub labeled_options: Vec<LabeledOption>,
    pub correct_letters: BTreeSet<char>,
}

impl PresentedQuestion {
    /// Whether the user should be prompted for a comma-separated answer.
    pub fn is_multi_answer(&self) -> bool {
        self.correct_letters.len() > 1
    }

    /// Correct letters joined for display, e.g. `A, C`.
    pub fn correct_letters_display(&self) -> String {
        self.correct_letters
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Running score for a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub total_questions: usize,
    pub correct_count: usize,
}

impl ScoreState {
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            correct_count: 0,
        }
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        }
    }
}

/// Qualitative remark attached to a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remark {
    Pass,
    Fail,
}

impl Remark {
    pub fn from_correct_count(correct_count: usize) -> Self {
        if correct_count >= PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// Final report for a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: ScoreState,
    pub remark: Remark,
}

impl QuizReport {
    pub fn new(score: ScoreState) -> Self {
        Self {
            score,
            remark: Remark::from_correct_count(score.correct_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quizzable_requires_options_and_correct_options() {
        let none = Question::new("Q".into(), vec![], vec![]);
        assert!(!none.is_quizzable());

        let unanswered = Question::new("Q".into(), vec!["A".into()], vec![]);
        assert!(!unanswered.is_quizzable());

        let full = Question::new("Q".into(), vec!["A".into()], vec!["A".into()]);
        assert!(full.is_quizzable());
    }

    #[test]
    fn remark_threshold_is_on_raw_count() {
        assert_eq!(Remark::from_correct_count(PASS_THRESHOLD - 1), Remark::Fail);
        assert_eq!(Remark::from_correct_count(PASS_THRESHOLD), Remark::Pass);
    }

    #[test]
    fn correct_letters_display_is_sorted() {
        let presented = PresentedQuestion {
            stem: "Q".into(),
            labeled_options: vec![],
            correct_letters: ['C', 'A'].into_iter().collect(),
        };
        assert_eq!(presented.correct_letters_display(), "A, C");
    }
}
