//! Answer normalization and grading.

use crate::error::AnswerError;
use crate::types::PresentedQuestion;
use std::collections::BTreeSet;

/// Normalize raw terminal input into a set of answer letters.
///
/// Whitespace is stripped (including internal spaces), letters are
/// uppercased, and commas separate letters in multi-answer mode.
/// Duplicates collapse into the set. Input that does not reduce to
/// single letters is an error so the caller can reprompt instead of
/// guessing.
pub fn parse_answer(input: &str) -> Result<BTreeSet<char>, AnswerError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if cleaned.is_empty() {
        return Err(AnswerError::Empty);
    }

    let mut letters = BTreeSet::new();
    for part in cleaned.split(',') {
        let mut chars = part.chars();
        match (chars.next(), chars.next()) {
            (Some(letter @ 'A'..='Z'), None) => {
                letters.insert(letter);
            }
            _ => {
                return Err(AnswerError::Unparseable {
                    input: input.trim().to_string(),
                })
            }
        }
    }
    Ok(letters)
}

/// Grade a normalized answer against the presented question.
///
/// Multi-answer questions are correct iff the submitted set equals the
/// correct set, order-independent with no partial credit; single-answer
/// questions iff the single submitted letter is the one correct letter.
/// Both rules reduce to set equality, so letters outside the presented
/// range simply fail the comparison rather than erroring.
pub fn grade(question: &PresentedQuestion, answer: &BTreeSet<char>) -> bool {
    *answer == question.correct_letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letters(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    fn presented(correct: &str) -> PresentedQuestion {
        PresentedQuestion {
            stem: "Q".into(),
            labeled_options: Vec::new(),
            correct_letters: correct.chars().collect(),
        }
    }

    #[test]
    fn parse_normalizes_case_spacing_and_order() {
        assert_eq!(parse_answer("A,C").unwrap(), letters("AC"));
        assert_eq!(parse_answer("C,A").unwrap(), letters("AC"));
        assert_eq!(parse_answer("a, c").unwrap(), letters("AC"));
        assert_eq!(parse_answer("  b  ").unwrap(), letters("B"));
    }

    #[test]
    fn parse_collapses_duplicates() {
        assert_eq!(parse_answer("A,A,C").unwrap(), letters("AC"));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(parse_answer("   "), Err(AnswerError::Empty));
    }

    #[test]
    fn parse_rejects_non_letter_input() {
        assert!(matches!(parse_answer("1"), Err(AnswerError::Unparseable { .. })));
        assert!(matches!(parse_answer("AB"), Err(AnswerError::Unparseable { .. })));
        assert!(matches!(parse_answer("A,,C"), Err(AnswerError::Unparseable { .. })));
        assert!(matches!(parse_answer("A,"), Err(AnswerError::Unparseable { .. })));
    }

    #[test]
    fn multi_answer_requires_exact_set_equality() {
        let q = presented("AC");
        assert!(grade(&q, &parse_answer("A,C").unwrap()));
        assert!(grade(&q, &parse_answer("C,A").unwrap()));
        assert!(grade(&q, &parse_answer("a, c").unwrap()));
        assert!(!grade(&q, &parse_answer("A").unwrap()));
        assert!(!grade(&q, &parse_answer("A,B,C").unwrap()));
    }

    #[test]
    fn single_answer_requires_the_one_letter() {
        let q = presented("B");
        assert!(grade(&q, &parse_answer("b").unwrap()));
        assert!(!grade(&q, &parse_answer("A").unwrap()));
        assert!(!grade(&q, &parse_answer("A,B").unwrap()));
    }

    #[test]
    fn out_of_range_letters_grade_as_incorrect() {
        let q = presented("A");
        assert!(!grade(&q, &parse_answer("Z").unwrap()));
    }
}
