//! Quiz session state machine.

use crate::error::SessionError;
use crate::grading;
use crate::types::{PresentedQuestion, QuizReport, ScoreState};
use std::collections::BTreeSet;

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    pub correct: bool,
    /// The letters the question required, for incorrect-answer feedback.
    pub correct_letters: BTreeSet<char>,
}

/// Drives one pass over a set of presented questions.
///
/// The session owns the only mutable quiz state. The score report is
/// withheld until every question has been answered, so an interrupted
/// run never produces a partial report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<PresentedQuestion>,
    position: usize,
    score: ScoreState,
}

impl QuizSession {
    /// Build a session over quizzable questions only.
    ///
    /// Questions with no options or no correct letters cannot be graded
    /// at all, so they are rejected here rather than accidentally
    /// counting as wrong mid-run.
    pub fn new(questions: Vec<PresentedQuestion>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        if let Some(index) = questions
            .iter()
            .position(|q| q.labeled_options.is_empty() || q.correct_letters.is_empty())
        {
            return Err(SessionError::UnquizzableQuestion { index });
        }

        let total = questions.len();
        Ok(Self {
            questions,
            position: 0,
            score: ScoreState::new(total),
        })
    }

    /// The question awaiting an answer, or `None` once the pass is done.
    pub fn current(&self) -> Option<&PresentedQuestion> {
        self.questions.get(self.position)
    }

    /// Questions answered so far.
    pub fn answered(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Grade the answer to the current question and advance.
    pub fn submit(&mut self, answer: &BTreeSet<char>) -> Result<GradeOutcome, SessionError> {
        let question = self
            .questions
            .get(self.position)
            .ok_or(SessionError::AlreadyFinished)?;

        let correct = grading::grade(question, answer);
        let outcome = GradeOutcome {
            correct,
            correct_letters: question.correct_letters.clone(),
        };

        self.score.record(correct);
        self.position += 1;
        Ok(outcome)
    }

    /// The final report, available only after a full uninterrupted pass.
    pub fn report(&self) -> Option<QuizReport> {
        if self.is_finished() {
            Some(QuizReport::new(self.score))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::parse_answer;
    use crate::types::LabeledOption;
    use pretty_assertions::assert_eq;

    fn presented(correct: &str, option_count: usize) -> PresentedQuestion {
        let labeled_options = crate::shuffle::OPTION_LETTERS
            .into_iter()
            .take(option_count)
            .map(|letter| LabeledOption {
                letter,
                text: format!("option {letter}"),
            })
            .collect();
        PresentedQuestion {
            stem: "Q".into(),
            labeled_options,
            correct_letters: correct.chars().collect(),
        }
    }

    #[test]
    fn rejects_empty_question_sets() {
        assert_eq!(QuizSession::new(vec![]), Err(SessionError::NoQuestions));
    }

    #[test]
    fn rejects_zero_option_questions() {
        let broken = PresentedQuestion {
            stem: "Q".into(),
            labeled_options: Vec::new(),
            correct_letters: BTreeSet::new(),
        };
        assert_eq!(
            QuizSession::new(vec![presented("A", 2), broken]),
            Err(SessionError::UnquizzableQuestion { index: 1 })
        );
    }

    #[test]
    fn scores_a_full_pass() {
        let mut session =
            QuizSession::new(vec![presented("B", 2), presented("AC", 3)]).unwrap();

        let first = session.submit(&parse_answer("B").unwrap()).unwrap();
        assert!(first.correct);

        let second = session.submit(&parse_answer("A").unwrap()).unwrap();
        assert!(!second.correct);
        assert_eq!(second.correct_letters, "AC".chars().collect());

        let report = session.report().unwrap();
        assert_eq!(report.score.correct_count, 1);
        assert_eq!(report.score.total_questions, 2);
    }

    #[test]
    fn report_is_withheld_until_the_pass_completes() {
        let mut session =
            QuizSession::new(vec![presented("A", 2), presented("B", 2)]).unwrap();
        assert!(session.report().is_none());

        session.submit(&parse_answer("A").unwrap()).unwrap();
        assert!(session.report().is_none());

        session.submit(&parse_answer("B").unwrap()).unwrap();
        assert!(session.report().is_some());
    }

    #[test]
    fn submitting_past_the_end_is_an_error() {
        let mut session = QuizSession::new(vec![presented("A", 2)]).unwrap();
        session.submit(&parse_answer("A").unwrap()).unwrap();
        assert_eq!(
            session.submit(&parse_answer("A").unwrap()),
            Err(SessionError::AlreadyFinished)
        );
    }

    #[test]
    fn parse_present_and_grade_end_to_end() {
        use crate::parser::parse;
        use crate::shuffle::present;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let summary = parse("### Is S3 durable?\n- [x] Yes\n- [ ] No");
        let question = &summary.questions[0];

        // Pick a permutation that puts the correct option at letter B.
        let presented = (0..100)
            .find_map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = present(question, &mut rng).unwrap();
                (p.labeled_options[1].text == "Yes").then_some(p)
            })
            .unwrap();
        assert_eq!(presented.correct_letters, "B".chars().collect());

        let mut session = QuizSession::new(vec![presented.clone()]).unwrap();
        let outcome = session.submit(&parse_answer("B").unwrap()).unwrap();
        assert!(outcome.correct);
        assert_eq!(session.report().unwrap().score.correct_count, 1);

        let mut session = QuizSession::new(vec![presented]).unwrap();
        let outcome = session.submit(&parse_answer("A").unwrap()).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_letters, "B".chars().collect());
        assert_eq!(session.report().unwrap().score.correct_count, 0);
    }

    #[test]
    fn wrong_answers_do_not_increment_the_score() {
        let mut session = QuizSession::new(vec![presented("A", 2)]).unwrap();
        session.submit(&parse_answer("B").unwrap()).unwrap();
        let report = session.report().unwrap();
        assert_eq!(report.score.correct_count, 0);
    }
}
