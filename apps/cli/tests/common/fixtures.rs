//! Test fixtures and factory functions for creating test data.

use quiz_core::Question;
use quizmark::store::ExplainedQuestion;

/// Generate sample markdown with the given number of question blocks,
/// navigation boilerplate included.
pub fn sample_markdown(num_questions: usize) -> String {
    let blocks: Vec<String> = (0..num_questions)
        .map(|i| {
            format!(
                "### Question {n}?\n\n- [x] Right {n}\n- [ ] Wrong {n}\n\n**[⬆ Back to Top](#table-of-contents)**\n",
                n = i + 1
            )
        })
        .collect();
    format!("# Sample deck\n\nFront matter.\n\n{}", blocks.join("\n"))
}

/// A quizzable question with one correct option.
pub fn sample_question(n: usize) -> Question {
    Question::new(
        format!("Question {n}?"),
        vec![format!("Right {n}"), format!("Wrong {n}")],
        vec![format!("Right {n}")],
    )
}

/// Dataset items without explanations.
pub fn sample_items(count: usize) -> Vec<ExplainedQuestion> {
    (1..=count)
        .map(|n| ExplainedQuestion::unexplained(sample_question(n)))
        .collect()
}
