//! Round-trip tests for the flat-file store.

mod common;

use common::fixtures;
use pretty_assertions::assert_eq;
use quiz_core::Question;
use quizmark::store::{self, ExplainedQuestion, ExplanationEntry};

#[test]
fn csv_round_trip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.csv");

    let items = fixtures::sample_items(3);
    store::save_csv(&path, &items).unwrap();
    let loaded = store::load_csv(&path).unwrap();

    assert_eq!(loaded, items);
}

#[test]
fn csv_round_trips_awkward_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.csv");

    let question = Question::new(
        "A stem with, commas and \"quotes\"\nand a newline?".to_string(),
        vec![
            "Option with, comma".to_string(),
            "Option with \"quotes\"".to_string(),
        ],
        vec!["Option with, comma".to_string()],
    );
    let items = vec![ExplainedQuestion {
        question,
        explanation: "Multi-line\nexplanation, with commas.".to_string(),
    }];

    store::save_csv(&path, &items).unwrap();
    let loaded = store::load_csv(&path).unwrap();

    assert_eq!(loaded, items);
}

#[test]
fn csv_round_trips_questions_without_answer_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.csv");

    let items = vec![ExplainedQuestion::unexplained(Question::new(
        "No options here".to_string(),
        vec![],
        vec![],
    ))];

    store::save_csv(&path, &items).unwrap();
    let loaded = store::load_csv(&path).unwrap();

    assert_eq!(loaded, items);
    assert!(!loaded[0].question.is_quizzable());
}

#[test]
fn explanations_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explanations.json");

    let entries: Vec<ExplanationEntry> = fixtures::sample_items(2)
        .iter()
        .map(|item| ExplanationEntry::new(&item.question, format!("Because {}", item.question.stem)))
        .collect();

    store::save_explanations(&path, "gpt-4o", entries.clone()).unwrap();
    let dump = store::load_explanations(&path).unwrap();

    assert_eq!(dump.model, "gpt-4o");
    assert_eq!(dump.entries.len(), 2);
    assert_eq!(dump.entries[0].question, entries[0].question);
    assert_eq!(dump.entries[0].answer_choices, entries[0].answer_choices);
    assert_eq!(dump.entries[0].correct_answers, entries[0].correct_answers);
    assert_eq!(dump.entries[0].explanation, entries[0].explanation);
}
