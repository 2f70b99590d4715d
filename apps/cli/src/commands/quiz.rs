//! Interactive randomized practice exam.

use crate::commands::{load_dataset, stem_preview};
use anyhow::{bail, Context};
use colored::Colorize;
use dialoguer::Input;
use quiz_core::{parse_answer, present, PresentedQuestion, Question, QuizSession, Remark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;

pub fn run(input: &Path, limit: Option<usize>, seed: Option<u64>) -> anyhow::Result<()> {
    let mut questions: Vec<Question> = load_dataset(input)?
        .into_iter()
        .map(|item| item.question)
        .collect();

    let before = questions.len();
    questions.retain(|q| q.is_quizzable());
    let dropped = before - questions.len();
    if dropped > 0 {
        println!(
            "{}",
            format!("Excluding {dropped} question(s) without a usable answer key").yellow()
        );
    }
    if questions.is_empty() {
        bail!("no quizzable questions in {}", input.display());
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    questions.shuffle(&mut rng);
    if let Some(limit) = limit {
        questions.truncate(limit.max(1));
    }

    let mut presented = Vec::with_capacity(questions.len());
    for question in &questions {
        match present(question, &mut rng) {
            Ok(p) => presented.push(p),
            Err(e) => println!(
                "{}",
                format!("Skipping \"{}\": {e}", stem_preview(&question.stem)).yellow()
            ),
        }
    }

    let mut session = QuizSession::new(presented)?;
    let total = session.total();

    while let Some(question) = session.current().cloned() {
        print_question(&question, session.answered() + 1, total);

        let answer = loop {
            let prompt = if question.is_multi_answer() {
                "Your answers (comma-separated, e.g. A,C)"
            } else {
                "Your answer"
            };
            let raw: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            match parse_answer(&raw) {
                Ok(letters) => break letters,
                Err(e) => println!("{}", format!("{e}, try again").yellow()),
            }
        };

        let outcome = session.submit(&answer)?;
        if outcome.correct {
            println!("{}", "✓ Correct!".green().bold());
        } else {
            let correct = outcome
                .correct_letters
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{} Correct answer: {}",
                "✗ Incorrect.".red().bold(),
                correct.bold()
            );
        }
    }

    let report = session
        .report()
        .context("quiz ended before the last question")?;

    println!("\n{}", "─".repeat(44).dimmed());
    println!(
        "{} {}/{}",
        "Final score:".bold(),
        report.score.correct_count.to_string().cyan(),
        report.score.total_questions
    );
    match report.remark {
        Remark::Pass => println!("{}", "Pass".green().bold()),
        Remark::Fail => println!("{}", "Fail".red().bold()),
    }
    Ok(())
}

fn print_question(question: &PresentedQuestion, number: usize, total: usize) {
    println!("\n{}", format!("Question {number}/{total}").bold().cyan());
    println!("{}", question.stem);
    println!();
    for option in &question.labeled_options {
        println!("  {}) {}", option.letter, option.text);
    }
    println!();
}
