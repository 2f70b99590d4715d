//! Menu-driven browser over an extracted question dataset.

use crate::commands::{load_knowledge, stem_preview, EXPLAIN_PACING};
use crate::config::AppContext;
use crate::explain::{ExplanationClient, OpenAiClient};
use crate::store::{self, ExplainedQuestion, ExplanationEntry};
use anyhow::bail;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};

const MENU: &[&str] = &[
    "Explain a question",
    "Find questions by topic",
    "Study session",
    "Save all explanations",
    "Statistics",
    "Help",
    "Exit",
];

/// How many topic matches are listed before the count is summarized.
const TOPIC_LIST_LIMIT: usize = 10;

pub async fn run(
    ctx: &AppContext,
    input: &Path,
    explanations: Option<&Path>,
    slides: Option<&Path>,
) -> anyhow::Result<()> {
    let mut dataset = store::load_csv(input)?;
    if dataset.is_empty() {
        bail!("no questions in {}", input.display());
    }

    if let Some(path) = explanations {
        let merged = merge_explanations(&mut dataset, path)?;
        println!("{}", format!("Merged {merged} stored explanations").dimmed());
    }

    let knowledge = load_knowledge(slides);
    let client = ctx.explanation_client(knowledge.as_ref());
    if client.is_none() {
        println!(
            "{}",
            "OPENAI_API_KEY not set: only stored explanations are available".yellow()
        );
    }

    println!(
        "{}",
        format!("Loaded {} questions from {}", dataset.len(), input.display()).cyan()
    );

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => explain_question(&mut dataset, client.as_ref()).await?,
            1 => find_by_topic(&mut dataset, client.as_ref()).await?,
            2 => study_session(&mut dataset, client.as_ref()).await?,
            3 => save_all(ctx, &mut dataset, client.as_ref()).await?,
            4 => statistics(&dataset),
            5 => help(),
            _ => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

async fn explain_question(
    dataset: &mut [ExplainedQuestion],
    client: Option<&OpenAiClient>,
) -> anyhow::Result<()> {
    let mode = Select::new()
        .with_prompt("Select a question")
        .items(&["By number", "By text search"])
        .default(0)
        .interact()?;

    let index = if mode == 0 {
        let number: usize = Input::new()
            .with_prompt(format!("Question number (1-{})", dataset.len()))
            .interact_text()?;
        if number == 0 || number > dataset.len() {
            println!(
                "{}",
                format!("Question number must be between 1 and {}", dataset.len()).red()
            );
            return Ok(());
        }
        number - 1
    } else {
        let term: String = Input::new().with_prompt("Search term").interact_text()?;
        match find_all(dataset, &term).first().copied() {
            Some(idx) => idx,
            None => {
                println!("{}", format!("No questions found containing {term:?}").red());
                return Ok(());
            }
        }
    };

    show_question(&mut dataset[index], client).await;
    Ok(())
}

async fn find_by_topic(
    dataset: &mut [ExplainedQuestion],
    client: Option<&OpenAiClient>,
) -> anyhow::Result<()> {
    let topic: String = Input::new().with_prompt("Topic").interact_text()?;
    let matches = find_all(dataset, &topic);
    if matches.is_empty() {
        println!("{}", format!("No questions found for topic {topic:?}").red());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} questions about {topic:?}:", matches.len()).green()
    );
    for (shown, idx) in matches.iter().take(TOPIC_LIST_LIMIT).enumerate() {
        println!(
            "{:>2}. {}",
            shown + 1,
            stem_preview(&dataset[*idx].question.stem)
        );
    }
    if matches.len() > TOPIC_LIST_LIMIT {
        println!("    ...and {} more", matches.len() - TOPIC_LIST_LIMIT);
    }

    let listed = matches.len().min(TOPIC_LIST_LIMIT);
    let pick: usize = Input::new()
        .with_prompt(format!("Explain which one? (1-{listed}, 0 to skip)"))
        .default(0)
        .interact_text()?;
    if (1..=listed).contains(&pick) {
        show_question(&mut dataset[matches[pick - 1]], client).await;
    }
    Ok(())
}

async fn study_session(
    dataset: &mut [ExplainedQuestion],
    client: Option<&OpenAiClient>,
) -> anyhow::Result<()> {
    let count: usize = Input::new()
        .with_prompt("Number of questions (1-20)")
        .default(5)
        .interact_text()?;
    let count = count.clamp(1, 20);

    let topic: String = Input::new()
        .with_prompt("Topic (empty for all)")
        .allow_empty(true)
        .interact_text()?;

    let selected: Vec<usize> = if topic.trim().is_empty() {
        (0..dataset.len()).take(count).collect()
    } else {
        find_all(dataset, topic.trim())
            .into_iter()
            .take(count)
            .collect()
    };

    if selected.is_empty() {
        println!("{}", "No matching questions".red());
        return Ok(());
    }

    let total = selected.len();
    for (i, idx) in selected.into_iter().enumerate() {
        println!("\n{}", format!("Question {}/{}", i + 1, total).bold().cyan());
        show_question(&mut dataset[idx], client).await;
        if i + 1 < total {
            let _: String = Input::new()
                .with_prompt("Press Enter for the next question")
                .allow_empty(true)
                .interact_text()?;
        }
    }
    Ok(())
}

async fn save_all(
    ctx: &AppContext,
    dataset: &mut [ExplainedQuestion],
    client: Option<&OpenAiClient>,
) -> anyhow::Result<()> {
    let filename: String = Input::new()
        .with_prompt("Filename")
        .default("explanations.json".to_string())
        .interact_text()?;
    let path = PathBuf::from(if filename.ends_with(".json") {
        filename
    } else {
        format!("{filename}.json")
    });

    let missing = dataset.iter().filter(|i| !i.has_explanation()).count();
    if missing > 0 {
        if client.is_none() {
            println!(
                "{}",
                format!(
                    "{missing} question(s) have no stored explanation and no API key is set; \
                     they will be saved without one"
                )
                .yellow()
            );
        } else {
            let proceed = Confirm::new()
                .with_prompt(format!(
                    "{missing} explanation(s) will be generated via API calls. Continue?"
                ))
                .default(false)
                .interact()?;
            if !proceed {
                println!("Cancelled");
                return Ok(());
            }
        }
    }

    let total = dataset.len();
    let mut entries = Vec::with_capacity(total);
    for (i, item) in dataset.iter_mut().enumerate() {
        if !item.has_explanation() {
            if let Some(client) = client {
                println!(
                    "{}",
                    format!(
                        "Explaining {}/{}: {}",
                        i + 1,
                        total,
                        stem_preview(&item.question.stem)
                    )
                    .dimmed()
                );
                match client.explain(&item.question).await {
                    Ok(text) => item.explanation = text,
                    Err(e) => {
                        tracing::error!(error = %e, "explanation failed");
                        item.explanation = format!("Error: {e}");
                    }
                }
                tokio::time::sleep(EXPLAIN_PACING).await;
            }
        }
        entries.push(ExplanationEntry::new(
            &item.question,
            item.explanation.clone(),
        ));
    }

    store::save_explanations(&path, &ctx.config.model, entries)?;
    println!(
        "{}",
        format!("Saved explanations to {}", path.display()).green()
    );
    Ok(())
}

fn statistics(dataset: &[ExplainedQuestion]) {
    let total = dataset.len();
    let single = dataset
        .iter()
        .filter(|i| i.question.correct_options.len() == 1)
        .count();
    let multi = dataset.iter().filter(|i| i.question.is_multi_answer()).count();
    let unanswerable = dataset
        .iter()
        .filter(|i| !i.question.is_quizzable())
        .count();
    let explained = dataset.iter().filter(|i| i.has_explanation()).count();

    println!("\n{}", "Dataset statistics".bold());
    println!("  Total questions:     {total}");
    println!("  Single answer:       {single}");
    println!("  Multiple answer:     {multi}");
    println!("  Without answer key:  {unanswerable}");
    println!("  Stored explanations: {explained}");
}

fn help() {
    println!("\n{}", "Help".bold());
    println!("Browse a question dataset produced by `quizmark extract`.");
    println!("- Explanations are read from the CSV or a merged JSON file when present.");
    println!("- With OPENAI_API_KEY set, missing explanations are fetched on demand.");
    println!("- Pass --slides <pdf> to ground explanations in your course material.");
    println!("- Use `quizmark quiz` for a scored practice exam over the same data.");
}

/// Display one question with its choices, answers, and explanation.
async fn show_question(item: &mut ExplainedQuestion, client: Option<&OpenAiClient>) {
    let question = &item.question;
    println!("\n{}", "QUESTION".bold());
    println!("{}", question.stem);

    println!("\n{}", "ANSWER CHOICES".bold());
    for (i, choice) in question.options.iter().enumerate() {
        let marker = if question.correct_options.contains(choice) {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("{:>2}. {} {}", i + 1, marker, choice);
    }

    if !question.correct_options.is_empty() {
        println!("\n{}", "CORRECT ANSWERS".bold());
        for answer in &question.correct_options {
            println!("{} {}", "✓".green(), answer);
        }
    }

    println!("\n{}", "EXPLANATION".bold());
    match fetch_explanation(item, client).await {
        Ok(text) => println!("{text}"),
        Err(message) => println!("{}", message.red()),
    }
}

/// Use the stored explanation when present, otherwise ask the client.
///
/// Failures come back as display strings, never as session-ending errors.
async fn fetch_explanation(
    item: &mut ExplainedQuestion,
    client: Option<&OpenAiClient>,
) -> Result<String, String> {
    if item.has_explanation() {
        return Ok(item.explanation.clone());
    }
    let Some(client) = client else {
        return Err("not available (no stored explanation and no API key)".to_string());
    };
    match client.explain(&item.question).await {
        Ok(text) => {
            item.explanation = text.clone();
            Ok(text)
        }
        Err(e) => {
            tracing::error!(error = %e, "explanation failed");
            Err(format!("error: {e}"))
        }
    }
}

/// Merge a saved explanations JSON file into the dataset by stem match.
fn merge_explanations(
    dataset: &mut [ExplainedQuestion],
    path: &Path,
) -> anyhow::Result<usize> {
    let dump = store::load_explanations(path)?;
    let mut merged = 0;
    for entry in dump.entries {
        if entry.explanation.is_empty() {
            continue;
        }
        if let Some(item) = dataset
            .iter_mut()
            .find(|i| i.question.stem == entry.question && !i.has_explanation())
        {
            item.explanation = entry.explanation;
            merged += 1;
        }
    }
    Ok(merged)
}

/// Indices of questions whose stem contains the term, case-insensitively.
fn find_all(dataset: &[ExplainedQuestion], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    dataset
        .iter()
        .enumerate()
        .filter(|(_, item)| item.question.stem.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}
