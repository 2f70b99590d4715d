//! CLI command implementations.

pub mod browse;
pub mod extract;
pub mod quiz;

use crate::knowledge::KnowledgeBase;
use crate::store::{self, ExplainedQuestion};
use anyhow::Context;
use colored::Colorize;
use quiz_core::ParseSummary;
use std::path::Path;
use std::time::Duration;

/// Delay between explanation API calls, to stay under rate limits.
pub(crate) const EXPLAIN_PACING: Duration = Duration::from_secs(1);

/// Print the parse observability counts every command reports.
pub(crate) fn report_parse(summary: &ParseSummary) {
    println!(
        "{}",
        format!("Found {} questions", summary.questions.len()).cyan()
    );
    if summary.skipped > 0 {
        println!(
            "{}",
            format!(
                "Skipped {} empty or placeholder block(s)",
                summary.skipped
            )
            .yellow()
        );
    }
    if summary.unanswered > 0 {
        println!(
            "{}",
            format!(
                "{} question(s) have options but no checked answer",
                summary.unanswered
            )
            .yellow()
        );
    }
}

/// First line of a stem, truncated for progress output.
pub(crate) fn stem_preview(stem: &str) -> String {
    let first_line = stem.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(60).collect();
    if first_line.chars().count() > 60 {
        preview.push_str("...");
    }
    preview
}

/// Load a slide deck if one was given; extraction trouble disables the
/// knowledge base but never blocks the command.
pub(crate) fn load_knowledge(slides: Option<&Path>) -> Option<KnowledgeBase> {
    let path = slides?;
    match KnowledgeBase::from_pdf(path) {
        Ok(kb) if !kb.is_empty() => Some(kb),
        Ok(_) => {
            println!(
                "{}",
                format!("Slide deck {} had no extractable text", path.display()).yellow()
            );
            None
        }
        Err(e) => {
            println!("{}", format!("Ignoring slide deck: {e}").yellow());
            None
        }
    }
}

/// Load questions from a markdown document or an extracted CSV, chosen
/// by file extension.
pub(crate) fn load_dataset(path: &Path) -> anyhow::Result<Vec<ExplainedQuestion>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        Ok(store::load_csv(path)?)
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let summary = quiz_core::parse(&content);
        report_parse(&summary);
        Ok(summary
            .questions
            .into_iter()
            .map(ExplainedQuestion::unexplained)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_first_lines() {
        let long = "x".repeat(80);
        let preview = stem_preview(&long);
        assert_eq!(preview.chars().count(), 63);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_uses_only_the_first_line() {
        assert_eq!(stem_preview("short stem\nsecond line"), "short stem");
    }
}
