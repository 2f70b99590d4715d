//! Extract questions from a markdown document into CSV.

use crate::commands::{load_knowledge, report_parse, stem_preview, EXPLAIN_PACING};
use crate::config::AppContext;
use crate::explain::ExplanationClient;
use crate::store::{self, ExplainedQuestion};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

pub async fn run(
    ctx: &AppContext,
    input: &Path,
    output: &Path,
    explain: bool,
    slides: Option<&Path>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("could not read {}", input.display()))?;

    let summary = quiz_core::parse(&content);
    report_parse(&summary);

    let mut items: Vec<ExplainedQuestion> = summary
        .questions
        .into_iter()
        .map(ExplainedQuestion::unexplained)
        .collect();

    if explain {
        let knowledge = load_knowledge(slides);
        let client = ctx
            .explanation_client(knowledge.as_ref())
            .context("set OPENAI_API_KEY to generate explanations")?;

        let total = items.len();
        for (i, item) in items.iter_mut().enumerate() {
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
            if i + 1 < total {
                tokio::time::sleep(EXPLAIN_PACING).await;
            }
        }
    }

    store::save_csv(output, &items)?;
    println!(
        "{}",
        format!("Saved {} questions to {}", items.len(), output.display()).green()
    );
    Ok(())
}
