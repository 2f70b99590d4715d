//! Language-model explanation client.
//!
//! The collaborator boundary of the tool: given a parsed question, build
//! an instructor prompt and ask a chat-completions API for an
//! explanation. Failures are returned as error values for inline
//! display; they must never abort a session.

use async_trait::async_trait;
use quiz_core::Question;
use serde_json::json;
use thiserror::Error;

/// Characters of knowledge-base text included in each prompt.
pub const KNOWLEDGE_EXCERPT_CHARS: usize = 12_000;

const MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f64 = 0.3;

const SYSTEM_PROMPT: &str = "You are an expert certification instructor with comprehensive \
knowledge of the subject under study. Your task is to explain why certain answers are correct \
and why others are incorrect, based on official documentation and best practices.";

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("explanation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("explanation response had no content")]
    EmptyResponse,
}

/// A collaborator that explains a question.
#[async_trait]
pub trait ExplanationClient {
    async fn explain(&self, question: &Question) -> Result<String, ExplainError>;
}

/// Chat-completions client for an OpenAI-compatible API.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    knowledge_excerpt: Option<String>,
}

impl OpenAiClient {
    pub fn new(
        http: reqwest::Client,
        api_base: String,
        api_key: String,
        model: String,
        knowledge_excerpt: Option<String>,
    ) -> Self {
        Self {
            http,
            api_base,
            api_key,
            model,
            knowledge_excerpt,
        }
    }
}

#[async_trait]
impl ExplanationClient for OpenAiClient {
    async fn explain(&self, question: &Question) -> Result<String, ExplainError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(question, self.knowledge_excerpt.as_deref())},
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        tracing::debug!(model = %self.model, "requesting explanation");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ExplainError::EmptyResponse)
    }
}

/// Build the user prompt for one question.
///
/// Choices are numbered the way the instructor persona expects, and the
/// knowledge-base excerpt, when present, leads the prompt.
pub fn build_prompt(question: &Question, knowledge: Option<&str>) -> String {
    let mut prompt = String::new();

    if let Some(excerpt) = knowledge {
        prompt.push_str("Reference material from the course slides:\n");
        prompt.push_str(excerpt);
        prompt.push_str("\n\n");
    }

    prompt.push_str("Please explain the following question:\n\nQUESTION: ");
    prompt.push_str(&question.stem);
    prompt.push_str("\n\nANSWER CHOICES:\n");
    for (i, choice) in question.options.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, choice));
    }

    prompt.push_str(&format!(
        "\nCORRECT ANSWERS: {}\n\n",
        question.correct_options.join(", ")
    ));

    prompt.push_str(
        "Provide a detailed explanation that includes:\n\
         1. Why the correct answers are right\n\
         2. Why the incorrect answers are wrong\n\
         3. The key concepts involved in the question\n\
         4. Real-world scenarios where this knowledge applies\n\
         5. Documentation or best practices supporting the correct answers\n\n\
         Make the explanation comprehensive but easy to understand for someone \
         studying for the exam.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Is S3 durable?".into(),
            vec!["Yes".into(), "No".into()],
            vec!["Yes".into()],
        )
    }

    #[test]
    fn prompt_numbers_every_choice() {
        let prompt = build_prompt(&question(), None);
        assert!(prompt.contains("QUESTION: Is S3 durable?"));
        assert!(prompt.contains("1. Yes"));
        assert!(prompt.contains("2. No"));
        assert!(prompt.contains("CORRECT ANSWERS: Yes"));
    }

    #[test]
    fn prompt_joins_multiple_correct_answers() {
        let q = Question::new(
            "Pick two".into(),
            vec!["A".into(), "B".into(), "C".into()],
            vec!["A".into(), "C".into()],
        );
        let prompt = build_prompt(&q, None);
        assert!(prompt.contains("CORRECT ANSWERS: A, C"));
    }

    #[test]
    fn knowledge_excerpt_leads_the_prompt() {
        let prompt = build_prompt(&question(), Some("Slide text here."));
        assert!(prompt.starts_with("Reference material"));
        assert!(prompt.contains("Slide text here."));
    }
}
