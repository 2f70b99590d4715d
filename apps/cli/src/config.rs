//! Runtime configuration and shared application context.

use crate::explain::OpenAiClient;
use crate::knowledge::KnowledgeBase;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the explanation service; explanation features are
    /// disabled when unset.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `OPENAI_API_KEY` enables the explanation client; `QUIZMARK_MODEL`
    /// and `QUIZMARK_API_BASE` override the defaults.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("QUIZMARK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: std::env::var("QUIZMARK_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}

/// Everything a command needs, owned by the caller and passed explicitly.
pub struct AppContext {
    pub config: Config,
    http: reqwest::Client,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Build the explanation client, if an API key is configured.
    ///
    /// A knowledge base, when present, is excerpted into every prompt.
    pub fn explanation_client(&self, knowledge: Option<&KnowledgeBase>) -> Option<OpenAiClient> {
        self.config.api_key.as_ref().map(|key| {
            OpenAiClient::new(
                self.http.clone(),
                self.config.api_base.clone(),
                key.clone(),
                self.config.model.clone(),
                knowledge.map(|kb| kb.excerpt(crate::explain::KNOWLEDGE_EXCERPT_CHARS).to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env_overrides() {
        let config = Config {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        };
        let ctx = AppContext::new(config);
        assert!(ctx.explanation_client(None).is_none());
    }
}
