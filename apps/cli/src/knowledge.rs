//! PDF knowledge base for explanation prompts.
//!
//! Extracts text from a slide deck once at startup and cleans it up for
//! prompt use. A missing or unreadable deck disables the excerpt but
//! never blocks a command.

use regex::Regex;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("could not extract text from {path}: {source}")]
    Extract {
        path: String,
        source: pdf_extract::OutputError,
    },
}

/// Text extracted from a slide deck, cleaned for prompt use.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    text: String,
}

impl KnowledgeBase {
    pub fn from_pdf(path: &Path) -> Result<Self, KnowledgeError> {
        let raw = pdf_extract::extract_text(path).map_err(|source| KnowledgeError::Extract {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(chars = raw.len(), path = %path.display(), "extracted slide text");
        Ok(Self {
            text: clean_text(&raw),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A bounded prefix for prompt context, cut on a char boundary.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// Strip PDF artifacts: collapse whitespace, drop `N of M` page markers,
/// and remove glyphs outside ordinary text and punctuation.
fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let without_pages = match Regex::new(r"\b\d+\s*of\s*\d+\b") {
        Ok(re) => re.replace_all(&collapsed, "").into_owned(),
        Err(_) => collapsed,
    };

    without_pages
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || ".,;:!?-()[]{}".contains(c) {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean_text("a   b\n\nc\t d"), "a b c d");
    }

    #[test]
    fn clean_drops_page_markers() {
        assert_eq!(clean_text("intro 3 of 120 outro"), "intro outro");
    }

    #[test]
    fn clean_strips_odd_glyphs_but_keeps_punctuation() {
        assert_eq!(clean_text("S3 • buckets: durable!"), "S3 buckets: durable!");
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let kb = KnowledgeBase {
            text: "héllo wörld".to_string(),
        };
        assert_eq!(kb.excerpt(5), "héllo");
        assert_eq!(kb.excerpt(100), "héllo wörld");
    }
}
