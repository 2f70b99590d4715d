//! Flat-file persistence for extracted questions and explanations.
//!
//! The CSV layout matches the extraction artifacts this tool consumes
//! and produces: one row per question, with the option and answer lists
//! JSON-encoded inside their cells.

use chrono::{DateTime, Utc};
use quiz_core::Question;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("bad list encoding in record {index}: {source}")]
    ListEncoding {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("bad explanations file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A question together with its explanation text (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainedQuestion {
    pub question: Question,
    pub explanation: String,
}

impl ExplainedQuestion {
    pub fn unexplained(question: Question) -> Self {
        Self {
            question,
            explanation: String::new(),
        }
    }

    pub fn has_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }
}

/// CSV row layout. Lists are JSON-encoded strings inside the cells.
#[derive(Debug, Serialize, Deserialize)]
struct QuestionRecord {
    #[serde(rename = "QUESTION")]
    question: String,
    #[serde(rename = "ANSWER_CHOICES")]
    answer_choices: String,
    #[serde(rename = "ANSWERS")]
    answers: String,
    #[serde(rename = "EXPLANATIONS")]
    explanations: String,
}

/// Write questions to a CSV file, losslessly.
pub fn save_csv(path: &Path, items: &[ExplainedQuestion]) -> Result<(), StoreError> {
    let at = |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(at)?;
    for (index, item) in items.iter().enumerate() {
        let record = QuestionRecord {
            question: item.question.stem.clone(),
            answer_choices: encode_list(&item.question.options, index)?,
            answers: encode_list(&item.question.correct_options, index)?,
            explanations: item.explanation.clone(),
        };
        writer.serialize(record).map_err(at)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// Load questions from a CSV file produced by [`save_csv`].
pub fn load_csv(path: &Path) -> Result<Vec<ExplainedQuestion>, StoreError> {
    let at = |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(at)?;
    let mut items = Vec::new();
    for (index, record) in reader.deserialize::<QuestionRecord>().enumerate() {
        let record = record.map_err(at)?;
        let options = decode_list(&record.answer_choices, index)?;
        let correct_options = decode_list(&record.answers, index)?;
        items.push(ExplainedQuestion {
            question: Question::new(record.question, options, correct_options),
            explanation: record.explanations,
        });
    }
    Ok(items)
}

fn encode_list(list: &[String], index: usize) -> Result<String, StoreError> {
    serde_json::to_string(list).map_err(|source| StoreError::ListEncoding { index, source })
}

fn decode_list(cell: &str, index: usize) -> Result<Vec<String>, StoreError> {
    serde_json::from_str(cell).map_err(|source| StoreError::ListEncoding { index, source })
}

/// One saved explanation in the JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationEntry {
    pub question: String,
    pub answer_choices: Vec<String>,
    pub correct_answers: Vec<String>,
    pub explanation: String,
}

impl ExplanationEntry {
    pub fn new(question: &Question, explanation: String) -> Self {
        Self {
            question: question.stem.clone(),
            answer_choices: question.options.clone(),
            correct_answers: question.correct_options.clone(),
            explanation,
        }
    }
}

/// The explanations JSON artifact written by a browse session.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplanationDump {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub entries: Vec<ExplanationEntry>,
}

pub fn save_explanations(
    path: &Path,
    model: &str,
    entries: Vec<ExplanationEntry>,
) -> Result<(), StoreError> {
    let dump = ExplanationDump {
        generated_at: Utc::now(),
        model: model.to_string(),
        entries,
    };
    let file = File::create(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &dump).map_err(|source| {
        StoreError::Json {
            path: path.display().to_string(),
            source,
        }
    })?;
    Ok(())
}

pub fn load_explanations(path: &Path) -> Result<ExplanationDump, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })
}
