//! Markdown question parser.
//!
//! # Format
//! ```markdown
//! ### Is S3 durable?
//!
//! - [x] Yes
//! - [ ] No
//!
//! **[⬆ Back to Top](#table-of-contents)**
//! ```
//!
//! Every level-3 heading starts a question block. Text before the first
//! heading is document front matter and is discarded. Within a block the
//! stem is everything before the first checkbox line; `- [x]` marks a
//! correct option and `- [ ]` an incorrect one. Only the lowercase `x`
//! counts as checked.

use crate::types::Question;

/// Heading prefix that starts a new question block.
const BLOCK_PREFIX: &str = "### ";

/// Reserved stem for authored-but-empty question blocks; such blocks are
/// dropped (compared case-insensitively).
const PLACEHOLDER_STEM: &str = "placeholder";

const UNCHECKED_MARKER: &str = "- [ ]";
const CHECKED_MARKER: &str = "- [x]";

/// Navigation boilerplate stripped wherever it appears inside a block.
const NAV_LINK: &str = "[⬆ Back to Top]";

/// Result of parsing a document.
///
/// The parser is lenient by policy: malformed blocks never abort the
/// document. Blocks with an empty or placeholder stem are dropped and
/// counted in `skipped`; blocks that have options but no checked option
/// are retained (a likely authoring bug worth surfacing, not fixing) and
/// counted in `unanswered`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub questions: Vec<Question>,
    /// Blocks dropped for an empty or placeholder stem.
    pub skipped: usize,
    /// Retained questions that have options but no checked option.
    pub unanswered: usize,
}

/// Parse a markdown document into questions.
pub fn parse(content: &str) -> ParseSummary {
    let mut summary = ParseSummary::default();
    let mut block: Option<Block> = None;

    for line in content.lines() {
        if let Some(title) = line.strip_prefix(BLOCK_PREFIX) {
            if let Some(done) = block.take() {
                done.finish(&mut summary);
            }
            block = Some(Block::new(title));
        } else if let Some(ref mut current) = block {
            current.push_line(line);
        }
        // Lines before the first heading are front matter.
    }

    if let Some(done) = block.take() {
        done.finish(&mut summary);
    }

    summary
}

enum OptionLine<'a> {
    Unchecked(&'a str),
    Checked(&'a str),
}

fn classify_option(line: &str) -> Option<OptionLine<'_>> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix(UNCHECKED_MARKER) {
        Some(OptionLine::Unchecked(rest.trim()))
    } else if let Some(rest) = trimmed.strip_prefix(CHECKED_MARKER) {
        Some(OptionLine::Checked(rest.trim()))
    } else {
        None
    }
}

fn is_nav_line(line: &str) -> bool {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix("**").unwrap_or(trimmed);
    trimmed.starts_with(NAV_LINK)
}

/// One question block under construction.
struct Block {
    stem_lines: Vec<String>,
    options: Vec<String>,
    correct_options: Vec<String>,
}

impl Block {
    fn new(title: &str) -> Self {
        let mut stem_lines = Vec::new();
        let title = title.trim();
        if !title.is_empty() {
            stem_lines.push(title.to_string());
        }
        Self {
            stem_lines,
            options: Vec::new(),
            correct_options: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        if is_nav_line(line) {
            return;
        }

        if let Some(option) = classify_option(line) {
            match option {
                OptionLine::Unchecked(text) => self.options.push(text.to_string()),
                OptionLine::Checked(text) => {
                    self.options.push(text.to_string());
                    self.correct_options.push(text.to_string());
                }
            }
            return;
        }

        // Before the first option line everything is stem text, headings
        // of other levels included. After the options start, stray prose
        // is ignored.
        if self.options.is_empty() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.stem_lines.push(trimmed.to_string());
            }
        }
    }

    fn finish(self, summary: &mut ParseSummary) {
        let stem = self.stem_lines.join("\n");
        if stem.is_empty() || stem.eq_ignore_ascii_case(PLACEHOLDER_STEM) {
            summary.skipped += 1;
            return;
        }

        if !self.options.is_empty() && self.correct_options.is_empty() {
            summary.unanswered += 1;
        }

        summary.questions.push(Question::new(stem, self.options, self.correct_options));
    }
}
