//! Free-text segmentation into paragraph and fenced-code segments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One segment of a decomposed free-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MarkdownSegment {
    /// Prose paragraph. Trimmed, never empty, may embed single line breaks.
    Paragraph {
        /// Paragraph text
        text: String,
    },
    /// Fenced code region.
    Code {
        /// Language tag from the opening fence, empty when absent
        language: String,
        /// Code body with trailing newlines stripped
        text: String,
    },
}

impl MarkdownSegment {
    /// Create a paragraph segment.
    pub fn paragraph(text: impl Into<String>) -> Self {
        MarkdownSegment::Paragraph { text: text.into() }
    }

    /// Create a code segment.
    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        MarkdownSegment::Code {
            language: language.into(),
            text: text.into(),
        }
    }

    /// Check if this is a code segment.
    pub fn is_code(&self) -> bool {
        matches!(self, MarkdownSegment::Code { .. })
    }

    /// The segment's text content.
    pub fn text(&self) -> &str {
        match self {
            MarkdownSegment::Paragraph { text } => text,
            MarkdownSegment::Code { text, .. } => text,
        }
    }
}

/// Splits free text into paragraph and fenced-code segments.
///
/// Fenced regions open with three backticks (optionally followed by a
/// language word), close with three backticks, and are matched non-greedily.
/// An opening fence with no close never matches and its text falls through
/// to paragraph handling. Text outside fences splits on runs of two or more
/// newlines; pieces are trimmed and empty pieces dropped.
pub struct Segmenter {
    fence: Regex,
    breaks: Regex,
}

impl Segmenter {
    /// Create a segmenter with compiled patterns.
    pub fn new() -> Self {
        Self {
            fence: Regex::new(r"(?s)```(\w+)?\n?(.*?)```").unwrap(),
            breaks: Regex::new(r"\n{2,}").unwrap(),
        }
    }

    /// Decompose `text` into segments in source order.
    pub fn segment(&self, text: &str) -> Vec<MarkdownSegment> {
        let mut segments = Vec::new();
        if text.trim().is_empty() {
            return segments;
        }

        let mut cursor = 0;
        for caps in self.fence.captures_iter(text) {
            let fenced = caps.get(0).unwrap();
            self.push_paragraphs(&text[cursor..fenced.start()], &mut segments);

            let language = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let code = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            segments.push(MarkdownSegment::Code {
                language: language.to_string(),
                text: code.trim_end_matches('\n').to_string(),
            });
            cursor = fenced.end();
        }
        self.push_paragraphs(&text[cursor..], &mut segments);

        segments
    }

    fn push_paragraphs(&self, chunk: &str, out: &mut Vec<MarkdownSegment>) {
        for piece in self.breaks.split(chunk) {
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                out.push(MarkdownSegment::paragraph(trimmed));
            }
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Decompose free text into segments using a process-wide segmenter.
pub fn segment(text: &str) -> Vec<MarkdownSegment> {
    static SHARED: OnceLock<Segmenter> = OnceLock::new();
    SHARED.get_or_init(Segmenter::new).segment(text)
}
