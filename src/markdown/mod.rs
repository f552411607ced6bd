//! Markdown-subset decomposition of free-text fields.
//!
//! Free-text fields in the wire format carry a deliberately small markdown
//! subset: fenced code regions, blank-line paragraph breaks, and three
//! inline forms (validated links, bold, inline code). This module turns
//! such text into typed segments and tokens for the renderer. It is not a
//! CommonMark implementation and it never fails: anything that does not
//! match a recognized form stays plain text.

mod inline;
mod segment;

pub use inline::{tokenize, InlineToken};
pub use segment::{segment, MarkdownSegment, Segmenter};
