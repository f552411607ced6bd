//! Presentation node tree.
//!
//! The renderer's output is a UI-agnostic tree: it names structure
//! (sections, headings, lists, tables) and carries display data, leaving
//! tags, styling, and interactivity to the consuming layer. The `html` and
//! `text` modules in this crate are two such layers; host UIs binding the
//! serialized tree are another. Serialization is internally tagged
//! camelCase JSON, matching the pipeline's wire conventions.

use crate::markdown::InlineToken;
use crate::model::{BlockLink, SocialLink};
use serde::{Deserialize, Serialize};

/// A node in the rendered presentation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Node {
    /// Root of a rendered document
    Document {
        /// Top-level children in display order
        children: Vec<Node>,
    },
    /// Container for one rendered block
    Section {
        /// Block type tag the section was rendered from
        kind: String,
        /// Section children in display order
        children: Vec<Node>,
    },
    /// Heading line
    Heading {
        /// Heading depth, 1 through 4
        level: u8,
        /// Heading text
        text: String,
    },
    /// Paragraph of inline content
    Paragraph {
        /// Inline runs in display order
        content: Vec<Inline>,
    },
    /// Fenced code region
    CodeBlock {
        /// Language tag, empty when the fence had none
        language: String,
        /// Code text
        code: String,
    },
    /// Ordered or bulleted list
    List {
        /// Whether items are numbered
        ordered: bool,
        /// List items; may be empty
        items: Vec<ListItem>,
    },
    /// Comparison table
    Table {
        /// Header labels, plain text
        columns: Vec<String>,
        /// Body rows; may be ragged relative to the header
        rows: Vec<TableRow>,
    },
    /// One FAQ question/answer pair
    FaqEntry {
        /// Question line
        question: String,
        /// Rendered answer content
        answer: Vec<Node>,
    },
    /// Block-attached link collection
    LinkList {
        /// Links with non-empty targets
        links: Vec<LinkNode>,
    },
    /// Call-to-action link
    ActionLink {
        /// Button label
        label: String,
        /// Button target
        href: String,
        /// Whether the target is a same-page anchor
        is_anchor: bool,
    },
    /// Author byline
    Byline {
        /// Author display name
        name: String,
        /// Job title
        title: Option<String>,
        /// Location line
        location: Option<String>,
        /// Short biography
        bio: Option<String>,
        /// Profile image URL
        avatar_url: Option<String>,
        /// Social links with non-empty targets
        links: Vec<LinkNode>,
    },
    /// Featured image
    Image {
        /// Image URL
        url: String,
        /// Alt text, empty when absent
        alt: String,
        /// Caption line
        caption: Option<String>,
        /// Pixel width when known
        width: Option<f64>,
        /// Pixel height when known
        height: Option<f64>,
        /// Resolved aspect ratio (width/height or the configured fallback)
        aspect_ratio: f64,
    },
}

impl Node {
    /// Create a document root.
    pub fn document(children: Vec<Node>) -> Self {
        Node::Document { children }
    }

    /// Create a section container.
    pub fn section(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Section {
            kind: kind.into(),
            children,
        }
    }

    /// Create a heading.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Node::Paragraph { content }
    }

    /// Create a code block.
    pub fn code_block(language: impl Into<String>, code: impl Into<String>) -> Self {
        Node::CodeBlock {
            language: language.into(),
            code: code.into(),
        }
    }

    /// Check if this is a heading node.
    pub fn is_heading(&self) -> bool {
        matches!(self, Node::Heading { .. })
    }

    /// Check if this is a section container.
    pub fn is_section(&self) -> bool {
        matches!(self, Node::Section { .. })
    }

    /// Direct child nodes, for variants that have them.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children } | Node::Section { children, .. } => children,
            Node::FaqEntry { answer, .. } => answer,
            _ => &[],
        }
    }
}

/// Inline content inside paragraphs, list items, and table cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Inline {
    /// Plain text, never containing line breaks
    Text {
        /// Run text
        text: String,
    },
    /// Explicit line break
    LineBreak,
    /// Bold span
    Bold {
        /// Span text
        text: String,
    },
    /// Inline code span
    Code {
        /// Span text
        text: String,
    },
    /// Hyperlink
    Link {
        /// Display label
        label: String,
        /// Link target
        href: String,
        /// Whether the target is a same-page anchor
        is_anchor: bool,
    },
}

impl Inline {
    /// Create a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Bold { text: text.into() }
    }

    /// Create an inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        Inline::Code { text: text.into() }
    }

    /// Create a link, classifying the target as anchor or external.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        let href = href.into();
        let is_anchor = href.starts_with('#');
        Inline::Link {
            label: label.into(),
            href,
            is_anchor,
        }
    }

    /// The inline's display text (labels for links, empty for breaks).
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text { text } | Inline::Bold { text } | Inline::Code { text } => text,
            Inline::LineBreak => "",
            Inline::Link { label, .. } => label,
        }
    }

    /// Lower scanner tokens into inline nodes, splitting embedded line
    /// breaks in text runs into explicit [`Inline::LineBreak`] leaves.
    pub fn from_tokens(tokens: &[InlineToken]) -> Vec<Inline> {
        let mut content = Vec::new();
        for token in tokens {
            match token {
                InlineToken::Text { text } => {
                    let mut first = true;
                    for piece in text.split('\n') {
                        if !first {
                            content.push(Inline::LineBreak);
                        }
                        if !piece.is_empty() {
                            content.push(Inline::text(piece));
                        }
                        first = false;
                    }
                }
                InlineToken::Bold { text } => content.push(Inline::bold(text.clone())),
                InlineToken::Code { text } => content.push(Inline::code(text.clone())),
                InlineToken::Link {
                    label,
                    href,
                    is_anchor,
                } => content.push(Inline::Link {
                    label: label.clone(),
                    href: href.clone(),
                    is_anchor: *is_anchor,
                }),
            }
        }
        content
    }
}

/// One list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item content
    pub content: Vec<Inline>,
}

impl ListItem {
    /// Create a list item.
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row cells; may be fewer or more than the header columns
    pub cells: Vec<TableCell>,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Inline>,
}

impl TableCell {
    /// Create a table cell.
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }
}

/// A resolved link carried by link lists and bylines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkNode {
    /// Link target
    pub href: String,
    /// Display label
    pub label: String,
    /// Whether the target is a same-page anchor
    pub is_anchor: bool,
}

impl LinkNode {
    /// Create a link node, classifying the target.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        let href = href.into();
        let is_anchor = href.starts_with('#');
        Self {
            href,
            label: label.into(),
            is_anchor,
        }
    }
}

impl From<&BlockLink> for LinkNode {
    fn from(link: &BlockLink) -> Self {
        LinkNode::new(&link.href, link.display_text())
    }
}

impl From<&SocialLink> for LinkNode {
    fn from(link: &SocialLink) -> Self {
        let label = link
            .platform
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(&link.url);
        LinkNode::new(&link.url, label)
    }
}
