//! Block dispatch: one renderer per block type.
//!
//! Each renderer maps a coerced block to at most one [`Node::Section`].
//! Returning `None` means the block's emptiness rule fired and the block
//! contributes nothing to the tree. Renderers only read the fields their
//! block type defines; stray fields on a block are ignored.

use crate::markdown::{segment, tokenize, MarkdownSegment};
use crate::model::{BlockKind, DocumentBlock, FaqItem};
use crate::render::node::{Inline, LinkNode, ListItem, Node, TableCell, TableRow};
use crate::render::options::RenderOptions;

/// Document-level facts the block renderers need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// The H1 the assembler rendered, if any
    pub document_h1: Option<String>,
}

impl RenderContext {
    /// Context for a document without a rendered H1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a document whose H1 was rendered.
    pub fn with_h1(h1: impl Into<String>) -> Self {
        Self {
            document_h1: Some(h1.into()),
        }
    }

    /// Whether the assembler already rendered this exact heading as the H1.
    fn duplicates_h1(&self, heading: &str) -> bool {
        self.document_h1.as_deref() == Some(heading)
    }
}

/// Render one block to a presentation node.
///
/// Returns `None` when the block's emptiness rule says it renders nothing:
/// hero and unknown blocks with neither heading nor body, comparison tables
/// without columns, FAQ blocks whose every entry lacks a question.
pub fn render_block(
    block: &DocumentBlock,
    ctx: &RenderContext,
    options: &RenderOptions,
) -> Option<Node> {
    match &block.kind {
        BlockKind::Hero => render_hero(block, ctx),
        BlockKind::Summary => Some(render_prose(block, "summary")),
        BlockKind::Section => Some(render_section(block)),
        BlockKind::List => Some(render_items(block, "list", block.ordered)),
        BlockKind::Steps => Some(render_items(block, "steps", true)),
        BlockKind::ComparisonTable => render_table(block),
        BlockKind::Faq => render_faq(block),
        BlockKind::Cta => Some(render_cta(block, options)),
        BlockKind::Conclusion => Some(render_prose(block, "conclusion")),
        BlockKind::Sources => Some(render_sources(block, options)),
        BlockKind::Unknown(tag) => render_unknown(block, tag),
    }
}

fn render_hero(block: &DocumentBlock, ctx: &RenderContext) -> Option<Node> {
    if !block.has_content() {
        return None;
    }
    let mut children = Vec::new();
    if let Some(heading) = block.heading_text() {
        // The assembler may already have rendered this exact text as the
        // document H1; repeating it would double the page title.
        if !ctx.duplicates_h1(heading) {
            let level = if ctx.document_h1.is_some() { 2 } else { 1 };
            children.push(Node::heading(level, heading));
        }
    }
    children.extend(body_nodes_of(block));
    push_links(block, &mut children);
    Some(Node::section("hero", children))
}

fn render_prose(block: &DocumentBlock, kind: &str) -> Node {
    let mut children = Vec::new();
    push_heading(block, &mut children);
    children.extend(body_nodes_of(block));
    push_links(block, &mut children);
    Node::section(kind, children)
}

fn render_section(block: &DocumentBlock) -> Node {
    let level = heading_level(block.level);
    let mut children = Vec::new();
    if let Some(heading) = block.heading_text() {
        children.push(Node::heading(level, heading));
    }
    children.extend(body_nodes_of(block));
    push_links(block, &mut children);
    Node::section("section", children)
}

/// Heading depth from a section's level hint. Absent and junk hints coerce
/// to zero, which clamps to the shallowest allowed depth.
fn heading_level(hint: Option<i64>) -> u8 {
    hint.unwrap_or(0).clamp(2, 4) as u8
}

fn render_items(block: &DocumentBlock, kind: &str, ordered: bool) -> Node {
    let mut children = Vec::new();
    push_heading(block, &mut children);
    let items = block
        .items
        .iter()
        .map(|item| ListItem::new(Inline::from_tokens(&tokenize(item))))
        .collect();
    // An empty item sequence still renders an empty list container.
    children.push(Node::List { ordered, items });
    Node::section(kind, children)
}

fn render_table(block: &DocumentBlock) -> Option<Node> {
    if block.table_columns.is_empty() {
        return None;
    }
    let mut children = Vec::new();
    push_heading(block, &mut children);
    let rows = block
        .table_rows
        .iter()
        .map(|row| TableRow {
            cells: row
                .iter()
                .map(|cell| TableCell::new(Inline::from_tokens(&tokenize(cell))))
                .collect(),
        })
        .collect();
    children.push(Node::Table {
        columns: block.table_columns.clone(),
        rows,
    });
    Some(Node::section("comparison_table", children))
}

fn render_faq(block: &DocumentBlock) -> Option<Node> {
    let entries: Vec<&FaqItem> = block
        .faq_items
        .iter()
        .filter(|item| item.has_question())
        .collect();
    if entries.is_empty() {
        return None;
    }
    let mut children = Vec::new();
    push_heading(block, &mut children);
    for item in entries {
        children.push(Node::FaqEntry {
            question: item.question.clone(),
            answer: body_nodes(&item.answer),
        });
    }
    Some(Node::section("faq", children))
}

fn render_cta(block: &DocumentBlock, options: &RenderOptions) -> Node {
    let mut children = Vec::new();
    push_heading(block, &mut children);
    children.extend(body_nodes_of(block));

    let label = block
        .cta
        .as_ref()
        .and_then(|cta| cta.label.as_deref())
        .filter(|label| !label.trim().is_empty())
        .unwrap_or(&options.cta_label);
    let href = block
        .cta
        .as_ref()
        .and_then(|cta| cta.href.as_deref())
        .filter(|href| !href.trim().is_empty())
        .unwrap_or(&options.cta_href);
    children.push(Node::ActionLink {
        label: label.to_string(),
        href: href.to_string(),
        is_anchor: href.starts_with('#'),
    });
    Node::section("cta", children)
}

fn render_sources(block: &DocumentBlock, options: &RenderOptions) -> Node {
    let mut children = Vec::new();
    let heading = block.heading_text().unwrap_or(&options.sources_heading);
    children.push(Node::heading(2, heading));
    children.extend(body_nodes_of(block));
    push_links(block, &mut children);
    Node::section("sources", children)
}

fn render_unknown(block: &DocumentBlock, tag: &str) -> Option<Node> {
    if !block.has_content() {
        return None;
    }
    log::debug!("rendering unrecognized block type {tag:?} as a generic section");
    let kind = if tag.is_empty() { "unknown" } else { tag };
    let mut children = Vec::new();
    push_heading(block, &mut children);
    children.extend(body_nodes_of(block));
    push_links(block, &mut children);
    Some(Node::section(kind, children))
}

/// Push the block's heading at the default depth, if present.
fn push_heading(block: &DocumentBlock, children: &mut Vec<Node>) {
    if let Some(heading) = block.heading_text() {
        children.push(Node::heading(2, heading));
    }
}

/// Render the block's body, if present.
fn body_nodes_of(block: &DocumentBlock) -> Vec<Node> {
    block.body_text().map(body_nodes).unwrap_or_default()
}

/// Segment free text and lower each segment to presentation nodes.
fn body_nodes(text: &str) -> Vec<Node> {
    segment(text)
        .into_iter()
        .map(|seg| match seg {
            MarkdownSegment::Paragraph { text } => {
                Node::paragraph(Inline::from_tokens(&tokenize(&text)))
            }
            MarkdownSegment::Code { language, text } => Node::code_block(language, text),
        })
        .collect()
}

/// Push a link list of the block's renderable links, if any survive.
fn push_links(block: &DocumentBlock, children: &mut Vec<Node>) {
    let links: Vec<LinkNode> = block.renderable_links().map(LinkNode::from).collect();
    if !links.is_empty() {
        children.push(Node::LinkList { links });
    }
}
