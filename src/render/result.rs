//! Rendering result with tree statistics.

use serde::{Deserialize, Serialize};

use crate::render::node::{Inline, LinkNode, ListItem, Node, TableRow};
use crate::render::visitor::{walk, NodeVisitor, VisitorAction};

/// Result of rendering a document: the presentation tree plus statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    /// The presentation tree
    pub tree: Node,

    /// Statistics describing the tree
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(tree: Node, stats: RenderStats) -> Self {
        Self { tree, stats }
    }
}

/// Statistics collected by walking a rendered tree.
///
/// Counts describe what an adapter will actually emit, not what the input
/// contained: dropped blocks and filtered entries never show up here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStats {
    /// Number of block sections
    pub section_count: u32,

    /// Number of headings at any level
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of lists
    pub list_count: u32,

    /// Number of list items across all lists
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of table body rows across all tables
    pub table_row_count: u32,

    /// Number of FAQ entries
    pub faq_entry_count: u32,

    /// Number of links of any kind: inline, link lists, bylines, CTAs
    pub link_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Approximate word count (whitespace-separated tokens) of visible
    /// text. Headings, paragraphs, list items, table columns and cells,
    /// FAQ questions, and link labels count; code does not.
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute statistics by walking a rendered tree.
    pub fn from_node(node: &Node) -> Self {
        let mut collector = StatsCollector::default();
        walk(node, &mut collector);
        collector.stats
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.code_block_count += other.code_block_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.faq_entry_count += other.faq_entry_count;
        self.link_count += other.link_count;
        self.image_count += other.image_count;
        self.word_count += other.word_count;
    }
}

#[derive(Default)]
struct StatsCollector {
    stats: RenderStats,
}

impl StatsCollector {
    fn count_words(&mut self, text: &str) {
        self.stats.word_count += text.split_whitespace().count() as u32;
    }
}

impl NodeVisitor for StatsCollector {
    fn visit_section(&mut self, _kind: &str) -> VisitorAction {
        self.stats.section_count += 1;
        VisitorAction::Continue
    }

    fn visit_heading(&mut self, _level: u8, text: &str) -> VisitorAction {
        self.stats.heading_count += 1;
        self.count_words(text);
        VisitorAction::Continue
    }

    fn visit_paragraph(&mut self, _content: &[Inline]) -> VisitorAction {
        self.stats.paragraph_count += 1;
        VisitorAction::Continue
    }

    fn visit_code_block(&mut self, _language: &str, _code: &str) -> VisitorAction {
        self.stats.code_block_count += 1;
        VisitorAction::Continue
    }

    fn visit_list(&mut self, _ordered: bool, items: &[ListItem]) -> VisitorAction {
        self.stats.list_count += 1;
        self.stats.list_item_count += items.len() as u32;
        VisitorAction::Continue
    }

    fn visit_table(&mut self, columns: &[String], rows: &[TableRow]) -> VisitorAction {
        self.stats.table_count += 1;
        self.stats.table_row_count += rows.len() as u32;
        for column in columns {
            self.count_words(column);
        }
        VisitorAction::Continue
    }

    fn visit_faq_entry(&mut self, question: &str) -> VisitorAction {
        self.stats.faq_entry_count += 1;
        self.count_words(question);
        VisitorAction::Continue
    }

    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        self.stats.link_count += 1;
        self.count_words(&link.label);
        VisitorAction::Continue
    }

    fn visit_action_link(&mut self, label: &str, _href: &str, _is_anchor: bool) -> VisitorAction {
        self.stats.link_count += 1;
        self.count_words(label);
        VisitorAction::Continue
    }

    fn visit_image(&mut self, _url: &str, _alt: &str) -> VisitorAction {
        self.stats.image_count += 1;
        VisitorAction::Continue
    }

    fn visit_inline(&mut self, inline: &Inline) -> VisitorAction {
        match inline {
            Inline::Text { text } | Inline::Bold { text } => self.count_words(text),
            Inline::Link { label, .. } => {
                self.stats.link_count += 1;
                self.count_words(label);
            }
            Inline::Code { .. } | Inline::LineBreak => {}
        }
        VisitorAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::TableCell;

    #[test]
    fn test_stats_from_tree() {
        let tree = Node::document(vec![
            Node::heading(1, "Release notes"),
            Node::section(
                "section",
                vec![
                    Node::heading(2, "What changed"),
                    Node::paragraph(vec![
                        Inline::text("See "),
                        Inline::link("the docs", "https://ex.com/docs"),
                        Inline::text(" for details."),
                    ]),
                    Node::code_block("rust", "fn main() {}"),
                ],
            ),
            Node::section(
                "list",
                vec![Node::List {
                    ordered: false,
                    items: vec![
                        ListItem::new(vec![Inline::text("first point")]),
                        ListItem::new(vec![Inline::text("second point")]),
                    ],
                }],
            ),
        ]);

        let stats = RenderStats::from_node(&tree);
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.heading_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.code_block_count, 1);
        assert_eq!(stats.list_count, 1);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.link_count, 1);
        // "Release notes" + "What changed" + "See the docs for details."
        // + two two-word items. Code text never counts.
        assert_eq!(stats.word_count, 2 + 2 + 5 + 4);
    }

    #[test]
    fn test_stats_count_table_and_faq() {
        let tree = Node::document(vec![
            Node::Table {
                columns: vec!["Plan".to_string(), "Price".to_string()],
                rows: vec![TableRow {
                    cells: vec![
                        TableCell::new(vec![Inline::text("Free")]),
                        TableCell::new(vec![Inline::text("$0")]),
                    ],
                }],
            },
            Node::FaqEntry {
                question: "Is it free?".to_string(),
                answer: vec![Node::paragraph(vec![Inline::text("Yes.")])],
            },
        ]);

        let stats = RenderStats::from_node(&tree);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 1);
        assert_eq!(stats.faq_entry_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.word_count, 2 + 2 + 3 + 1);
    }

    #[test]
    fn test_stats_merge() {
        let mut stats1 = RenderStats::new();
        stats1.section_count = 5;
        stats1.word_count = 40;

        let stats2 = RenderStats {
            section_count: 3,
            link_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.section_count, 8);
        assert_eq!(stats1.word_count, 40);
        assert_eq!(stats1.link_count, 4);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(RenderStats::default()).unwrap();
        assert!(json.get("sectionCount").is_some());
        assert!(json.get("wordCount").is_some());
        assert!(json.get("section_count").is_none());
    }
}
