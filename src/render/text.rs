//! Plain text rendering for modular documents.

use crate::render::node::{Inline, LinkNode, ListItem, Node, TableRow};
use crate::render::visitor::{walk, NodeVisitor, VisitorAction};

/// Convert a rendered tree to plain text.
///
/// Blocks are separated by blank lines. Inline markup is flattened to its
/// visible text; external link targets follow their label in parentheses,
/// anchor targets are dropped.
pub fn to_text(node: &Node) -> String {
    let mut collector = TextCollector::default();
    walk(node, &mut collector);
    collector.blocks.join("\n\n")
}

#[derive(Default)]
struct TextCollector {
    blocks: Vec<String>,
}

impl TextCollector {
    fn append_line(&mut self, line: &str) {
        match self.blocks.last_mut() {
            Some(block) => {
                block.push('\n');
                block.push_str(line);
            }
            None => self.blocks.push(line.to_string()),
        }
    }
}

fn flatten(content: &[Inline]) -> String {
    let mut out = String::new();
    for inline in content {
        match inline {
            Inline::Text { text } | Inline::Bold { text } | Inline::Code { text } => {
                out.push_str(text);
            }
            Inline::LineBreak => out.push('\n'),
            Inline::Link {
                label,
                href,
                is_anchor,
            } => {
                out.push_str(label);
                if !is_anchor {
                    out.push_str(&format!(" ({href})"));
                }
            }
        }
    }
    out
}

fn link_line(link: &LinkNode) -> String {
    if link.is_anchor {
        format!("- {}", link.label)
    } else {
        format!("- {} ({})", link.label, link.href)
    }
}

impl NodeVisitor for TextCollector {
    fn visit_heading(&mut self, _level: u8, text: &str) -> VisitorAction {
        self.blocks.push(text.to_string());
        VisitorAction::Continue
    }

    fn visit_paragraph(&mut self, content: &[Inline]) -> VisitorAction {
        self.blocks.push(flatten(content));
        VisitorAction::SkipChildren
    }

    fn visit_code_block(&mut self, _language: &str, code: &str) -> VisitorAction {
        self.blocks.push(code.to_string());
        VisitorAction::Continue
    }

    fn visit_list(&mut self, ordered: bool, items: &[ListItem]) -> VisitorAction {
        let lines: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if ordered {
                    format!("{}. {}", i + 1, flatten(&item.content))
                } else {
                    format!("- {}", flatten(&item.content))
                }
            })
            .collect();
        self.blocks.push(lines.join("\n"));
        VisitorAction::SkipChildren
    }

    fn visit_table(&mut self, columns: &[String], rows: &[TableRow]) -> VisitorAction {
        let mut lines = vec![columns.join(" | ")];
        for row in rows {
            let cells: Vec<String> = row.cells.iter().map(|c| flatten(&c.content)).collect();
            lines.push(cells.join(" | "));
        }
        self.blocks.push(lines.join("\n"));
        VisitorAction::SkipChildren
    }

    fn visit_faq_entry(&mut self, question: &str) -> VisitorAction {
        self.blocks.push(question.to_string());
        VisitorAction::Continue
    }

    fn visit_link_list(&mut self, links: &[LinkNode]) -> VisitorAction {
        let lines: Vec<String> = links.iter().map(link_line).collect();
        self.blocks.push(lines.join("\n"));
        VisitorAction::SkipChildren
    }

    fn visit_action_link(&mut self, label: &str, href: &str, is_anchor: bool) -> VisitorAction {
        if is_anchor {
            self.blocks.push(label.to_string());
        } else {
            self.blocks.push(format!("{label} ({href})"));
        }
        VisitorAction::Continue
    }

    fn visit_byline(
        &mut self,
        name: &str,
        title: Option<&str>,
        location: Option<&str>,
        bio: Option<&str>,
    ) -> VisitorAction {
        let mut lines = vec![name.to_string()];
        let detail: Vec<&str> = [title, location].into_iter().flatten().collect();
        if !detail.is_empty() {
            lines.push(detail.join(" · "));
        }
        if let Some(bio) = bio {
            lines.push(bio.to_string());
        }
        self.blocks.push(lines.join("\n"));
        VisitorAction::Continue
    }

    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        // Link lists consume their links above, so this only sees byline
        // socials; they join the byline block as extra lines.
        self.append_line(&link_line(link));
        VisitorAction::Continue
    }

    fn visit_image(&mut self, _url: &str, alt: &str) -> VisitorAction {
        if !alt.trim().is_empty() {
            self.blocks.push(alt.to_string());
        }
        VisitorAction::Continue
    }
}
