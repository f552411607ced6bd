//! Visitor pattern for traversing rendered trees.
//!
//! Adapters and analysis passes walk the finished tree through
//! [`NodeVisitor`]: pre-order, with each container method deciding whether
//! its children are descended into. The plain-text adapter and render
//! statistics are both built on this walk.
//!
//! # Example
//!
//! ```
//! use modoc::render::{walk, Node, NodeVisitor, VisitorAction};
//!
//! #[derive(Default)]
//! struct HeadingLister {
//!     headings: Vec<String>,
//! }
//!
//! impl NodeVisitor for HeadingLister {
//!     fn visit_heading(&mut self, _level: u8, text: &str) -> VisitorAction {
//!         self.headings.push(text.to_string());
//!         VisitorAction::Continue
//!     }
//! }
//!
//! let tree = Node::section("hero", vec![Node::heading(1, "Welcome")]);
//! let mut lister = HeadingLister::default();
//! walk(&tree, &mut lister);
//! assert_eq!(lister.headings, vec!["Welcome"]);
//! ```

use crate::render::node::{Inline, LinkNode, ListItem, Node, TableRow};

/// Action returned by visitor methods to control traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitorAction {
    /// Descend into the node's children.
    #[default]
    Continue,

    /// Do not descend into the node's children.
    SkipChildren,
}

impl VisitorAction {
    /// Check if traversal should descend into children.
    pub fn should_descend(&self) -> bool {
        matches!(self, VisitorAction::Continue)
    }
}

/// Trait for visiting nodes of a rendered tree.
///
/// All methods return `VisitorAction::Continue` by default. Leaf methods
/// return an action for uniformity; the walk ignores it.
pub trait NodeVisitor: Send + Sync {
    /// Called at the document root.
    fn visit_document(&mut self) -> VisitorAction {
        VisitorAction::Continue
    }

    /// Called for each block section container.
    fn visit_section(&mut self, kind: &str) -> VisitorAction {
        let _ = kind;
        VisitorAction::Continue
    }

    /// Called for each heading.
    fn visit_heading(&mut self, level: u8, text: &str) -> VisitorAction {
        let _ = (level, text);
        VisitorAction::Continue
    }

    /// Called for each paragraph before its inline content.
    fn visit_paragraph(&mut self, content: &[Inline]) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }

    /// Called for each code block.
    fn visit_code_block(&mut self, language: &str, code: &str) -> VisitorAction {
        let _ = (language, code);
        VisitorAction::Continue
    }

    /// Called for each list before its items' inline content.
    fn visit_list(&mut self, ordered: bool, items: &[ListItem]) -> VisitorAction {
        let _ = (ordered, items);
        VisitorAction::Continue
    }

    /// Called for each table before its cells' inline content.
    fn visit_table(&mut self, columns: &[String], rows: &[TableRow]) -> VisitorAction {
        let _ = (columns, rows);
        VisitorAction::Continue
    }

    /// Called for each FAQ entry before its answer nodes.
    fn visit_faq_entry(&mut self, question: &str) -> VisitorAction {
        let _ = question;
        VisitorAction::Continue
    }

    /// Called for each link list before its links.
    fn visit_link_list(&mut self, links: &[LinkNode]) -> VisitorAction {
        let _ = links;
        VisitorAction::Continue
    }

    /// Called for each link inside link lists and bylines.
    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        let _ = link;
        VisitorAction::Continue
    }

    /// Called for each call-to-action link.
    fn visit_action_link(&mut self, label: &str, href: &str, is_anchor: bool) -> VisitorAction {
        let _ = (label, href, is_anchor);
        VisitorAction::Continue
    }

    /// Called for each byline before its social links.
    fn visit_byline(
        &mut self,
        name: &str,
        title: Option<&str>,
        location: Option<&str>,
        bio: Option<&str>,
    ) -> VisitorAction {
        let _ = (name, title, location, bio);
        VisitorAction::Continue
    }

    /// Called for each image.
    fn visit_image(&mut self, url: &str, alt: &str) -> VisitorAction {
        let _ = (url, alt);
        VisitorAction::Continue
    }

    /// Called for each inline run inside paragraphs, list items, and cells.
    fn visit_inline(&mut self, inline: &Inline) -> VisitorAction {
        let _ = inline;
        VisitorAction::Continue
    }
}

/// Walk a tree pre-order, dispatching each node to the visitor.
pub fn walk<V: NodeVisitor + ?Sized>(node: &Node, visitor: &mut V) {
    match node {
        Node::Document { children } => {
            if visitor.visit_document().should_descend() {
                for child in children {
                    walk(child, visitor);
                }
            }
        }
        Node::Section { kind, children } => {
            if visitor.visit_section(kind).should_descend() {
                for child in children {
                    walk(child, visitor);
                }
            }
        }
        Node::Heading { level, text } => {
            visitor.visit_heading(*level, text);
        }
        Node::Paragraph { content } => {
            if visitor.visit_paragraph(content).should_descend() {
                for inline in content {
                    visitor.visit_inline(inline);
                }
            }
        }
        Node::CodeBlock { language, code } => {
            visitor.visit_code_block(language, code);
        }
        Node::List { ordered, items } => {
            if visitor.visit_list(*ordered, items).should_descend() {
                for item in items {
                    for inline in &item.content {
                        visitor.visit_inline(inline);
                    }
                }
            }
        }
        Node::Table { columns, rows } => {
            if visitor.visit_table(columns, rows).should_descend() {
                for row in rows {
                    for cell in &row.cells {
                        for inline in &cell.content {
                            visitor.visit_inline(inline);
                        }
                    }
                }
            }
        }
        Node::FaqEntry { question, answer } => {
            if visitor.visit_faq_entry(question).should_descend() {
                for child in answer {
                    walk(child, visitor);
                }
            }
        }
        Node::LinkList { links } => {
            if visitor.visit_link_list(links).should_descend() {
                for link in links {
                    visitor.visit_link(link);
                }
            }
        }
        Node::ActionLink {
            label,
            href,
            is_anchor,
        } => {
            visitor.visit_action_link(label, href, *is_anchor);
        }
        Node::Byline {
            name,
            title,
            location,
            bio,
            links,
            ..
        } => {
            let action =
                visitor.visit_byline(name, title.as_deref(), location.as_deref(), bio.as_deref());
            if action.should_descend() {
                for link in links {
                    visitor.visit_link(link);
                }
            }
        }
        Node::Image { url, alt, .. } => {
            visitor.visit_image(url, alt);
        }
    }
}

/// Visitor that collects every link in a tree: inline links, link lists,
/// byline socials, and CTA actions.
#[derive(Debug, Default)]
pub struct LinkCollector {
    /// Collected links in encounter order
    pub links: Vec<LinkNode>,
}

impl LinkCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect all links under a node.
    pub fn collect(node: &Node) -> Vec<LinkNode> {
        let mut collector = Self::new();
        walk(node, &mut collector);
        collector.links
    }
}

impl NodeVisitor for LinkCollector {
    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        self.links.push(link.clone());
        VisitorAction::Continue
    }

    fn visit_action_link(&mut self, label: &str, href: &str, is_anchor: bool) -> VisitorAction {
        self.links.push(LinkNode {
            href: href.to_string(),
            label: label.to_string(),
            is_anchor,
        });
        VisitorAction::Continue
    }

    fn visit_inline(&mut self, inline: &Inline) -> VisitorAction {
        if let Inline::Link {
            label,
            href,
            is_anchor,
        } = inline
        {
            self.links.push(LinkNode {
                href: href.clone(),
                label: label.clone(),
                is_anchor: *is_anchor,
            });
        }
        VisitorAction::Continue
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order; the first that asks to skip children
/// decides, and later visitors are not called for that node.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn NodeVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn dispatch(
        &mut self,
        mut call: impl FnMut(&mut dyn NodeVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            if !call(visitor.as_mut()).should_descend() {
                return VisitorAction::SkipChildren;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeVisitor for CompositeVisitor {
    fn visit_document(&mut self) -> VisitorAction {
        self.dispatch(|v| v.visit_document())
    }

    fn visit_section(&mut self, kind: &str) -> VisitorAction {
        self.dispatch(|v| v.visit_section(kind))
    }

    fn visit_heading(&mut self, level: u8, text: &str) -> VisitorAction {
        self.dispatch(|v| v.visit_heading(level, text))
    }

    fn visit_paragraph(&mut self, content: &[Inline]) -> VisitorAction {
        self.dispatch(|v| v.visit_paragraph(content))
    }

    fn visit_code_block(&mut self, language: &str, code: &str) -> VisitorAction {
        self.dispatch(|v| v.visit_code_block(language, code))
    }

    fn visit_list(&mut self, ordered: bool, items: &[ListItem]) -> VisitorAction {
        self.dispatch(|v| v.visit_list(ordered, items))
    }

    fn visit_table(&mut self, columns: &[String], rows: &[TableRow]) -> VisitorAction {
        self.dispatch(|v| v.visit_table(columns, rows))
    }

    fn visit_faq_entry(&mut self, question: &str) -> VisitorAction {
        self.dispatch(|v| v.visit_faq_entry(question))
    }

    fn visit_link_list(&mut self, links: &[LinkNode]) -> VisitorAction {
        self.dispatch(|v| v.visit_link_list(links))
    }

    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        self.dispatch(|v| v.visit_link(link))
    }

    fn visit_action_link(&mut self, label: &str, href: &str, is_anchor: bool) -> VisitorAction {
        self.dispatch(|v| v.visit_action_link(label, href, is_anchor))
    }

    fn visit_byline(
        &mut self,
        name: &str,
        title: Option<&str>,
        location: Option<&str>,
        bio: Option<&str>,
    ) -> VisitorAction {
        self.dispatch(|v| v.visit_byline(name, title, location, bio))
    }

    fn visit_image(&mut self, url: &str, alt: &str) -> VisitorAction {
        self.dispatch(|v| v.visit_image(url, alt))
    }

    fn visit_inline(&mut self, inline: &Inline) -> VisitorAction {
        self.dispatch(|v| v.visit_inline(inline))
    }
}
