//! Rendering module for converting documents to presentation trees and
//! output formats.

mod block;
mod document;
mod html;
mod json;
mod node;
mod options;
mod result;
mod text;
pub mod visitor;

pub use block::{render_block, RenderContext};
pub use document::{render_document, render_document_with_stats};
pub use html::{to_html, HtmlOptions, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use node::{Inline, LinkNode, ListItem, Node, TableCell, TableRow};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
pub use visitor::{walk, CompositeVisitor, LinkCollector, NodeVisitor, VisitorAction};
