//! # modoc
//!
//! Defensive parsing and structural rendering for modular JSON documents.
//!
//! This library turns untrusted, loosely shaped JSON into a typed
//! [`ModularDocument`] and renders it into a UI-agnostic presentation tree,
//! with HTML, plain text, and JSON adapters on top.
//!
//! ## Quick Start
//!
//! ```no_run
//! use modoc::{parse_file, render};
//!
//! fn main() -> modoc::Result<()> {
//!     // Parse a modular document file
//!     let doc = parse_file("article.json")?;
//!
//!     // Render the presentation tree, then emit HTML
//!     let options = render::RenderOptions::default();
//!     let tree = render::render_document(&doc, &options);
//!     let html = render::to_html(&tree, &render::HtmlOptions::default());
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total parsing**: malformed fields degrade to defaults, never errors
//! - **Markdown-ish body text**: fenced code, bold, inline code, links
//! - **Eleven block types**: hero, summary, sections, lists, steps,
//!   comparison tables, FAQ, CTA, conclusion, sources
//! - **Pluggable output**: HTML, plain text, and JSON tree adapters
//! - **Tree statistics**: section, word, and link counts per render

pub mod error;
pub mod markdown;
pub mod model;
pub mod parse;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use markdown::{segment, tokenize, InlineToken, MarkdownSegment};
pub use model::{
    Author, BlockKind, BlockLink, ConversionPlan, CtaAction, DocumentBlock, FaqItem, FeaturedImage,
    ModularDocument, SeoMeta, SocialLink,
};
pub use parse::{parse_block, parse_document};
pub use render::{
    render_document, render_document_with_stats, HtmlOptions, Inline, JsonFormat, Node,
    RenderOptions, RenderResult, RenderStats,
};

use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a modular document file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Returns
///
/// A `Result` containing the parsed `ModularDocument` or an error. Errors
/// come only from I/O or JSON syntax; any well-formed JSON value produces
/// a document, however unexpected its shape.
///
/// # Example
///
/// ```no_run
/// use modoc::parse_file;
///
/// let doc = parse_file("article.json").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ModularDocument> {
    let data = fs::read_to_string(path)?;
    parse_str(&data)
}

/// Parse a modular document from a JSON string.
///
/// # Example
///
/// ```
/// use modoc::parse_str;
///
/// let doc = parse_str(r#"{"seoMeta":{"h1":"Hello"},"blocks":[]}"#).unwrap();
/// assert_eq!(doc.h1(), Some("Hello"));
/// ```
pub fn parse_str(input: &str) -> Result<ModularDocument> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(parse::parse_document(&value))
}

/// Parse a modular document from a reader.
///
/// # Example
///
/// ```no_run
/// use modoc::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("article.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ModularDocument> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(parse::parse_document(&value))
}

/// Render a document file to its presentation tree with default options.
///
/// # Example
///
/// ```no_run
/// use modoc::render_file;
///
/// let tree = render_file("article.json").unwrap();
/// println!("{}", tree.children().len());
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    let doc = parse_file(path)?;
    Ok(render::render_document(&doc, &RenderOptions::default()))
}

/// Render a JSON string to its presentation tree with default options.
pub fn render_str(input: &str) -> Result<Node> {
    let doc = parse_str(input)?;
    Ok(render::render_document(&doc, &RenderOptions::default()))
}

/// Convert a document file to HTML.
///
/// # Example
///
/// ```no_run
/// use modoc::to_html;
///
/// let html = to_html("article.json").unwrap();
/// std::fs::write("article.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let tree = render_file(path)?;
    Ok(render::to_html(&tree, &HtmlOptions::default()))
}

/// Convert a document file to plain text.
///
/// # Example
///
/// ```no_run
/// use modoc::to_text;
///
/// let text = to_text("article.json").unwrap();
/// println!("{}", text);
/// ```
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let tree = render_file(path)?;
    Ok(render::to_text(&tree))
}

/// Convert a document file to a JSON presentation tree.
///
/// # Example
///
/// ```no_run
/// use modoc::{to_json, JsonFormat};
///
/// let json = to_json("article.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("tree.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let tree = render_file(path)?;
    render::to_json(&tree, format)
}

/// Builder for parsing and rendering modular documents.
///
/// # Example
///
/// ```no_run
/// use modoc::Modoc;
///
/// let html = Modoc::new()
///     .with_cta_label("Get started")
///     .standalone()
///     .render("article.json")?
///     .to_html();
/// # Ok::<(), modoc::Error>(())
/// ```
pub struct Modoc {
    render_options: RenderOptions,
    html_options: HtmlOptions,
}

impl Modoc {
    /// Create a new Modoc builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
            html_options: HtmlOptions::default(),
        }
    }

    /// Set the fallback CTA label.
    pub fn with_cta_label(mut self, label: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_cta_label(label);
        self
    }

    /// Set the fallback CTA target.
    pub fn with_cta_href(mut self, href: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_cta_href(href);
        self
    }

    /// Set the fallback sources heading.
    pub fn with_sources_heading(mut self, heading: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_sources_heading(heading);
        self
    }

    /// Set the aspect ratio used when image dimensions are missing.
    pub fn with_fallback_aspect_ratio(mut self, ratio: f64) -> Self {
        self.render_options = self.render_options.with_fallback_aspect_ratio(ratio);
        self
    }

    /// Set whether headings get slugified `id` attributes.
    pub fn with_heading_anchors(mut self, enabled: bool) -> Self {
        self.html_options = self.html_options.with_heading_anchors(enabled);
        self
    }

    /// Emit standalone HTML pages instead of fragments.
    pub fn standalone(mut self) -> Self {
        self.html_options = self.html_options.with_standalone(true);
        self
    }

    /// Parse and render a document file.
    pub fn render<P: AsRef<Path>>(self, path: P) -> Result<ModocResult> {
        let document = parse_file(path)?;
        Ok(self.finish(document))
    }

    /// Parse and render a JSON string.
    pub fn render_str(self, input: &str) -> Result<ModocResult> {
        let document = parse_str(input)?;
        Ok(self.finish(document))
    }

    /// Render an already-deserialized JSON value.
    ///
    /// This path cannot fail: parsing is total over JSON values.
    pub fn render_value(self, value: &serde_json::Value) -> ModocResult {
        self.finish(parse::parse_document(value))
    }

    fn finish(self, document: ModularDocument) -> ModocResult {
        let result = render::render_document_with_stats(&document, &self.render_options);
        ModocResult {
            document,
            tree: result.tree,
            stats: result.stats,
            html_options: self.html_options,
        }
    }
}

impl Default for Modoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing and rendering a modular document.
pub struct ModocResult {
    /// The parsed document
    pub document: ModularDocument,
    tree: Node,
    stats: RenderStats,
    html_options: HtmlOptions,
}

impl ModocResult {
    /// Get the presentation tree.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Get the render statistics.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.tree, &self.html_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.tree)
    }

    /// Convert the tree to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.tree, format)
    }
}
