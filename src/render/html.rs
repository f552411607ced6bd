//! HTML rendering for modular documents.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::render::node::{Inline, LinkNode, Node};

/// Options controlling HTML output.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Give headings slugified `id` attributes
    pub heading_anchors: bool,

    /// Wrap the fragment in a minimal standalone page
    pub standalone: bool,

    /// Class prefix for structural elements
    pub class_prefix: String,

    /// Class prefix applied to code block languages
    pub language_class_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            heading_anchors: true,
            standalone: false,
            class_prefix: "doc-".to_string(),
            language_class_prefix: "language-".to_string(),
        }
    }
}

impl HtmlOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether headings get slugified `id` attributes.
    pub fn with_heading_anchors(mut self, enabled: bool) -> Self {
        self.heading_anchors = enabled;
        self
    }

    /// Set whether output is wrapped in a standalone HTML page.
    pub fn with_standalone(mut self, enabled: bool) -> Self {
        self.standalone = enabled;
        self
    }

    /// Set the class prefix for structural elements.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the class prefix for code block languages.
    pub fn with_language_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.language_class_prefix = prefix.into();
        self
    }
}

/// Convert a rendered tree to HTML.
pub fn to_html(node: &Node, options: &HtmlOptions) -> String {
    let mut renderer = HtmlRenderer::new(options.clone());
    renderer.render(node)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: HtmlOptions,
    slug_counts: HashMap<String, u32>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            slug_counts: HashMap::new(),
        }
    }

    /// Render a tree to an HTML string.
    ///
    /// Heading ids are unique within one call; each call starts a fresh
    /// id registry.
    pub fn render(&mut self, node: &Node) -> String {
        self.slug_counts.clear();
        let mut body = String::new();
        self.render_node(&mut body, node);

        if self.options.standalone {
            self.wrap_standalone(node, &body)
        } else {
            body
        }
    }

    fn render_node(&mut self, output: &mut String, node: &Node) {
        match node {
            Node::Document { children } => {
                output.push_str(&format!(
                    "<article class=\"{}document\">\n",
                    self.options.class_prefix
                ));
                for child in children {
                    self.render_node(output, child);
                }
                output.push_str("</article>\n");
            }
            Node::Section { kind, children } => {
                output.push_str(&format!(
                    "<section class=\"{}{}\">\n",
                    self.options.class_prefix,
                    escape_html(&kind.replace('_', "-"))
                ));
                for child in children {
                    self.render_node(output, child);
                }
                output.push_str("</section>\n");
            }
            Node::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                if self.options.heading_anchors {
                    let id = self.heading_id(text);
                    output.push_str(&format!(
                        "<h{} id=\"{}\">{}</h{}>\n",
                        level,
                        id,
                        escape_html(text),
                        level
                    ));
                } else {
                    output.push_str(&format!("<h{}>{}</h{}>\n", level, escape_html(text), level));
                }
            }
            Node::Paragraph { content } => {
                output.push_str("<p>");
                self.render_inline_content(output, content);
                output.push_str("</p>\n");
            }
            Node::CodeBlock { language, code } => {
                if language.is_empty() {
                    output.push_str("<pre><code>");
                } else {
                    output.push_str(&format!(
                        "<pre><code class=\"{}{}\">",
                        self.options.language_class_prefix,
                        escape_html(language)
                    ));
                }
                output.push_str(&escape_html(code));
                output.push_str("</code></pre>\n");
            }
            Node::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                output.push_str(&format!("<{}>\n", tag));
                for item in items {
                    output.push_str("<li>");
                    self.render_inline_content(output, &item.content);
                    output.push_str("</li>\n");
                }
                output.push_str(&format!("</{}>\n", tag));
            }
            Node::Table { columns, rows } => {
                output.push_str("<table>\n<thead>\n<tr>");
                for column in columns {
                    output.push_str(&format!("<th>{}</th>", escape_html(column)));
                }
                output.push_str("</tr>\n</thead>\n<tbody>\n");
                for row in rows {
                    output.push_str("<tr>");
                    for cell in &row.cells {
                        output.push_str("<td>");
                        self.render_inline_content(output, &cell.content);
                        output.push_str("</td>");
                    }
                    output.push_str("</tr>\n");
                }
                output.push_str("</tbody>\n</table>\n");
            }
            Node::FaqEntry { question, answer } => {
                output.push_str(&format!(
                    "<section class=\"{}faq-entry\">\n<h3>{}</h3>\n",
                    self.options.class_prefix,
                    escape_html(question)
                ));
                for child in answer {
                    self.render_node(output, child);
                }
                output.push_str("</section>\n");
            }
            Node::LinkList { links } => {
                output.push_str(&format!(
                    "<ul class=\"{}links\">\n",
                    self.options.class_prefix
                ));
                for link in links {
                    output.push_str("<li>");
                    self.render_link(output, link);
                    output.push_str("</li>\n");
                }
                output.push_str("</ul>\n");
            }
            Node::ActionLink {
                label,
                href,
                is_anchor,
            } => {
                output.push_str(&format!("<p class=\"{}cta\">", self.options.class_prefix));
                self.render_anchor(output, label, href, *is_anchor);
                output.push_str("</p>\n");
            }
            Node::Byline {
                name,
                title,
                location,
                bio,
                avatar_url,
                links,
            } => {
                let prefix = &self.options.class_prefix;
                output.push_str(&format!("<div class=\"{}byline\">\n", prefix));

                if let Some(avatar) = avatar_url {
                    output.push_str(&format!(
                        "<img class=\"{}avatar\" src=\"{}\" alt=\"\">\n",
                        prefix,
                        escape_html(avatar)
                    ));
                } else {
                    output.push_str(&format!(
                        "<span class=\"{}avatar {}avatar-placeholder\"></span>\n",
                        prefix, prefix
                    ));
                }

                output.push_str(&format!(
                    "<span class=\"{}author-name\">{}</span>\n",
                    prefix,
                    escape_html(name)
                ));

                let detail: Vec<&str> = [title.as_deref(), location.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect();
                if !detail.is_empty() {
                    output.push_str(&format!(
                        "<span class=\"{}author-detail\">{}</span>\n",
                        prefix,
                        escape_html(&detail.join(" · "))
                    ));
                }

                if let Some(bio) = bio {
                    output.push_str(&format!(
                        "<p class=\"{}author-bio\">{}</p>\n",
                        prefix,
                        escape_html(bio)
                    ));
                }

                if !links.is_empty() {
                    output.push_str(&format!("<ul class=\"{}author-links\">\n", prefix));
                    for link in links {
                        output.push_str("<li>");
                        self.render_link(output, link);
                        output.push_str("</li>\n");
                    }
                    output.push_str("</ul>\n");
                }

                output.push_str("</div>\n");
            }
            Node::Image {
                url,
                alt,
                caption,
                width,
                height,
                aspect_ratio,
            } => {
                output.push_str(&format!(
                    "<figure class=\"{}figure\">\n",
                    self.options.class_prefix
                ));

                let mut attrs =
                    format!("src=\"{}\" alt=\"{}\"", escape_html(url), escape_html(alt));
                if let Some(width) = width {
                    attrs.push_str(&format!(" width=\"{}\"", format_dimension(*width)));
                }
                if let Some(height) = height {
                    attrs.push_str(&format!(" height=\"{}\"", format_dimension(*height)));
                }
                output.push_str(&format!(
                    "<img {} style=\"aspect-ratio:{:.4}\">\n",
                    attrs, aspect_ratio
                ));

                if let Some(caption) = caption {
                    output.push_str(&format!(
                        "<figcaption>{}</figcaption>\n",
                        escape_html(caption)
                    ));
                }

                output.push_str("</figure>\n");
            }
        }
    }

    fn render_inline_content(&self, output: &mut String, content: &[Inline]) {
        for item in content {
            match item {
                Inline::Text { text } => output.push_str(&escape_html(text)),
                Inline::LineBreak => output.push_str("<br>"),
                Inline::Bold { text } => {
                    output.push_str(&format!("<strong>{}</strong>", escape_html(text)));
                }
                Inline::Code { text } => {
                    output.push_str(&format!("<code>{}</code>", escape_html(text)));
                }
                Inline::Link {
                    label,
                    href,
                    is_anchor,
                } => {
                    self.render_anchor(output, label, href, *is_anchor);
                }
            }
        }
    }

    fn render_link(&self, output: &mut String, link: &LinkNode) {
        self.render_anchor(output, &link.label, &link.href, link.is_anchor);
    }

    fn render_anchor(&self, output: &mut String, label: &str, href: &str, is_anchor: bool) {
        if is_anchor {
            output.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(href),
                escape_html(label)
            ));
        } else {
            output.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(href),
                escape_html(label)
            ));
        }
    }

    fn heading_id(&mut self, text: &str) -> String {
        let slug = slugify(text);
        let base = if slug.is_empty() {
            "heading".to_string()
        } else {
            slug
        };

        let count = self.slug_counts.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        id
    }

    fn wrap_standalone(&self, node: &Node, body: &str) -> String {
        let title = first_heading(node).unwrap_or("Document");
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(title),
            body
        )
    }
}

fn first_heading(node: &Node) -> Option<&str> {
    if let Node::Heading { text, .. } = node {
        return Some(text);
    }
    node.children().iter().find_map(first_heading)
}

/// Escape text for HTML element and attribute contexts.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Build a heading slug: NFKD-normalized, lowercased ASCII alphanumerics,
/// with runs of anything else collapsed to single hyphens.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_ascii() {
            pending_hyphen = true;
        }
        // Non-ASCII after decomposition (combining marks, CJK) is dropped.
    }

    slug
}

fn format_dimension(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
