//! Document assembly: metadata nodes first, then every block in order.

use crate::model::{Author, FeaturedImage, ModularDocument};
use crate::render::block::{render_block, RenderContext};
use crate::render::node::{LinkNode, Node};
use crate::render::options::RenderOptions;
use crate::render::result::{RenderResult, RenderStats};

/// Render a document to its presentation tree.
///
/// Assembly order is fixed: H1 (when the SEO metadata carries one), author
/// byline (when the author has a name), featured image (when it has a URL),
/// then each block through [`render_block`] in document order. Blocks that
/// render empty are skipped without leaving a placeholder.
pub fn render_document(doc: &ModularDocument, options: &RenderOptions) -> Node {
    let mut children = Vec::new();
    let mut ctx = RenderContext::new();

    if let Some(h1) = doc.h1() {
        children.push(Node::heading(1, h1));
        ctx.document_h1 = Some(h1.to_string());
    }
    if let Some(author) = &doc.author {
        if let Some(name) = author.display_name() {
            children.push(byline_node(author, name));
        }
    }
    if let Some(image) = &doc.featured_image {
        if let Some(url) = image.source_url() {
            children.push(image_node(image, url, options));
        }
    }
    for block in &doc.blocks {
        if let Some(node) = render_block(block, &ctx, options) {
            children.push(node);
        }
    }

    Node::document(children)
}

/// Render a document and compute statistics over the finished tree.
///
/// Stats are derived by walking the result, never collected during
/// rendering, so the render path stays a pure function of its inputs.
pub fn render_document_with_stats(doc: &ModularDocument, options: &RenderOptions) -> RenderResult {
    let tree = render_document(doc, options);
    let stats = RenderStats::from_node(&tree);
    RenderResult::new(tree, stats)
}

fn byline_node(author: &Author, name: &str) -> Node {
    let links: Vec<LinkNode> = author
        .social_links
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .map(LinkNode::from)
        .collect();
    Node::Byline {
        name: name.to_string(),
        title: non_blank(&author.title),
        location: non_blank(&author.location),
        bio: non_blank(&author.bio),
        avatar_url: non_blank(&author.avatar_url),
        links,
    }
}

fn image_node(image: &FeaturedImage, url: &str, options: &RenderOptions) -> Node {
    Node::Image {
        url: url.to_string(),
        alt: image.alt.clone().unwrap_or_default(),
        caption: non_blank(&image.caption),
        width: image.width,
        height: image.height,
        aspect_ratio: image
            .aspect_ratio()
            .unwrap_or(options.fallback_aspect_ratio),
    }
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, DocumentBlock, SeoMeta, SocialLink};

    fn doc_with_h1(h1: &str) -> ModularDocument {
        let mut doc = ModularDocument::new();
        doc.seo_meta = Some(SeoMeta {
            h1: Some(h1.to_string()),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_empty_document_renders_empty_root() {
        let tree = render_document(&ModularDocument::new(), &RenderOptions::default());
        assert_eq!(tree, Node::document(vec![]));
    }

    #[test]
    fn test_h1_first() {
        let mut doc = doc_with_h1("The Title");
        doc.add_block(DocumentBlock::new(BlockKind::Cta));
        let tree = render_document(&doc, &RenderOptions::default());
        assert_eq!(tree.children()[0], Node::heading(1, "The Title"));
        assert_eq!(tree.children().len(), 2);
    }

    #[test]
    fn test_byline_requires_name() {
        let mut doc = ModularDocument::new();
        doc.author = Some(Author {
            title: Some("Editor".to_string()),
            ..Default::default()
        });
        let tree = render_document(&doc, &RenderOptions::default());
        assert!(tree.children().is_empty());

        doc.author.as_mut().unwrap().name = Some("Sam Lee".to_string());
        let tree = render_document(&doc, &RenderOptions::default());
        assert!(matches!(
            &tree.children()[0],
            Node::Byline { name, title: Some(title), .. }
                if name == "Sam Lee" && title == "Editor"
        ));
    }

    #[test]
    fn test_byline_filters_social_links() {
        let mut doc = ModularDocument::new();
        doc.author = Some(Author {
            name: Some("Sam Lee".to_string()),
            social_links: vec![
                SocialLink {
                    platform: Some("RSS".to_string()),
                    url: "https://ex.com/feed".to_string(),
                },
                SocialLink {
                    platform: Some("Ghost".to_string()),
                    url: "  ".to_string(),
                },
            ],
            ..Default::default()
        });
        let tree = render_document(&doc, &RenderOptions::default());
        match &tree.children()[0] {
            Node::Byline { links, .. } => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].label, "RSS");
            }
            other => panic!("expected byline, got {other:?}"),
        }
    }

    #[test]
    fn test_image_requires_url_and_resolves_ratio() {
        let mut doc = ModularDocument::new();
        doc.featured_image = Some(FeaturedImage {
            alt: Some("decorative".to_string()),
            width: Some(800.0),
            height: Some(600.0),
            ..Default::default()
        });
        let tree = render_document(&doc, &RenderOptions::default());
        assert!(tree.children().is_empty());

        doc.featured_image.as_mut().unwrap().url = Some("https://cdn.x/i.jpg".to_string());
        let tree = render_document(&doc, &RenderOptions::default());
        match &tree.children()[0] {
            Node::Image {
                url, aspect_ratio, ..
            } => {
                assert_eq!(url, "https://cdn.x/i.jpg");
                assert!((aspect_ratio - 800.0 / 600.0).abs() < 1e-9);
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_image_fallback_ratio() {
        let mut doc = ModularDocument::new();
        doc.featured_image = Some(FeaturedImage {
            url: Some("https://cdn.x/i.jpg".to_string()),
            width: Some(1200.0),
            ..Default::default()
        });
        let options = RenderOptions::new().with_fallback_aspect_ratio(4.0 / 3.0);
        let tree = render_document(&doc, &options);
        assert!(matches!(
            &tree.children()[0],
            Node::Image { aspect_ratio, .. } if (aspect_ratio - 4.0 / 3.0).abs() < 1e-9
        ));
    }

    #[test]
    fn test_blocks_follow_metadata_in_order() {
        let mut doc = doc_with_h1("Title");
        let mut hero = DocumentBlock::new(BlockKind::Hero);
        hero.heading = Some("Hero heading".to_string());
        doc.add_block(hero);
        doc.add_block(DocumentBlock::new(BlockKind::Hero)); // empty, skipped
        let mut sources = DocumentBlock::new(BlockKind::Sources);
        sources.heading = Some("Reading".to_string());
        doc.add_block(sources);

        let tree = render_document(&doc, &RenderOptions::default());
        let kinds: Vec<String> = tree
            .children()
            .iter()
            .map(|n| match n {
                Node::Heading { .. } => "h1".to_string(),
                Node::Section { kind, .. } => kind.clone(),
                other => panic!("unexpected node {other:?}"),
            })
            .collect();
        assert_eq!(kinds, vec!["h1", "hero", "sources"]);
    }

    #[test]
    fn test_with_stats_counts_tree() {
        let mut doc = doc_with_h1("Title");
        let mut section = DocumentBlock::new(BlockKind::Section);
        section.heading = Some("About".to_string());
        section.body = Some("One.\n\nTwo.".to_string());
        doc.add_block(section);

        let result = render_document_with_stats(&doc, &RenderOptions::default());
        assert_eq!(result.stats.heading_count, 2);
        assert_eq!(result.stats.paragraph_count, 2);
        assert_eq!(result.stats.section_count, 1);
    }
}
