//! Document-level types.

use super::DocumentBlock;
use serde::{Deserialize, Serialize};

/// A coerced modular content document.
///
/// Every field is optional or defaults to empty: the defensive parser in
/// [`crate::parse`] produces one of these from *any* JSON value without
/// failing, and the renderer treats absence as "omit that UI element".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModularDocument {
    /// SEO metadata (H1, meta title/description, slug, primary keyword)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_meta: Option<SeoMeta>,

    /// Pipeline conversion metadata. Inspectable, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_plan: Option<ConversionPlan>,

    /// Author display metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    /// Featured image metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,

    /// Content blocks in document order
    #[serde(default)]
    pub blocks: Vec<DocumentBlock>,
}

impl ModularDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of content blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any content blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The document H1 when present and not blank.
    pub fn h1(&self) -> Option<&str> {
        self.seo_meta
            .as_ref()
            .and_then(|seo| seo.h1.as_deref())
            .filter(|h1| !h1.trim().is_empty())
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: DocumentBlock) {
        self.blocks.push(block);
    }
}

/// SEO metadata attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    /// Page H1, rendered as the document heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,

    /// Meta title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// Meta description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Primary keyword the document targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
}

/// Pipeline conversion metadata. Carried through the model for inspection
/// tooling; the renderer never emits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPlan {
    /// Primary reader intent the document was generated for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_intent: Option<String>,

    /// Planned call-to-action strategy notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cta_strategy: Vec<String>,
}

/// Author display metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Display name. A byline renders only when this is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Job title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Location line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Short biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Profile image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Social profile links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

impl Author {
    /// Display name when present and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// One social profile link on an author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Platform name used as the display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Profile URL
    #[serde(default)]
    pub url: String,
}

/// Featured image metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImage {
    /// Signed image URL. The image renders only when this is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Alt text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Caption line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Pixel width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Pixel height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl FeaturedImage {
    /// Image URL when present and not blank.
    pub fn source_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Width/height ratio when both dimensions are positive and finite.
    /// Junk dimensions (zero, negative, NaN) yield `None` so callers can
    /// fall back to a layout default.
    pub fn aspect_ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 => {
                Some(w / h)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    #[test]
    fn test_document_new() {
        let doc = ModularDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
        assert!(doc.h1().is_none());
    }

    #[test]
    fn test_h1_requires_non_blank() {
        let mut doc = ModularDocument::new();
        doc.seo_meta = Some(SeoMeta {
            h1: Some("  ".to_string()),
            ..Default::default()
        });
        assert!(doc.h1().is_none());

        doc.seo_meta.as_mut().unwrap().h1 = Some("Guide to Widgets".to_string());
        assert_eq!(doc.h1(), Some("Guide to Widgets"));
    }

    #[test]
    fn test_add_block() {
        let mut doc = ModularDocument::new();
        doc.add_block(DocumentBlock::new(BlockKind::Hero));
        doc.add_block(DocumentBlock::new(BlockKind::Section));
        assert_eq!(doc.block_count(), 2);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_aspect_ratio_guards() {
        let mut image = FeaturedImage {
            url: Some("https://cdn.example.com/a.jpg".to_string()),
            width: Some(1600.0),
            height: Some(900.0),
            ..Default::default()
        };
        let ratio = image.aspect_ratio().unwrap();
        assert!((ratio - 16.0 / 9.0).abs() < 1e-9);

        image.height = Some(0.0);
        assert!(image.aspect_ratio().is_none());
        image.height = None;
        assert!(image.aspect_ratio().is_none());
    }

    #[test]
    fn test_document_serde_wire_names() {
        let json = r#"{
            "seoMeta": { "h1": "Title", "metaTitle": "Title | Site" },
            "conversionPlan": { "primaryIntent": "comparison", "ctaStrategy": ["trial"] },
            "blocks": []
        }"#;
        let doc: ModularDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.h1(), Some("Title"));
        let plan = doc.conversion_plan.as_ref().unwrap();
        assert_eq!(plan.primary_intent.as_deref(), Some("comparison"));
        assert_eq!(plan.cta_strategy, vec!["trial"]);
    }
}
