//! Content block types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Discriminator for the content block types the renderer knows about.
///
/// Unrecognized tags are preserved verbatim in [`BlockKind::Unknown`] so the
/// fallback renderer can still surface whatever heading/body the block
/// carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Opening hero section
    Hero,
    /// Short summary / key takeaways
    Summary,
    /// Generic body section with a depth hint
    Section,
    /// Ordered or bulleted list
    List,
    /// Step-by-step instructions, always numbered
    Steps,
    /// Column/row comparison table
    ComparisonTable,
    /// Question/answer entries
    Faq,
    /// Call-to-action
    Cta,
    /// Closing section
    Conclusion,
    /// Reference link list
    Sources,
    /// Unrecognized tag, preserved verbatim
    Unknown(String),
}

impl BlockKind {
    /// Map a wire-format tag to its kind. Unknown tags are preserved.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hero" => BlockKind::Hero,
            "summary" => BlockKind::Summary,
            "section" => BlockKind::Section,
            "list" => BlockKind::List,
            "steps" => BlockKind::Steps,
            "comparison_table" => BlockKind::ComparisonTable,
            "faq" => BlockKind::Faq,
            "cta" => BlockKind::Cta,
            "conclusion" => BlockKind::Conclusion,
            "sources" => BlockKind::Sources,
            _ => BlockKind::Unknown(tag.to_string()),
        }
    }

    /// The wire-format tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Summary => "summary",
            BlockKind::Section => "section",
            BlockKind::List => "list",
            BlockKind::Steps => "steps",
            BlockKind::ComparisonTable => "comparison_table",
            BlockKind::Faq => "faq",
            BlockKind::Cta => "cta",
            BlockKind::Conclusion => "conclusion",
            BlockKind::Sources => "sources",
            BlockKind::Unknown(tag) => tag,
        }
    }

    /// Check whether this is one of the recognized block types.
    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Unknown(_))
    }
}

impl Default for BlockKind {
    fn default() -> Self {
        BlockKind::Unknown(String::new())
    }
}

impl Serialize for BlockKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for BlockKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(BlockKind::from_tag(&tag))
    }
}

/// A link attached to a block.
///
/// Only `href` is required for the link to render; `anchor` and `label` are
/// display-text candidates in that priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockLink {
    /// Link target. An empty href makes the link unrenderable.
    #[serde(default)]
    pub href: String,

    /// Preferred display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// Fallback display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BlockLink {
    /// Create a link with only a target.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            anchor: None,
            label: None,
        }
    }

    /// Display text: anchor, then label, then the href itself.
    pub fn display_text(&self) -> &str {
        self.anchor
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or(&self.href)
    }

    /// Whether the target is a same-page anchor (`#...`).
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }

    /// Whether the link has a target at all.
    pub fn is_renderable(&self) -> bool {
        !self.href.is_empty()
    }
}

/// One question/answer pair in an FAQ block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question line
    #[serde(default)]
    pub question: String,

    /// Answer text, segmented like any block body
    #[serde(default)]
    pub answer: String,
}

impl FaqItem {
    /// Create a question/answer pair.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Entries without a non-blank question are dropped by the renderer.
    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }
}

/// Call-to-action fields on a CTA block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaAction {
    /// Button label. Falls back to the configured default when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Button target. Falls back to `#` when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A single content block.
///
/// All per-type fields live on one struct because the wire format carries
/// them that way: a block is a flat JSON object whose `blockType` decides
/// which fields the renderer reads. Fields irrelevant to the block's kind
/// are ignored, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBlock {
    /// Block type tag
    #[serde(rename = "blockType", default)]
    pub kind: BlockKind,

    /// Optional heading line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Free-text body in the pipeline's markdown subset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Related links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<BlockLink>,

    /// Heading depth hint for section blocks, clamped to 2..=4 at render time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,

    /// List items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,

    /// Ordered list flag; absent means bulleted
    #[serde(default)]
    pub ordered: bool,

    /// Table header labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table_columns: Vec<String>,

    /// Table rows; rows may be ragged relative to the header
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table_rows: Vec<Vec<String>>,

    /// FAQ entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq_items: Vec<FaqItem>,

    /// Call-to-action fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaAction>,
}

impl DocumentBlock {
    /// Create an empty block of the given kind.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Heading if present and not blank.
    pub fn heading_text(&self) -> Option<&str> {
        self.heading
            .as_deref()
            .filter(|h| !h.trim().is_empty())
    }

    /// Body if present and not blank.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.trim().is_empty())
    }

    /// Whether the block carries a heading or a body.
    pub fn has_content(&self) -> bool {
        self.heading_text().is_some() || self.body_text().is_some()
    }

    /// Links that actually have a target.
    pub fn renderable_links(&self) -> impl Iterator<Item = &BlockLink> {
        self.links.iter().filter(|link| link.is_renderable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_round_trip() {
        for tag in [
            "hero",
            "summary",
            "section",
            "list",
            "steps",
            "comparison_table",
            "faq",
            "cta",
            "conclusion",
            "sources",
        ] {
            let kind = BlockKind::from_tag(tag);
            assert!(kind.is_known(), "{tag} should be a known kind");
            assert_eq!(kind.tag(), tag);
        }
    }

    #[test]
    fn test_unknown_kind_preserves_tag() {
        let kind = BlockKind::from_tag("pull_quote");
        assert!(!kind.is_known());
        assert_eq!(kind.tag(), "pull_quote");
    }

    #[test]
    fn test_link_display_priority() {
        let mut link = BlockLink::new("https://example.com");
        assert_eq!(link.display_text(), "https://example.com");
        link.label = Some("Example".to_string());
        assert_eq!(link.display_text(), "Example");
        link.anchor = Some("example site".to_string());
        assert_eq!(link.display_text(), "example site");
    }

    #[test]
    fn test_link_anchor_detection() {
        assert!(BlockLink::new("#pricing").is_anchor());
        assert!(!BlockLink::new("https://example.com").is_anchor());
        assert!(!BlockLink::new("").is_renderable());
    }

    #[test]
    fn test_block_serde_wire_names() {
        let json = r#"{
            "blockType": "comparison_table",
            "tableColumns": ["Plan", "Price"],
            "tableRows": [["Free", "$0"]]
        }"#;
        let block: DocumentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind, BlockKind::ComparisonTable);
        assert_eq!(block.table_columns, vec!["Plan", "Price"]);

        let out = serde_json::to_string(&block).unwrap();
        assert!(out.contains("\"blockType\":\"comparison_table\""));
        assert!(out.contains("\"tableColumns\""));
    }

    #[test]
    fn test_blank_heading_is_absent() {
        let mut block = DocumentBlock::new(BlockKind::Hero);
        block.heading = Some("   ".to_string());
        assert!(block.heading_text().is_none());
        assert!(!block.has_content());
    }
}
