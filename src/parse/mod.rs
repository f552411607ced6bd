//! Defensive coercion of untrusted JSON into the document model.
//!
//! [`parse_document`] is total: any [`serde_json::Value`], of any shape,
//! coerces to a [`ModularDocument`] without error. Missing and wrong-typed
//! fields become their empty values (absent option, empty string, empty
//! sequence) and unknown block tags are preserved for the fallback
//! renderer. There is no error channel here on purpose: upstream payloads
//! are machine-generated and occasionally malformed, and rendering must
//! degrade instead of fail.
//!
//! The serde derives on the model are the strict counterpart for payloads
//! already known to be well-shaped; this module is the boundary for
//! everything else.

mod value;

use crate::model::{
    Author, BlockKind, BlockLink, ConversionPlan, CtaAction, DocumentBlock, FaqItem,
    FeaturedImage, ModularDocument, SeoMeta, SocialLink,
};
use serde_json::Value;

/// Coerce any JSON value into a document. Never fails.
pub fn parse_document(value: &Value) -> ModularDocument {
    ModularDocument {
        seo_meta: value::object_field(value, "seoMeta").map(parse_seo_meta),
        conversion_plan: value::object_field(value, "conversionPlan").map(parse_conversion_plan),
        author: value::object_field(value, "author").map(parse_author),
        featured_image: value::object_field(value, "featuredImage").map(parse_featured_image),
        blocks: value::array_field(value, "blocks")
            .iter()
            .map(parse_block)
            .collect(),
    }
}

/// Coerce one JSON value into a content block. Never fails; a value of the
/// wrong shape yields an empty unknown block, which renders to nothing.
pub fn parse_block(value: &Value) -> DocumentBlock {
    let kind = match value::string_field(value, "blockType") {
        Some(tag) => BlockKind::from_tag(&tag),
        None => BlockKind::default(),
    };
    if !kind.is_known() {
        log::debug!("unrecognized block type tag: {:?}", kind.tag());
    }

    DocumentBlock {
        kind,
        heading: value::string_field(value, "heading"),
        body: value::string_field(value, "body"),
        links: value::array_field(value, "links")
            .iter()
            .filter_map(parse_link)
            .collect(),
        level: value::i64_field(value, "level"),
        items: value::string_list(value, "items"),
        ordered: value::bool_field(value, "ordered").unwrap_or(false),
        table_columns: value::array_field(value, "tableColumns")
            .iter()
            .map(value::string_or_empty)
            .collect(),
        table_rows: value::array_field(value, "tableRows")
            .iter()
            .map(parse_table_row)
            .collect(),
        faq_items: value::array_field(value, "faqItems")
            .iter()
            .filter_map(parse_faq_item)
            .collect(),
        cta: value::object_field(value, "cta").map(parse_cta),
    }
}

fn parse_seo_meta(value: &Value) -> SeoMeta {
    SeoMeta {
        h1: value::string_field(value, "h1"),
        meta_title: value::string_field(value, "metaTitle"),
        meta_description: value::string_field(value, "metaDescription"),
        slug: value::string_field(value, "slug"),
        primary_keyword: value::string_field(value, "primaryKeyword"),
    }
}

fn parse_conversion_plan(value: &Value) -> ConversionPlan {
    ConversionPlan {
        primary_intent: value::string_field(value, "primaryIntent"),
        cta_strategy: value::string_list(value, "ctaStrategy"),
    }
}

fn parse_author(value: &Value) -> Author {
    Author {
        name: value::string_field(value, "name"),
        title: value::string_field(value, "title"),
        location: value::string_field(value, "location"),
        bio: value::string_field(value, "bio"),
        avatar_url: value::string_field(value, "avatarUrl"),
        social_links: value::array_field(value, "socialLinks")
            .iter()
            .filter_map(parse_social_link)
            .collect(),
    }
}

fn parse_social_link(value: &Value) -> Option<SocialLink> {
    if !value.is_object() {
        return None;
    }
    Some(SocialLink {
        platform: value::string_field(value, "platform"),
        url: value::string_field(value, "url").unwrap_or_default(),
    })
}

fn parse_featured_image(value: &Value) -> FeaturedImage {
    FeaturedImage {
        // "url" is canonical; "signedUrl" is an upstream alias seen in
        // older payloads.
        url: value::string_field(value, "url")
            .or_else(|| value::string_field(value, "signedUrl")),
        alt: value::string_field(value, "alt"),
        caption: value::string_field(value, "caption"),
        width: value::f64_field(value, "width"),
        height: value::f64_field(value, "height"),
    }
}

fn parse_link(value: &Value) -> Option<BlockLink> {
    if !value.is_object() {
        return None;
    }
    Some(BlockLink {
        href: value::string_field(value, "href").unwrap_or_default(),
        anchor: value::string_field(value, "anchor"),
        label: value::string_field(value, "label"),
    })
}

fn parse_table_row(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|cells| cells.iter().map(value::string_or_empty).collect())
        .unwrap_or_default()
}

fn parse_faq_item(value: &Value) -> Option<FaqItem> {
    if !value.is_object() {
        return None;
    }
    Some(FaqItem {
        question: value::string_field(value, "question").unwrap_or_default(),
        answer: value::string_field(value, "answer").unwrap_or_default(),
    })
}

fn parse_cta(value: &Value) -> CtaAction {
    CtaAction {
        label: value::string_field(value, "label"),
        href: value::string_field(value, "href"),
    }
}
