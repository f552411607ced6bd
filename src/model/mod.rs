//! Document model types for modular content representation.
//!
//! This module defines the typed representation that bridges defensive JSON
//! coercion and structural rendering. The model mirrors the pipeline's wire
//! format (camelCase JSON) and performs no validation of its own: absent and
//! malformed fields arrive here already coerced to empty values.

mod block;
mod document;

pub use block::{BlockKind, BlockLink, CtaAction, DocumentBlock, FaqItem};
pub use document::{
    Author, ConversionPlan, FeaturedImage, ModularDocument, SeoMeta, SocialLink,
};
