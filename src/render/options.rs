//! Rendering options.

/// Options controlling structural rendering.
///
/// These are the documented fallback values the dispatcher substitutes for
/// missing content; they never suppress content that is present.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Label substituted for a CTA without one
    pub cta_label: String,

    /// Target substituted for a CTA without one
    pub cta_href: String,

    /// Heading substituted for a sources block without one
    pub sources_heading: String,

    /// Aspect ratio used when image dimensions are missing or unusable
    pub fallback_aspect_ratio: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cta_label: "Learn more".to_string(),
            cta_href: "#".to_string(),
            sources_heading: "Sources".to_string(),
            fallback_aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl RenderOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback CTA label.
    pub fn with_cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = label.into();
        self
    }

    /// Set the fallback CTA target.
    pub fn with_cta_href(mut self, href: impl Into<String>) -> Self {
        self.cta_href = href.into();
        self
    }

    /// Set the default sources heading.
    pub fn with_sources_heading(mut self, heading: impl Into<String>) -> Self {
        self.sources_heading = heading.into();
        self
    }

    /// Set the fallback aspect ratio.
    pub fn with_fallback_aspect_ratio(mut self, ratio: f64) -> Self {
        self.fallback_aspect_ratio = ratio;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.cta_label, "Learn more");
        assert_eq!(options.cta_href, "#");
        assert_eq!(options.sources_heading, "Sources");
        assert!((options.fallback_aspect_ratio - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_cta_label("Start free")
            .with_sources_heading("References");
        assert_eq!(options.cta_label, "Start free");
        assert_eq!(options.sources_heading, "References");
        assert_eq!(options.cta_href, "#");
    }
}
