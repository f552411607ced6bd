//! JSON rendering for presentation trees.

use crate::error::{Error, Result};
use crate::render::node::Node;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a rendered tree to JSON.
pub fn to_json(node: &Node, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(node),
        JsonFormat::Compact => serde_json::to_string(node),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::Inline;

    #[test]
    fn test_to_json_pretty() {
        let tree = Node::section(
            "hero",
            vec![
                Node::heading(1, "Test"),
                Node::paragraph(vec![Inline::text("Hello")]),
            ],
        );

        let json = to_json(&tree, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"heading\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let tree = Node::document(vec![Node::heading(2, "Only")]);

        let json = to_json(&tree, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("\"level\":2"));
    }

    #[test]
    fn test_to_json_round_trips_tagged_nodes() {
        let tree = Node::paragraph(vec![Inline::link("docs", "#usage")]);
        let json = to_json(&tree, JsonFormat::Compact).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
