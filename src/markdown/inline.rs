//! Inline tokenization of paragraph text.
//!
//! A single left-to-right pass splits paragraph text into plain-text runs
//! and three recognized inline forms: markdown links with validated targets,
//! bold spans, and inline code spans. The earliest complete match wins;
//! anything that fails to complete stays in the surrounding text run. The
//! pass is total and covers the input exactly: concatenating every token's
//! source text reconstructs the paragraph byte for byte.

use serde::{Deserialize, Serialize};

/// One inline token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineToken {
    /// Plain text run; may embed line breaks
    Text {
        /// Run text
        text: String,
    },
    /// Bold span (`**...**`)
    Bold {
        /// Span text without the delimiters
        text: String,
    },
    /// Inline code span
    Code {
        /// Span text without the backticks
        text: String,
    },
    /// Markdown link with a validated target
    Link {
        /// Display label
        label: String,
        /// Link target: absolute http(s) URL or `#` anchor
        href: String,
        /// Whether the target is a same-page anchor
        is_anchor: bool,
    },
}

impl InlineToken {
    /// Create a text token.
    pub fn text(text: impl Into<String>) -> Self {
        InlineToken::Text { text: text.into() }
    }

    /// Create a bold token.
    pub fn bold(text: impl Into<String>) -> Self {
        InlineToken::Bold { text: text.into() }
    }

    /// Create an inline-code token.
    pub fn code(text: impl Into<String>) -> Self {
        InlineToken::Code { text: text.into() }
    }

    /// Create a link token, classifying the target as anchor or external.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        let href = href.into();
        let is_anchor = href.starts_with('#');
        InlineToken::Link {
            label: label.into(),
            href,
            is_anchor,
        }
    }

    /// The token's display text (labels for links, span text otherwise).
    pub fn plain_text(&self) -> &str {
        match self {
            InlineToken::Text { text } => text,
            InlineToken::Bold { text } => text,
            InlineToken::Code { text } => text,
            InlineToken::Link { label, .. } => label,
        }
    }

    /// The exact source span the token was scanned from.
    pub fn source_text(&self) -> String {
        match self {
            InlineToken::Text { text } => text.clone(),
            InlineToken::Bold { text } => format!("**{text}**"),
            InlineToken::Code { text } => format!("`{text}`"),
            InlineToken::Link { label, href, .. } => format!("[{label}]({href})"),
        }
    }
}

/// Tokenize paragraph text into inline tokens.
///
/// Delimiters are all ASCII, so the scan walks byte positions and only ever
/// slices at delimiter or match boundaries, which are valid char boundaries.
pub fn tokenize(text: &str) -> Vec<InlineToken> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let matched = match bytes[i] {
            b'[' => match_link(text, i),
            b'*' => match_bold(text, i),
            b'`' => match_code(text, i),
            _ => None,
        };
        match matched {
            Some((token, end)) => {
                if run_start < i {
                    tokens.push(InlineToken::text(&text[run_start..i]));
                }
                tokens.push(token);
                i = end;
                run_start = end;
            }
            None => i += 1,
        }
    }
    if run_start < bytes.len() {
        tokens.push(InlineToken::text(&text[run_start..]));
    }

    tokens
}

/// Try `[label](target)` at `start` (which holds `[`).
fn match_link(text: &str, start: usize) -> Option<(InlineToken, usize)> {
    let rest = &text[start + 1..];
    let close = rest.find(']')?;
    if close == 0 {
        return None;
    }
    let label = &rest[..close];

    let after_label = &rest[close + 1..];
    if !after_label.starts_with('(') {
        return None;
    }
    let target_rest = &after_label[1..];
    let paren = target_rest.find(')')?;
    let target = &target_rest[..paren];
    if target.contains(char::is_whitespace) || !is_valid_target(target) {
        return None;
    }

    let end = start + 1 + close + 1 + 1 + paren + 1;
    Some((InlineToken::link(label, target), end))
}

/// Try `**inner**` at `start` (which holds `*`).
fn match_bold(text: &str, start: usize) -> Option<(InlineToken, usize)> {
    if !text[start..].starts_with("**") {
        return None;
    }
    let rest = &text[start + 2..];
    let close = rest.find("**")?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];
    if inner.contains('*') || inner.contains('\n') {
        return None;
    }
    Some((InlineToken::bold(inner), start + 2 + close + 2))
}

/// Try `` `inner` `` at `start` (which holds a backtick).
fn match_code(text: &str, start: usize) -> Option<(InlineToken, usize)> {
    let rest = &text[start + 1..];
    let close = rest.find('`')?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];
    if inner.contains('\n') {
        return None;
    }
    Some((InlineToken::code(inner), start + 1 + close + 1))
}

/// A target is an absolute http(s) URL or a `#` anchor, each with at least
/// one character after the prefix.
fn is_valid_target(target: &str) -> bool {
    if let Some(rest) = target.strip_prefix("https://") {
        return !rest.is_empty();
    }
    if let Some(rest) = target.strip_prefix("http://") {
        return !rest.is_empty();
    }
    match target.strip_prefix('#') {
        Some(rest) => !rest.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_single_token() {
        let tokens = tokenize("just some text");
        assert_eq!(tokens, vec![InlineToken::text("just some text")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_mixed_paragraph() {
        let tokens = tokenize("Hello **world**, see [docs](https://ex.com/d).");
        assert_eq!(
            tokens,
            vec![
                InlineToken::text("Hello "),
                InlineToken::bold("world"),
                InlineToken::text(", see "),
                InlineToken::link("docs", "https://ex.com/d"),
                InlineToken::text("."),
            ]
        );
    }

    #[test]
    fn test_anchor_link_classification() {
        let tokens = tokenize("[jump](#pricing) and [out](https://a.io/x)");
        assert_eq!(
            tokens[0],
            InlineToken::Link {
                label: "jump".to_string(),
                href: "#pricing".to_string(),
                is_anchor: true,
            }
        );
        assert_eq!(
            tokens[2],
            InlineToken::Link {
                label: "out".to_string(),
                href: "https://a.io/x".to_string(),
                is_anchor: false,
            }
        );
    }

    #[test]
    fn test_invalid_scheme_degrades_to_text() {
        let tokens = tokenize("[x](javascript:alert(1))");
        assert_eq!(tokens, vec![InlineToken::text("[x](javascript:alert(1))")]);
    }

    #[test]
    fn test_bare_prefix_targets_degrade_to_text() {
        assert_eq!(tokenize("[x](#)"), vec![InlineToken::text("[x](#)")]);
        assert_eq!(
            tokenize("[x](https://)"),
            vec![InlineToken::text("[x](https://)")]
        );
    }

    #[test]
    fn test_whitespace_in_target_degrades_to_text() {
        let tokens = tokenize("[x](https://a b)");
        assert_eq!(tokens, vec![InlineToken::text("[x](https://a b)")]);
    }

    #[test]
    fn test_unterminated_bold_stays_text() {
        let tokens = tokenize("**never closed");
        assert_eq!(tokens, vec![InlineToken::text("**never closed")]);
    }

    #[test]
    fn test_bold_rejects_newline() {
        let tokens = tokenize("**a\nb**");
        assert_eq!(tokens, vec![InlineToken::text("**a\nb**")]);
    }

    #[test]
    fn test_bold_rejects_inner_star() {
        let tokens = tokenize("**a*b**");
        assert_eq!(tokens, vec![InlineToken::text("**a*b**")]);
    }

    #[test]
    fn test_code_span() {
        let tokens = tokenize("run `cargo doc` now");
        assert_eq!(
            tokens,
            vec![
                InlineToken::text("run "),
                InlineToken::code("cargo doc"),
                InlineToken::text(" now"),
            ]
        );
    }

    #[test]
    fn test_code_keeps_markup_verbatim() {
        // No nesting: the bold markers inside a code span stay literal.
        let tokens = tokenize("`**not bold**`");
        assert_eq!(tokens, vec![InlineToken::code("**not bold**")]);
    }

    #[test]
    fn test_text_embeds_line_breaks() {
        let tokens = tokenize("line one\nline two");
        assert_eq!(tokens, vec![InlineToken::text("line one\nline two")]);
    }

    #[test]
    fn test_multibyte_text_around_tokens() {
        let tokens = tokenize("café **crème** brûlée");
        assert_eq!(
            tokens,
            vec![
                InlineToken::text("café "),
                InlineToken::bold("crème"),
                InlineToken::text(" brûlée"),
            ]
        );
    }

    #[test]
    fn test_source_reconstruction() {
        let inputs = [
            "Hello **world**, see [docs](https://ex.com/d).\nNext line.",
            "**a*b** and `tick` plus [q](#faq) [broken](ftp://x)",
            "***bold*** edge `` and [x]( #no )",
            "plain",
        ];
        for input in inputs {
            let rebuilt: String = tokenize(input)
                .iter()
                .map(InlineToken::source_text)
                .collect();
            assert_eq!(rebuilt, input, "tokens must cover {input:?} exactly");
        }
    }

    #[test]
    fn test_plain_text_accessor() {
        assert_eq!(InlineToken::bold("b").plain_text(), "b");
        assert_eq!(InlineToken::link("label", "#x").plain_text(), "label");
    }
}
