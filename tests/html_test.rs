//! Integration tests for HTML output.

use std::io::Write;

use serde_json::{json, Value};

use modoc::render::{to_html, HtmlOptions, RenderOptions};
use modoc::{parse_document, render_document};

fn html_for(value: Value) -> String {
    let doc = parse_document(&value);
    let tree = render_document(&doc, &RenderOptions::default());
    to_html(&tree, &HtmlOptions::default())
}

#[test]
fn test_full_document_fragment() {
    let html = html_for(json!({
        "seoMeta": {"h1": "Field Guide"},
        "blocks": [
            {
                "blockType": "hero",
                "heading": "Field Guide",
                "body": "Start **here**, or jump to [pricing](#pricing)."
            },
            {
                "blockType": "section",
                "heading": "Pricing",
                "level": 2,
                "body": "See [the docs](https://ex.com/docs)."
            }
        ]
    }));

    assert!(html.starts_with("<article class=\"doc-document\">"));
    assert!(html.contains("<h1 id=\"field-guide\">Field Guide</h1>"));
    // The hero heading repeated the H1, so the hero renders without one.
    assert!(html.contains("<section class=\"doc-hero\">\n<p>Start <strong>here</strong>"));
    assert!(html.contains("<a href=\"#pricing\">pricing</a>"));
    assert!(html.contains(
        "<a href=\"https://ex.com/docs\" target=\"_blank\" rel=\"noopener noreferrer\">the docs</a>"
    ));
    assert!(html.contains("<h2 id=\"pricing\">Pricing</h2>"));
    assert!(html.ends_with("</article>\n"));
}

#[test]
fn test_heading_ids_dedup_across_blocks() {
    let html = html_for(json!({
        "blocks": [
            {"blockType": "section", "heading": "Details", "body": "a"},
            {"blockType": "section", "heading": "Details", "body": "b"}
        ]
    }));

    assert!(html.contains("<h2 id=\"details\">Details</h2>"));
    assert!(html.contains("<h2 id=\"details-1\">Details</h2>"));
}

#[test]
fn test_untrusted_text_is_escaped() {
    let html = html_for(json!({
        "blocks": [{
            "blockType": "summary",
            "heading": "<script>alert(1)</script>",
            "body": "a & b < c"
        }]
    }));

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<p>a &amp; b &lt; c</p>"));
}

#[test]
fn test_fenced_code_gets_language_class() {
    let html = html_for(json!({
        "blocks": [{
            "blockType": "section",
            "body": "```rust\nlet x = 1;\n```"
        }]
    }));

    assert!(html.contains("<pre><code class=\"language-rust\">let x = 1;</code></pre>"));
}

#[test]
fn test_single_newline_becomes_br() {
    let html = html_for(json!({
        "blocks": [{"blockType": "summary", "body": "one\ntwo"}]
    }));

    assert!(html.contains("<p>one<br>two</p>"));
}

#[test]
fn test_list_and_steps_markup() {
    let html = html_for(json!({
        "blocks": [
            {"blockType": "list", "items": ["a", "b"]},
            {"blockType": "steps", "items": ["first"]}
        ]
    }));

    assert!(html.contains("<section class=\"doc-list\">\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>"));
    assert!(html.contains("<section class=\"doc-steps\">\n<ol>\n<li>first</li>\n</ol>"));
}

#[test]
fn test_table_markup_with_ragged_row() {
    let html = html_for(json!({
        "blocks": [{
            "blockType": "comparison_table",
            "tableColumns": ["Plan", "Price"],
            "tableRows": [["Free", "$0"], ["Pro"]]
        }]
    }));

    assert!(html.contains("<section class=\"doc-comparison-table\">"));
    assert!(html.contains("<thead>\n<tr><th>Plan</th><th>Price</th></tr>\n</thead>"));
    assert!(html.contains("<tr><td>Free</td><td>$0</td></tr>"));
    assert!(html.contains("<tr><td>Pro</td></tr>"));
}

#[test]
fn test_faq_entries_markup() {
    let html = html_for(json!({
        "blocks": [{
            "blockType": "faq",
            "heading": "FAQ",
            "faqItems": [{"question": "Why?", "answer": "Because."}]
        }]
    }));

    assert!(html.contains("<h2 id=\"faq\">FAQ</h2>"));
    assert!(html.contains("<section class=\"doc-faq-entry\">\n<h3>Why?</h3>\n<p>Because.</p>"));
}

#[test]
fn test_byline_and_image_markup() {
    let html = html_for(json!({
        "author": {
            "name": "Ana Ruiz",
            "title": "Engineer",
            "avatarUrl": "https://cdn.example/ana.png"
        },
        "featuredImage": {
            "url": "https://cdn.example/hero.jpg",
            "alt": "Skyline",
            "caption": "The skyline at dusk",
            "width": 1600.0,
            "height": 900.0
        },
        "blocks": []
    }));

    assert!(html.contains("<div class=\"doc-byline\">"));
    assert!(html.contains("src=\"https://cdn.example/ana.png\""));
    assert!(html.contains("<span class=\"doc-author-name\">Ana Ruiz</span>"));
    assert!(html.contains("<figure class=\"doc-figure\">"));
    assert!(html.contains("width=\"1600\" height=\"900\""));
    assert!(html.contains("style=\"aspect-ratio:1.7778\""));
    assert!(html.contains("<figcaption>The skyline at dusk</figcaption>"));
}

#[test]
fn test_standalone_page() {
    let doc = parse_document(&json!({
        "seoMeta": {"h1": "My Guide"},
        "blocks": []
    }));
    let tree = render_document(&doc, &RenderOptions::default());
    let options = HtmlOptions::new().with_standalone(true);
    let html = to_html(&tree, &options);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>My Guide</title>"));
    assert!(html.contains("<article class=\"doc-document\">"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_custom_class_prefix() {
    let doc = parse_document(&json!({
        "blocks": [{"blockType": "summary", "body": "x"}]
    }));
    let tree = render_document(&doc, &RenderOptions::default());
    let options = HtmlOptions::new().with_class_prefix("md-");
    let html = to_html(&tree, &options);

    assert!(html.contains("<article class=\"md-document\">"));
    assert!(html.contains("<section class=\"md-summary\">"));
}

#[test]
fn test_to_html_file_api() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"seoMeta":{{"h1":"From Disk"}},"blocks":[{{"blockType":"summary","body":"ok"}}]}}"#
    )
    .unwrap();

    let html = modoc::to_html(file.path()).unwrap();
    assert!(html.contains("<h1 id=\"from-disk\">From Disk</h1>"));
    assert!(html.contains("<p>ok</p>"));

    assert!(modoc::to_html("/no/such/file.json").is_err());
}
