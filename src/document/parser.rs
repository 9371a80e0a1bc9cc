//! Field extraction with comrak.
//!
//! Three independent extraction rules, kept separate on purpose because
//! they answer different questions:
//!
//! 1. `title` and `punchline` are display-text reads of the rendered tree,
//!    so inline formatting survives as readable text.
//! 2. `description` is a structural read of the block sequence: the second
//!    top-level paragraph, sliced from the source so its markdown is
//!    preserved for re-rendering.
//! 3. `content` is a plain string search for the first literal `##` in the
//!    raw text. The split point is purely textual; it does not validate
//!    that the content starts with a heading.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::ParsedDocument;

/// Extract the article fields from raw markdown.
///
/// Pure and total: malformed or partial markdown degrades to empty
/// fields, never an error.
///
/// # Example
///
/// ```
/// use markpair::document::parse;
///
/// let parsed = parse("# Hi\n\n> Short\n\nIntro.\n\nMore.\n\n## Body");
/// assert_eq!(parsed.title, "Hi");
/// assert_eq!(parsed.punchline, "Short");
/// assert_eq!(parsed.description, "More.");
/// assert_eq!(parsed.content, "## Body");
/// ```
pub fn parse(raw: &str) -> ParsedDocument {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, raw, &options);

    let title = find_first(root, |value| {
        matches!(value, NodeValue::Heading(h) if h.level == 1)
    })
    .map(display_text)
    .unwrap_or_default();

    let punchline = find_first(root, |value| matches!(value, NodeValue::BlockQuote))
        .map(display_text)
        .unwrap_or_default();

    ParsedDocument {
        title,
        punchline,
        description: second_paragraph(root, raw),
        content: content_split(raw),
    }
}

fn create_options() -> Options {
    let mut options = Options::default();

    // Match the preview renderer so structural reads agree with what the
    // user sees.
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    options
}

/// Trimmed suffix of `raw` starting at the first literal `##`.
fn content_split(raw: &str) -> String {
    raw.find("##")
        .map(|idx| raw[idx..].trim().to_string())
        .unwrap_or_default()
}

/// Raw source of the second top-level paragraph block, in document order.
///
/// Only direct children of the document count: a paragraph nested inside
/// a quote or list is part of that block, not a paragraph of its own.
fn second_paragraph<'a>(root: &'a AstNode<'a>, raw: &str) -> String {
    let node = root
        .children()
        .filter(|child| matches!(child.data.borrow().value, NodeValue::Paragraph))
        .nth(1);
    let Some(node) = node else {
        return String::new();
    };

    let sourcepos = node.data.borrow().sourcepos;
    let lines: Vec<&str> = raw.lines().collect();
    let start = sourcepos.start.line.saturating_sub(1);
    let end = sourcepos.end.line.min(lines.len());
    if start >= end {
        return String::new();
    }
    lines[start..end].join("\n").trim().to_string()
}

/// Depth-first search for the first node whose value matches `pred`.
fn find_first<'a>(
    node: &'a AstNode<'a>,
    pred: impl Fn(&NodeValue) -> bool + Copy,
) -> Option<&'a AstNode<'a>> {
    if pred(&node.data.borrow().value) {
        return Some(node);
    }
    node.children().find_map(|child| find_first(child, pred))
}

/// Concatenated display text of a node, as a reader of the rendered
/// output would see it: markup syntax is gone, the words remain.
fn display_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().to_string()
}

fn collect_text<'a>(node: &'a AstNode<'a>, text: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => text.push_str(t),
        NodeValue::Code(code) => text.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
        _ => {}
    }
    for child in node.children() {
        collect_text(child, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "# Title\n\n> Punch\n\nPara1\n\nPara2\n\n## Section\nBody";

    #[test]
    fn test_extracts_all_fields() {
        let parsed = parse(ARTICLE);
        assert_eq!(parsed.title, "Title");
        assert_eq!(parsed.punchline, "Punch");
        assert_eq!(parsed.description, "Para2");
        assert_eq!(parsed.content, "## Section\nBody");
    }

    #[test]
    fn test_plain_text_yields_empty_fields() {
        let parsed = parse("no headings at all");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.punchline, "");
        assert_eq!(parsed.content, "");
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_content_empty_without_marker() {
        let parsed = parse("# Just a title\n\nAnd a paragraph.\n\nAnother one.");
        assert_eq!(parsed.content, "");
        assert_eq!(parsed.title, "Just a title");
    }

    #[test]
    fn test_single_paragraph_has_no_description() {
        let parsed = parse("# T\n\nonly one paragraph");
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_title_keeps_formatted_words() {
        let parsed = parse("# My *great* `app`");
        assert_eq!(parsed.title, "My great app");
    }

    #[test]
    fn test_punchline_from_quote_anywhere() {
        let parsed = parse("First.\n\n> the punch line\n\nSecond.");
        assert_eq!(parsed.punchline, "the punch line");
    }

    #[test]
    fn test_quoted_paragraph_does_not_count_as_description() {
        // The quote's inner paragraph belongs to the quote block, so the
        // top-level paragraphs are Para1 and Para2.
        let parsed = parse("> quoted\n\nPara1\n\nPara2");
        assert_eq!(parsed.description, "Para2");
    }

    #[test]
    fn test_description_preserves_inline_markdown() {
        let parsed = parse("Intro.\n\nA **bold** [claim](http://example.com).");
        assert_eq!(parsed.description, "A **bold** [claim](http://example.com).");
    }

    #[test]
    fn test_multiline_description() {
        let parsed = parse("Intro.\n\nline one\nline two\n\ntail");
        assert_eq!(parsed.description, "line one\nline two");
    }

    #[test]
    fn test_content_split_is_purely_textual() {
        // The first `##` appears before any paragraph; the split still
        // happens at that textual position.
        let parsed = parse("## Early\n\nIntro.\n\nSecond.");
        assert_eq!(parsed.content, "## Early\n\nIntro.\n\nSecond.");
    }

    #[test]
    fn test_content_marker_inside_deeper_heading() {
        // `###` contains the two-character marker.
        let parsed = parse("text\n\n### Deep\nbody");
        assert_eq!(parsed.content, "### Deep\nbody");
    }

    #[test]
    fn test_parse_is_pure() {
        assert_eq!(parse(ARTICLE), parse(ARTICLE));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }
}
