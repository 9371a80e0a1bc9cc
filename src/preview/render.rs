//! Projection of a [`ParsedDocument`] onto the preview pane.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};
use unicode_width::UnicodeWidthStr;

use crate::document::ParsedDocument;

use super::types::{
    InlineSpan, InlineStyle, LineType, LinkDisposition, LinkRef, Placeholder, PreviewLine,
    PreviewView,
};

/// Build the preview for a parsed document.
///
/// Title and punchline are plain-text projections; description and
/// content are rendered as markdown. Empty title, punchline, and content
/// become clickable placeholder affordances. An empty description
/// renders nothing; it is the one field without a placeholder path.
pub fn render(parsed: &ParsedDocument, width: u16) -> PreviewView {
    let wrap_width = usize::from(width.max(20));
    let mut lines = Vec::new();
    let mut links = Vec::new();

    lines.push(if parsed.title.is_empty() {
        PreviewLine::placeholder(Placeholder::Title, LineType::Heading(1))
    } else {
        PreviewLine::new(parsed.title.clone(), LineType::Heading(1))
    });
    lines.push(if parsed.punchline.is_empty() {
        PreviewLine::placeholder(Placeholder::Punchline, LineType::Punchline)
    } else {
        PreviewLine::new(parsed.punchline.clone(), LineType::Punchline)
    });
    lines.push(PreviewLine::new(String::new(), LineType::Empty));

    let description_start = lines.len();
    if !parsed.description.is_empty() {
        render_markdown(&parsed.description, wrap_width, &mut lines, &mut links);
    }
    let description_range = description_start..lines.len();

    let content_start = lines.len();
    if parsed.content.is_empty() {
        lines.push(PreviewLine::placeholder(
            Placeholder::Content,
            LineType::Paragraph,
        ));
    } else {
        render_markdown(&parsed.content, wrap_width, &mut lines, &mut links);
    }

    let mut view = PreviewView {
        lines,
        links,
        description_range,
        content_start,
    };
    retarget_links(&mut view);
    view
}

/// Re-point every hyperlink at an external browsing context.
///
/// The view is rebuilt wholesale on each render, so this runs as a
/// post-pass of every render rather than once at startup.
pub fn retarget_links(view: &mut PreviewView) {
    for link in &mut view.links {
        link.disposition = LinkDisposition::NewContext;
    }
}

fn render_markdown(
    source: &str,
    wrap_width: usize,
    lines: &mut Vec<PreviewLine>,
    links: &mut Vec<LinkRef>,
) {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, source, &options);
    for child in root.children() {
        render_block(child, 0, wrap_width, lines, links);
    }
}

fn create_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

fn render_block<'a>(
    node: &'a AstNode<'a>,
    depth: usize,
    wrap_width: usize,
    lines: &mut Vec<PreviewLine>,
    links: &mut Vec<LinkRef>,
) {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            let text = node_text(node);
            let prefix = "#".repeat(usize::from(heading.level));
            lines.push(PreviewLine::new(
                format!("{prefix} {text}"),
                LineType::Heading(heading.level),
            ));
            lines.push(PreviewLine::new(String::new(), LineType::Empty));
        }

        NodeValue::Paragraph => {
            let spans = inline_spans(node, InlineStyle::default(), lines.len(), links);
            push_wrapped(lines, &spans, wrap_width, "", "", LineType::Paragraph);
            lines.push(PreviewLine::new(String::new(), LineType::Empty));
        }

        NodeValue::BlockQuote => {
            for child in node.children() {
                let spans = inline_spans(child, InlineStyle::default(), lines.len(), links);
                push_wrapped(lines, &spans, wrap_width, "▌ ", "▌ ", LineType::BlockQuote);
            }
            lines.push(PreviewLine::new(String::new(), LineType::Empty));
        }

        NodeValue::List(_) => {
            for item in node.children() {
                render_list_item(item, depth, wrap_width, lines, links);
            }
            if depth == 0 {
                lines.push(PreviewLine::new(String::new(), LineType::Empty));
            }
        }

        NodeValue::CodeBlock(code_block) => {
            for raw_line in code_block.literal.lines() {
                let style = InlineStyle {
                    code: true,
                    ..InlineStyle::default()
                };
                lines.push(PreviewLine::with_spans(
                    raw_line.to_string(),
                    LineType::CodeBlock,
                    vec![InlineSpan::new(raw_line.to_string(), style)],
                ));
            }
            lines.push(PreviewLine::new(String::new(), LineType::Empty));
        }

        NodeValue::ThematicBreak => {
            lines.push(PreviewLine::new(
                "─".repeat(wrap_width.min(40)),
                LineType::HorizontalRule,
            ));
            lines.push(PreviewLine::new(String::new(), LineType::Empty));
        }

        // Tables and anything else degrade to their plain text.
        _ => {
            let text = node_text(node);
            if !text.is_empty() {
                lines.push(PreviewLine::new(text, LineType::Paragraph));
                lines.push(PreviewLine::new(String::new(), LineType::Empty));
            }
        }
    }
}

fn render_list_item<'a>(
    item: &'a AstNode<'a>,
    depth: usize,
    wrap_width: usize,
    lines: &mut Vec<PreviewLine>,
    links: &mut Vec<LinkRef>,
) {
    let indent = "  ".repeat(depth);
    let bullet = format!("{indent}• ");
    let hang = format!("{indent}  ");
    for child in item.children() {
        match &child.data.borrow().value {
            NodeValue::List(_) => {
                render_block(child, depth + 1, wrap_width, lines, links);
            }
            _ => {
                let spans = inline_spans(child, InlineStyle::default(), lines.len(), links);
                push_wrapped(
                    lines,
                    &spans,
                    wrap_width,
                    &bullet,
                    &hang,
                    LineType::ListItem(depth),
                );
            }
        }
    }
}

fn push_wrapped(
    lines: &mut Vec<PreviewLine>,
    spans: &[InlineSpan],
    wrap_width: usize,
    first_prefix: &str,
    rest_prefix: &str,
    line_type: LineType,
) {
    for line_spans in wrap_spans(spans, wrap_width, first_prefix, rest_prefix) {
        let content: String = line_spans.iter().map(InlineSpan::text).collect();
        lines.push(PreviewLine::with_spans(content, line_type, line_spans));
    }
}

/// Greedy word wrap over styled spans.
fn wrap_spans(
    spans: &[InlineSpan],
    width: usize,
    first_prefix: &str,
    rest_prefix: &str,
) -> Vec<Vec<InlineSpan>> {
    let mut out = Vec::new();
    let mut current = prefix_spans(first_prefix);
    let mut used = first_prefix.width();

    for span in spans {
        for word in span.text().split_inclusive(' ') {
            let word_width = word.width();
            // Never wrap before the first word of a line, even when the
            // word itself is wider than the pane.
            if used + word_width > width && used > rest_prefix.width() {
                out.push(current);
                current = prefix_spans(rest_prefix);
                used = rest_prefix.width();
            }
            current.push(InlineSpan::new(word.to_string(), span.style()));
            used += word_width;
        }
    }

    out.push(current);
    out
}

fn prefix_spans(prefix: &str) -> Vec<InlineSpan> {
    if prefix.is_empty() {
        Vec::new()
    } else {
        vec![InlineSpan::new(prefix.to_string(), InlineStyle::default())]
    }
}

/// Collect the styled inline spans of a block node, recording any links
/// against `line` (the line the block starts on).
fn inline_spans<'a>(
    node: &'a AstNode<'a>,
    style: InlineStyle,
    line: usize,
    links: &mut Vec<LinkRef>,
) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    collect_inline(node, style, line, &mut spans, links);
    spans
}

fn collect_inline<'a>(
    node: &'a AstNode<'a>,
    style: InlineStyle,
    line: usize,
    spans: &mut Vec<InlineSpan>,
    links: &mut Vec<LinkRef>,
) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => {
                spans.push(InlineSpan::new(text.clone(), style));
            }
            NodeValue::Code(code) => {
                let code_style = InlineStyle {
                    code: true,
                    ..style
                };
                spans.push(InlineSpan::new(code.literal.clone(), code_style));
            }
            NodeValue::SoftBreak | NodeValue::LineBreak => {
                spans.push(InlineSpan::new(" ".to_string(), style));
            }
            NodeValue::Emph => {
                let emph = InlineStyle {
                    emphasis: true,
                    ..style
                };
                collect_inline(child, emph, line, spans, links);
            }
            NodeValue::Strong => {
                let strong = InlineStyle {
                    strong: true,
                    ..style
                };
                collect_inline(child, strong, line, spans, links);
            }
            NodeValue::Strikethrough => {
                let strike = InlineStyle {
                    strikethrough: true,
                    ..style
                };
                collect_inline(child, strike, line, spans, links);
            }
            NodeValue::Link(link) => {
                links.push(LinkRef {
                    text: node_text(child),
                    url: link.url.clone(),
                    line,
                    disposition: LinkDisposition::default(),
                });
                let link_style = InlineStyle { link: true, ..style };
                collect_inline(child, link_style, line, spans, links);
            }
            _ => {
                collect_inline(child, style, line, spans, links);
            }
        }
    }
}

fn node_text<'a>(node: &'a AstNode<'a>) -> String {
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
    use crate::document::parse;

    const WIDTH: u16 = 60;

    fn view_of(raw: &str) -> PreviewView {
        render(&parse(raw), WIDTH)
    }

    #[test]
    fn test_title_and_punchline_render_as_text() {
        let view = view_of("# Title\n\n> Punch\n\nIntro.\n\nDesc.\n\n## S\nbody");
        assert_eq!(view.lines()[0].content(), "Title");
        assert_eq!(view.lines()[0].line_type(), LineType::Heading(1));
        assert_eq!(view.lines()[1].content(), "Punch");
        assert_eq!(view.lines()[1].line_type(), LineType::Punchline);
    }

    #[test]
    fn test_empty_fields_get_placeholders() {
        let view = view_of("just some text");
        assert_eq!(view.placeholder_at(0), Some(Placeholder::Title));
        assert_eq!(view.placeholder_at(1), Some(Placeholder::Punchline));
        let content_placeholder = view
            .lines()
            .iter()
            .filter_map(PreviewLine::placeholder_slot)
            .any(|slot| slot == Placeholder::Content);
        assert!(content_placeholder);
    }

    #[test]
    fn test_empty_description_renders_nothing() {
        // The description has no placeholder path, unlike the other fields.
        let view = view_of("just some text");
        assert!(view.description_lines().is_empty());
        let has_description_placeholder = view
            .lines()
            .iter()
            .any(|line| line.content().contains("description"));
        assert!(!has_description_placeholder);
    }

    #[test]
    fn test_description_renders_markdown() {
        let view = view_of("# T\n\nIntro.\n\nA **bold** word.\n\n## S\nbody");
        let desc: Vec<_> = view
            .description_lines()
            .iter()
            .map(PreviewLine::content)
            .collect();
        assert!(desc.iter().any(|c| c.contains("A bold word.")));
        let strong = view.description_lines()[0]
            .spans()
            .unwrap()
            .iter()
            .any(|span| span.style().strong);
        assert!(strong, "inline markdown must survive rendering");
    }

    #[test]
    fn test_links_open_in_new_context_after_every_render() {
        let raw = "# T\n\n## S\n\n- [a link](http://example.com) here";
        let view = view_of(raw);
        assert!(!view.links().is_empty());
        assert!(
            view.links()
                .iter()
                .all(|link| link.disposition == LinkDisposition::NewContext)
        );

        // A rebuilt view starts over and must be retargeted again.
        let view = view_of(raw);
        assert!(
            view.links()
                .iter()
                .all(|link| link.disposition == LinkDisposition::NewContext)
        );
    }

    #[test]
    fn test_long_paragraph_wraps() {
        let raw = format!("# T\n\n## S\n\n{}", "word ".repeat(40));
        let view = view_of(&raw);
        let wrapped = view
            .lines()
            .iter()
            .filter(|line| line.line_type() == LineType::Paragraph)
            .count();
        assert!(wrapped > 1, "200 columns of text must wrap at width 60");
        for line in view.lines() {
            assert!(line.content().width() <= usize::from(WIDTH) + 1);
        }
    }

    #[test]
    fn test_section_focus_dims_everything_but_target() {
        let raw = "# T\n\n> P\n\nIntro.\n\nDesc.\n\n## One\n\n- a\n\n## Two\n\n- b\n\n## Three\n\n- c";
        let mut view = view_of(raw);
        let target = view.apply_section_focus(2).expect("second heading exists");
        assert_eq!(view.lines()[target].content(), "## Two");
        assert!(!view.lines()[target].is_inactive());

        // Every other heading and list line is dimmed, as is the description.
        for (idx, line) in view.lines().iter().enumerate() {
            match line.line_type() {
                LineType::Heading(_) | LineType::ListItem(_) if idx != target => {
                    // the block right after the target stays active
                    let reactivated = line.content().contains("b");
                    assert_eq!(line.is_inactive(), !reactivated, "line {idx}");
                }
                _ => {}
            }
        }
        assert!(view.description_lines().iter().all(PreviewLine::is_inactive));
    }

    #[test]
    fn test_section_focus_out_of_range_is_untouched() {
        let raw = "# T\n\n## One\n\ntext";
        let mut view = view_of(raw);
        let before = view.clone();
        assert_eq!(view.apply_section_focus(5), None);
        assert_eq!(view, before);
    }

    #[test]
    fn test_nested_list_renders_with_depth() {
        let view = view_of("## S\n\n- outer\n  - inner");
        let depths: Vec<_> = view
            .lines()
            .iter()
            .filter_map(|line| match line.line_type() {
                LineType::ListItem(d) => Some(d),
                _ => None,
            })
            .collect();
        assert!(depths.contains(&0));
        assert!(depths.contains(&1));
    }
}
