//! Theming and color definitions.
//!
//! Semantic ANSI colors that adapt to the terminal's palette. Lines
//! outside the focused section get the dim treatment on top of their
//! base style.

use ratatui::style::{Color, Modifier, Style};

use crate::preview::{InlineStyle, LineType};

/// Base style for a preview line type.
pub fn style_for_line_type(line_type: LineType) -> Style {
    match line_type {
        LineType::Heading(1) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineType::Heading(2) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineType::Heading(3) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LineType::Heading(_) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),

        // The punchline is the article's subtitle
        LineType::Punchline => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC | Modifier::BOLD),

        LineType::BlockQuote => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::ITALIC),

        LineType::CodeBlock => Style::default()
            .fg(Color::Indexed(245))
            .add_modifier(Modifier::DIM),

        LineType::HorizontalRule => Style::default()
            .fg(Color::Indexed(240))
            .add_modifier(Modifier::DIM),

        LineType::ListItem(_) | LineType::Paragraph | LineType::Empty => Style::default(),
    }
}

/// Style for an inline span, merged with its line's base style.
pub fn style_for_inline(base: Style, inline: InlineStyle) -> Style {
    let mut style = base;
    if inline.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if inline.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if inline.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if inline.code {
        style = style.fg(Color::Indexed(245)).bg(Color::Indexed(236));
    }
    if inline.link {
        style = style
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED)
            .remove_modifier(Modifier::DIM);
    }
    style
}

/// Dim a style for lines outside the focused section.
pub fn dimmed(style: Style) -> Style {
    style
        .fg(Color::Indexed(240))
        .add_modifier(Modifier::DIM)
        .remove_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels_have_distinct_styles() {
        assert_ne!(
            style_for_line_type(LineType::Heading(1)),
            style_for_line_type(LineType::Heading(2))
        );
    }

    #[test]
    fn test_link_spans_are_underlined() {
        let inline = InlineStyle {
            link: true,
            ..InlineStyle::default()
        };
        let style = style_for_inline(Style::default(), inline);
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_dimmed_removes_emphasis() {
        let base = style_for_line_type(LineType::Heading(2));
        let dim = dimmed(base);
        assert!(dim.add_modifier.contains(Modifier::DIM));
        assert!(!dim.add_modifier.contains(Modifier::BOLD));
    }
}
