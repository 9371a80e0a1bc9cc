use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Model, PaneFocus};

use super::{EDITOR_WIDTH_PERCENT, PANE_LEFT_PADDING, PREVIEW_WIDTH_PERCENT, status};

pub fn split_panes(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Content width of the preview pane for a given terminal width.
pub fn preview_content_width(total_width: u16) -> u16 {
    let area = Rect::new(0, 0, total_width, 1);
    split_panes(area)[1]
        .width
        .saturating_sub(PANE_LEFT_PADDING)
        .max(1)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let panes_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(1 + u16::from(toast_active)),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    let chunks = split_panes(panes_area);
    render_editor_pane(model, frame, chunks[0]);
    render_preview_pane(model, frame, chunks[1]);

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);
}

fn render_editor_pane(model: &Model, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(if model.focus == PaneFocus::Editor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let inner = block.inner(area);

    let visible = model.folds.visible_lines(model.buffer.line_count());
    let gutter_width = line_number_width(model.buffer.line_count());
    let cursor = model.buffer.cursor();

    let start = model.editor_viewport.offset().min(visible.len());
    let end = (start + inner.height as usize).min(visible.len());

    let mut content: Vec<Line> = Vec::new();
    for &line_idx in &visible[start..end] {
        let line_text = model.buffer.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);
        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            spans.extend(cursor_spans(&line_text, cursor.col));
        } else {
            spans.push(Span::raw(line_text));
        }
        if model.folds.is_collapsed_at(line_idx) {
            spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
        }
        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), inner);
    frame.render_widget(block, area);
}

/// Split an editor line into before / cursor cell / after spans.
fn cursor_spans(line_text: &str, col: usize) -> Vec<Span<'static>> {
    let byte_idx = line_text
        .char_indices()
        .nth(col)
        .map_or(line_text.len(), |(idx, _)| idx);
    let before = &line_text[..byte_idx];
    let cursor_char = line_text[byte_idx..]
        .chars()
        .next()
        .map_or_else(|| " ".to_string(), |c| c.to_string());
    let after = line_text[byte_idx..]
        .chars()
        .skip(1)
        .collect::<String>();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::raw(before.to_string()));
    }
    spans.push(Span::styled(
        cursor_char,
        Style::default().bg(Color::White).fg(Color::Black),
    ));
    if !after.is_empty() {
        spans.push(Span::raw(after));
    }
    spans
}

fn render_preview_pane(model: &Model, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::NONE)
        .padding(Padding::left(PANE_LEFT_PADDING));

    let range = model.preview_viewport.visible_range();
    let lines = model.preview.lines();
    let end = range.end.min(lines.len());

    let mut content: Vec<Line> = Vec::new();
    for line in &lines[range.start.min(end)..end] {
        let base = super::style::style_for_line_type(line.line_type());
        let line_style = if line.is_inactive() {
            super::style::dimmed(base)
        } else {
            base
        };
        if let Some(spans) = line.spans() {
            let styled = spans
                .iter()
                .map(|span| {
                    let style = if line.is_inactive() {
                        line_style
                    } else {
                        super::style::style_for_inline(line_style, span.style())
                    };
                    Span::styled(span.text().to_string(), style)
                })
                .collect::<Vec<_>>();
            content.push(Line::from(styled));
        } else {
            content.push(Line::styled(line.content().to_string(), line_style));
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Width needed for the editor's line-number gutter.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else {
        5
    }
}
