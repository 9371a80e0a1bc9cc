use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, PaneFocus, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model.file_path.file_name().map_or_else(
        || "untitled".to_string(),
        |s| s.to_string_lossy().to_string(),
    );

    let dirty_indicator = if model.session.is_dirty() {
        " [modified]"
    } else {
        ""
    };
    let focus_indicator = match model.focus {
        PaneFocus::Editor => "EDIT",
        PaneFocus::Preview => "PREVIEW",
    };
    let section_indicator = model
        .section
        .map_or_else(String::new, |t| format!("  [section {}]", t.ordinal()));

    let cursor = model.buffer.cursor();
    let percent = model.preview_viewport.scroll_percent();

    let status = format!(
        " {focus_indicator}  {filename}{dirty_indicator}{section_indicator}  Ln {}, Col {}  [{percent}%]  Ctrl+S:save  Ctrl+P:publish  Ctrl+Q:quit",
        cursor.line + 1,
        cursor.col + 1,
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
