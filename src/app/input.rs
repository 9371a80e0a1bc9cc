use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{Message, Model, PaneFocus};
use crate::editor::Direction;

/// Lines scrolled per mouse wheel tick.
const WHEEL_SCROLL_LINES: usize = 3;

/// Translate a terminal event into a message.
pub fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model),
        Event::Mouse(mouse) => handle_mouse(*mouse, model),
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::Save),
            KeyCode::Char('p') => Some(Message::Publish),
            KeyCode::Char('d') => Some(Message::Delete),
            _ => None,
        };
    }

    if key.code == KeyCode::Tab {
        return Some(Message::SwitchFocus);
    }

    match model.focus {
        PaneFocus::Editor => handle_editor_key(key),
        PaneFocus::Preview => handle_preview_key(key, model),
    }
}

fn handle_editor_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char(ch) => Some(Message::InsertChar(ch)),
        KeyCode::Enter => Some(Message::SplitLine),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Delete => Some(Message::DeleteForward),
        KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),
        KeyCode::PageUp => Some(Message::EditorPageUp),
        KeyCode::PageDown => Some(Message::EditorPageDown),
        _ => None,
    }
}

fn handle_preview_key(key: KeyEvent, model: &Model) -> Option<Message> {
    let page = model.preview_viewport.height() as usize;
    match key.code {
        KeyCode::Up => Some(Message::PreviewScrollUp(1)),
        KeyCode::Down => Some(Message::PreviewScrollDown(1)),
        KeyCode::PageUp => Some(Message::PreviewScrollUp(page)),
        KeyCode::PageDown => Some(Message::PreviewScrollDown(page)),
        KeyCode::Enter => {
            let line = model.preview_viewport.offset();
            Some(Message::FollowLink(line))
        }
        _ => None,
    }
}

fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    let panes = pane_areas(model);
    let in_editor = point_in_rect(mouse.column, mouse.row, panes.0);
    let in_preview = point_in_rect(mouse.column, mouse.row, panes.1);

    match mouse.kind {
        MouseEventKind::ScrollUp if in_editor => Some(Message::EditorScrollUp(WHEEL_SCROLL_LINES)),
        MouseEventKind::ScrollDown if in_editor => {
            Some(Message::EditorScrollDown(WHEEL_SCROLL_LINES))
        }
        MouseEventKind::ScrollUp if in_preview => {
            Some(Message::PreviewScrollUp(WHEEL_SCROLL_LINES))
        }
        MouseEventKind::ScrollDown if in_preview => {
            Some(Message::PreviewScrollDown(WHEEL_SCROLL_LINES))
        }
        MouseEventKind::Up(MouseButton::Left) if in_editor => {
            editor_click_target(model, panes.0, mouse.column, mouse.row)
                .map(|(line, col)| Message::MoveTo(line, col))
        }
        MouseEventKind::Up(MouseButton::Left) if in_preview => {
            let line = model.preview_viewport.offset() + (mouse.row - panes.1.y) as usize;
            (line < model.preview.line_count()).then_some(Message::FollowLink(line))
        }
        _ => None,
    }
}

/// Editor and preview pane rectangles for hit testing.
fn pane_areas(model: &Model) -> (Rect, Rect) {
    let width = model.editor_viewport.width() + model.preview_viewport.width();
    let area = Rect::new(0, 0, width, model.editor_viewport.height());
    let chunks = crate::ui::split_panes(area);
    (chunks[0], chunks[1])
}

/// Buffer position for a click in the editor pane.
///
/// The clicked row indexes the fold-filtered line list; the column is
/// offset past the line-number gutter.
fn editor_click_target(
    model: &Model,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<(usize, usize)> {
    let visible = model.folds.visible_lines(model.buffer.line_count());
    let idx = model.editor_viewport.offset() + (row - area.y) as usize;
    let line = *visible.get(idx)?;
    let gutter = crate::ui::line_number_width(model.buffer.line_count()) + 1;
    let col = column.saturating_sub(area.x + gutter) as usize;
    Some((line, col))
}

const fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
