use crate::app::Model;
use crate::app::model::{PaneFocus, RemoteAction, ToastLevel};
use crate::editor::Direction;
use crate::preview::{LinkDisposition, Placeholder};

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Split line at cursor (Enter)
    SplitLine,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Move cursor to absolute position (line, col), e.g. from mouse click
    MoveTo(usize, usize),
    /// Insert the starter snippet for an empty field
    InsertPlaceholder(Placeholder),

    // Scrolling
    /// Scroll editor pane up by n lines
    EditorScrollUp(usize),
    /// Scroll editor pane down by n lines
    EditorScrollDown(usize),
    /// Scroll editor pane up one page
    EditorPageUp,
    /// Scroll editor pane down one page
    EditorPageDown,
    /// Scroll preview pane up by n lines (never drives the editor)
    PreviewScrollUp(usize),
    /// Scroll preview pane down by n lines (never drives the editor)
    PreviewScrollDown(usize),

    // Pipeline
    /// Run the parse → render pipeline now
    RefreshPreview,
    /// Apply section focus (folds, cursor, preview dimming)
    ApplySectionFocus,

    // Links and actions
    /// Activate the link on a preview line
    FollowLink(usize),
    /// Save the draft through the remote
    Save,
    /// Publish the draft through the remote
    Publish,
    /// Delete the draft through the remote (asks for confirmation first)
    Delete,

    // Window
    /// Switch focus between editor and preview
    SwitchFocus,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application (warns once on unsaved changes)
    Quit,
}

impl Message {
    /// Whether this message can mutate the raw buffer.
    ///
    /// The event loop feeds these through the update throttle so a burst
    /// of keystrokes coalesces into a bounded number of pipeline runs.
    /// Following a link counts because it inserts a snippet when the
    /// target is a placeholder.
    pub const fn is_buffer_change(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::SplitLine
                | Self::DeleteBack
                | Self::DeleteForward
                | Self::InsertPlaceholder(_)
                | Self::FollowLink(_)
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Remote calls and timers stay in the event loop; `update` only queues
/// them via `pending_action`.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Confirmation flags only survive an immediate repeat of the action.
    if !matches!(msg, Message::Quit) {
        model.quit_confirmed = false;
    }
    if !matches!(msg, Message::Delete) {
        model.delete_confirmed = false;
    }

    match msg {
        // Editing
        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
            model.session.mark_dirty();
            ensure_cursor_visible(&mut model);
        }
        Message::SplitLine => {
            model.buffer.split_line();
            model.session.mark_dirty();
            ensure_cursor_visible(&mut model);
        }
        Message::DeleteBack => {
            if model.buffer.delete_back() {
                model.session.mark_dirty();
            }
            ensure_cursor_visible(&mut model);
        }
        Message::DeleteForward => {
            if model.buffer.delete_forward() {
                model.session.mark_dirty();
            }
        }
        Message::MoveCursor(dir) => {
            model.buffer.move_cursor(dir);
            ensure_cursor_visible(&mut model);
        }
        Message::MoveHome => model.buffer.move_home(),
        Message::MoveEnd => model.buffer.move_end(),
        Message::MoveTo(line, col) => {
            model.buffer.move_to(line, col);
            model.focus = PaneFocus::Editor;
        }
        Message::InsertPlaceholder(slot) => {
            model.buffer.insert_at_row(slot.insert_row(), slot.snippet());
            model.buffer.move_to(slot.insert_row(), 0);
            model.session.mark_dirty();
            model.focus = PaneFocus::Editor;
        }

        // Scrolling
        Message::EditorScrollUp(n) => {
            model.editor_viewport.scroll_up(n);
            model.sync_preview_scroll();
        }
        Message::EditorScrollDown(n) => {
            model.editor_viewport.scroll_down(n);
            model.sync_preview_scroll();
        }
        Message::EditorPageUp => {
            model.editor_viewport.page_up();
            model.sync_preview_scroll();
        }
        Message::EditorPageDown => {
            model.editor_viewport.page_down();
            model.sync_preview_scroll();
        }
        Message::PreviewScrollUp(n) => model.preview_viewport.scroll_up(n),
        Message::PreviewScrollDown(n) => model.preview_viewport.scroll_down(n),

        // Pipeline
        Message::RefreshPreview => model.refresh_preview(),
        Message::ApplySectionFocus => model.apply_section_focus(),

        // Links and actions
        Message::FollowLink(line) => {
            if let Some(slot) = model.preview.placeholder_at(line) {
                return update(model, Message::InsertPlaceholder(slot));
            }
            let note = model.preview.link_at(line).map(|link| match link.disposition {
                LinkDisposition::NewContext => format!("Opens externally: {}", link.url),
                LinkDisposition::SameContext => format!("Link: {}", link.url),
            });
            if let Some(note) = note {
                model.show_toast(ToastLevel::Info, note);
            }
        }
        Message::Save => model.pending_action = Some(RemoteAction::Save),
        Message::Publish => model.pending_action = Some(RemoteAction::Publish),
        Message::Delete => {
            if model.delete_confirmed {
                model.pending_action = Some(RemoteAction::Delete);
            } else {
                model.delete_confirmed = true;
                model.show_toast(ToastLevel::Warning, "Delete draft? Press Ctrl+D again");
            }
        }

        // Window
        Message::SwitchFocus => {
            model.focus = match model.focus {
                PaneFocus::Editor => PaneFocus::Preview,
                PaneFocus::Preview => PaneFocus::Editor,
            };
        }
        Message::Resize(width, height) => {
            let pane_height = height.saturating_sub(1);
            let pane_width = width / 2;
            model.editor_viewport.resize(pane_width, pane_height);
            model.preview_viewport.resize(pane_width, pane_height);
            model.refresh_preview();
        }

        // Application
        Message::Quit => {
            if model.session.should_warn_on_exit() && !model.quit_confirmed {
                model.quit_confirmed = true;
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes — press Ctrl+Q again to quit",
                );
            } else {
                model.should_quit = true;
            }
        }
    }

    model
}

/// Keep the cursor's visible row inside the editor viewport.
///
/// The viewport offset indexes into the fold-filtered line list, so the
/// cursor's buffer line is first mapped to its visible position.
fn ensure_cursor_visible(model: &mut Model) {
    let cursor_line = model.buffer.cursor().line;
    let visible = model.folds.visible_lines(model.buffer.line_count());
    if let Some(pos) = visible.iter().position(|&line| line == cursor_line) {
        model.editor_viewport.scroll_into_view(pos);
    }
}
