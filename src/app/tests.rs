use std::path::PathBuf;

use crate::editor::Direction;
use crate::preview::LineType;
use crate::section::SectionTarget;
use crate::session::{PublishResponse, Remote, RemoteError, SavePayload, SaveResponse};

use super::model::RemoteAction;
use super::{Message, Model, PaneFocus, ToastLevel, effects, update};

const DRAFT: &str = "# Title\n\n> Punch\n\nIntro paragraph.\n\nSecond paragraph.\n\n## One\nBody one.\n\n## Two\nBody two.\n";

const SECTIONED: &str = "# T\n\nintro\n\n## One\na\n\n## Two\nb\n\n## Three\nc";

fn test_model(text: &str) -> Model {
    Model::new(PathBuf::from("draft.md"), text, (80, 24), None)
}

fn long_model() -> Model {
    let mut md = String::from("# Long\n\n");
    for i in 1..=80 {
        md.push_str(&format!("## Section {i}\nBody text line.\n\n"));
    }
    test_model(&md)
}

#[derive(Default)]
struct MockRemote {
    fail: bool,
    saves: usize,
    deletes: usize,
    last_payload: Option<SavePayload>,
}

impl Remote for MockRemote {
    fn save(&mut self, payload: &SavePayload) -> Result<SaveResponse, RemoteError> {
        if self.fail {
            return Err(RemoteError::Rejected("server said no".to_string()));
        }
        self.saves += 1;
        self.last_payload = Some(payload.clone());
        Ok(SaveResponse {
            edit_url: "/drafts/7/edit".to_string(),
            publish_url: "/drafts/7/publish".to_string(),
            delete_url: "/drafts/7/delete".to_string(),
        })
    }

    fn publish(&mut self, publish_url: &str) -> Result<PublishResponse, RemoteError> {
        if self.fail {
            return Err(RemoteError::Rejected("server said no".to_string()));
        }
        Ok(PublishResponse {
            url: format!("{publish_url}/live"),
        })
    }

    fn delete(&mut self, _delete_url: &str) -> Result<(), RemoteError> {
        if self.fail {
            return Err(RemoteError::Rejected("server said no".to_string()));
        }
        self.deletes += 1;
        Ok(())
    }
}

#[test]
fn test_insert_char_marks_dirty() {
    let model = test_model(DRAFT);
    assert!(!model.session.is_dirty());
    let model = update(model, Message::InsertChar('x'));
    assert!(model.session.is_dirty());
}

#[test]
fn test_cursor_movement_stays_clean() {
    let model = test_model(DRAFT);
    let model = update(model, Message::MoveCursor(Direction::Down));
    let model = update(model, Message::MoveEnd);
    assert!(!model.session.is_dirty());
}

#[test]
fn test_failed_delete_back_stays_clean() {
    // Cursor starts at the buffer origin, so there is nothing to delete.
    let model = test_model(DRAFT);
    let model = update(model, Message::DeleteBack);
    assert!(!model.session.is_dirty());
}

#[test]
fn test_edit_does_not_reparse_until_refresh() {
    let mut model = test_model("");
    for ch in "# Hello".chars() {
        model = update(model, Message::InsertChar(ch));
    }
    assert_eq!(model.parsed.title, "");

    let model = update(model, Message::RefreshPreview);
    assert_eq!(model.parsed.title, "Hello");
}

#[test]
fn test_refresh_extracts_all_fields() {
    let model = test_model(DRAFT);
    assert_eq!(model.parsed.title, "Title");
    assert_eq!(model.parsed.punchline, "Punch");
    assert_eq!(model.parsed.description, "Second paragraph.");
    assert!(model.parsed.content.starts_with("## One"));
}

#[test]
fn test_quit_with_clean_session_quits_immediately() {
    let model = test_model(DRAFT);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_with_unsaved_changes_warns_first() {
    let model = test_model(DRAFT);
    let model = update(model, Message::InsertChar('x'));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
    assert!(model.quit_confirmed);
    assert!(matches!(model.active_toast(), Some((_, ToastLevel::Warning))));

    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_other_action_resets_quit_confirmation() {
    let model = test_model(DRAFT);
    let model = update(model, Message::InsertChar('x'));
    let model = update(model, Message::Quit);
    let model = update(model, Message::MoveCursor(Direction::Down));
    assert!(!model.quit_confirmed);

    let model = update(model, Message::Quit);
    assert!(!model.should_quit, "confirmation must start over");
}

#[test]
fn test_delete_requires_second_press() {
    let model = test_model(DRAFT);
    let model = update(model, Message::Delete);
    assert!(model.pending_action.is_none());
    assert!(model.delete_confirmed);

    let model = update(model, Message::Delete);
    assert_eq!(model.pending_action, Some(RemoteAction::Delete));
}

#[test]
fn test_save_success_clears_dirty_and_adopts_endpoints() {
    let model = update(test_model(DRAFT), Message::InsertChar('x'));
    let mut model = update(model, Message::Save);
    let mut remote = MockRemote::default();

    effects::run_pending(&mut model, &mut remote);
    assert_eq!(remote.saves, 1);
    assert!(!model.session.is_dirty());
    assert_eq!(model.session.endpoints().publish_url, "/drafts/7/publish");
    assert!(matches!(model.active_toast(), Some(("Saved", ToastLevel::Info))));
}

#[test]
fn test_save_submits_fields_and_raw_source() {
    let mut model = update(test_model(DRAFT), Message::Save);
    let mut remote = MockRemote::default();

    effects::run_pending(&mut model, &mut remote);
    let payload = remote.last_payload.expect("save payload");
    assert_eq!(payload.title, "Title");
    assert_eq!(payload.raw_content, model.buffer.text());
}

#[test]
fn test_save_failure_keeps_state_untouched() {
    let model = update(test_model(DRAFT), Message::InsertChar('x'));
    let text_before = model.buffer.text();
    let mut model = update(model, Message::Save);
    let mut remote = MockRemote {
        fail: true,
        ..MockRemote::default()
    };

    effects::run_pending(&mut model, &mut remote);
    assert!(model.session.is_dirty(), "failed save must not clear dirty");
    assert_eq!(model.buffer.text(), text_before);
    assert!(matches!(model.active_toast(), Some((_, ToastLevel::Error))));
}

#[test]
fn test_publish_reports_live_url() {
    let mut model = update(test_model(DRAFT), Message::Save);
    let mut remote = MockRemote::default();
    effects::run_pending(&mut model, &mut remote);

    let mut model = update(model, Message::Publish);
    effects::run_pending(&mut model, &mut remote);
    let (message, level) = model.active_toast().expect("publish toast");
    assert_eq!(level, ToastLevel::Info);
    assert!(message.contains("/drafts/7/publish/live"));
}

#[test]
fn test_confirmed_delete_quits() {
    let model = update(test_model(DRAFT), Message::Delete);
    let mut model = update(model, Message::Delete);
    let mut remote = MockRemote::default();

    effects::run_pending(&mut model, &mut remote);
    assert_eq!(remote.deletes, 1);
    assert!(model.should_quit);
}

#[test]
fn test_placeholder_click_inserts_snippet() {
    // Empty draft: the first preview line is the title placeholder.
    let model = test_model("");
    let model = update(model, Message::FollowLink(0));
    assert!(model.buffer.text().starts_with("# This is the title"));
    assert!(model.session.is_dirty());
    assert_eq!(model.buffer.cursor().line, 0);
}

#[test]
fn test_editor_scroll_drives_preview() {
    let model = long_model();
    assert_eq!(model.preview_viewport.offset(), 0);
    let model = update(model, Message::EditorScrollDown(40));
    assert!(model.preview_viewport.offset() > 0);
}

#[test]
fn test_preview_scroll_never_drives_editor() {
    let model = long_model();
    let model = update(model, Message::PreviewScrollDown(40));
    assert!(model.preview_viewport.offset() > 0);
    assert_eq!(model.editor_viewport.offset(), 0);
}

#[test]
fn test_switch_focus_toggles_panes() {
    let model = test_model(DRAFT);
    assert_eq!(model.focus, PaneFocus::Editor);
    let model = update(model, Message::SwitchFocus);
    assert_eq!(model.focus, PaneFocus::Preview);
    let model = update(model, Message::SwitchFocus);
    assert_eq!(model.focus, PaneFocus::Editor);
}

#[test]
fn test_resize_reflows_both_panes() {
    let model = test_model(DRAFT);
    let model = update(model, Message::Resize(120, 40));
    assert_eq!(model.editor_viewport.width(), 60);
    assert_eq!(model.preview_viewport.height(), 39);
}

#[test]
fn test_section_focus_folds_and_moves_cursor() {
    let mut model = Model::new(
        PathBuf::from("draft.md"),
        SECTIONED,
        (80, 24),
        SectionTarget::parse(Some("2")),
    );
    assert!(!model.scroll_sync.is_enabled());

    model = update(model, Message::ApplySectionFocus);
    // "## Two" is buffer line 7; its body stays visible, others fold.
    assert_eq!(model.buffer.cursor().line, 7);
    assert!(model.folds.is_hidden(5), "body of section one is folded");
    assert!(!model.folds.is_hidden(8), "target body stays visible");
}

#[test]
fn test_section_focus_dims_other_sections() {
    let mut model = Model::new(
        PathBuf::from("draft.md"),
        SECTIONED,
        (80, 24),
        SectionTarget::parse(Some("2")),
    );
    model = update(model, Message::ApplySectionFocus);

    let heading = |needle: &str| {
        model
            .preview
            .lines()
            .iter()
            .find(|line| {
                matches!(line.line_type(), LineType::Heading(2)) && line.content().contains(needle)
            })
            .expect("heading present")
    };
    assert!(!heading("Two").is_inactive());
    assert!(heading("One").is_inactive());
    assert!(heading("Three").is_inactive());
}

#[test]
fn test_section_focus_survives_refresh() {
    let mut model = Model::new(
        PathBuf::from("draft.md"),
        SECTIONED,
        (80, 24),
        SectionTarget::parse(Some("2")),
    );
    model = update(model, Message::ApplySectionFocus);
    model = update(model, Message::InsertChar('x'));
    model = update(model, Message::RefreshPreview);

    assert!(model.folds.is_hidden(5), "folds reapplied after refresh");
}

#[test]
fn test_out_of_range_section_is_silent() {
    let model = Model::new(
        PathBuf::from("draft.md"),
        SECTIONED,
        (80, 24),
        SectionTarget::parse(Some("9")),
    );
    let model = update(model, Message::ApplySectionFocus);
    assert!(!model.folds.is_hidden(5), "nothing folds");
    assert!(model.preview.lines().iter().all(|l| !l.is_inactive()));
}
