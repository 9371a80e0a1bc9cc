use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::{self, ParsedDocument};
use crate::editor::{FoldState, RawBuffer};
use crate::preview::{self, PreviewView};
use crate::section::{self, FOCUS_TOP_MARGIN, SectionTarget};
use crate::session::Session;
use crate::sync::{PaneMetrics, ScrollSync};
use crate::ui::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaneFocus {
    #[default]
    Editor,
    Preview,
}

/// A remote action queued by `update` and executed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Save,
    Publish,
    Delete,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The raw text buffer, the single source of truth
    pub buffer: RawBuffer,
    /// Fields last derived from the buffer
    pub parsed: ParsedDocument,
    /// The assembled preview, replaced wholesale on every pipeline run
    pub preview: PreviewView,
    /// Fold regions over the buffer's sections
    pub folds: FoldState,
    /// Dirty tracking and action endpoints
    pub session: Session,
    /// Path to the source file
    pub file_path: PathBuf,
    /// Section the view was opened on, if any
    pub section: Option<SectionTarget>,
    /// Whether section focus has been applied to the current preview
    pub section_applied: bool,
    /// One-way editor → preview scroll mapping
    pub scroll_sync: ScrollSync,
    /// Viewport of the editor pane
    pub editor_viewport: Viewport,
    /// Viewport of the preview pane
    pub preview_viewport: Viewport,
    /// Which pane has keyboard focus
    pub focus: PaneFocus,
    /// Remote action awaiting execution by the event loop
    pub pending_action: Option<RemoteAction>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; second quit proceeds
    pub quit_confirmed: bool,
    /// Set after first delete request; second delete proceeds
    pub delete_confirmed: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("section", &self.section)
            .field("focus", &self.focus)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), "", (0, 0), None)
    }
}

impl Model {
    /// Create a new model from initial buffer text.
    pub fn new(
        file_path: PathBuf,
        text: &str,
        terminal_size: (u16, u16),
        section: Option<SectionTarget>,
    ) -> Self {
        let (width, height) = terminal_size;
        let pane_height = height.saturating_sub(1);
        let pane_width = width / 2;
        let buffer = RawBuffer::from_text(text);

        let mut model = Self {
            folds: FoldState::compute(text),
            buffer,
            parsed: ParsedDocument::default(),
            preview: PreviewView::default(),
            session: Session::default(),
            file_path,
            section,
            section_applied: false,
            // Free scrolling only exists in the full-document view
            scroll_sync: ScrollSync::new(section.is_none()),
            editor_viewport: Viewport::new(pane_width, pane_height, text.lines().count()),
            preview_viewport: Viewport::new(pane_width, pane_height, 0),
            focus: PaneFocus::Editor,
            pending_action: None,
            toast: None,
            should_quit: false,
            quit_confirmed: false,
            delete_confirmed: false,
        };
        model.refresh_preview();
        model
    }

    /// Run the parse → render pipeline against the current buffer.
    ///
    /// Replaces the parsed fields and the preview wholesale, then
    /// re-applies the post-render passes that do not survive a rebuild.
    pub fn refresh_preview(&mut self) {
        let text = self.buffer.text();
        self.parsed = document::parse(&text);
        let width = crate::ui::preview_content_width(
            self.editor_viewport.width() + self.preview_viewport.width(),
        );
        self.preview = preview::render(&self.parsed, width);
        self.preview_viewport.set_total_lines(self.preview.line_count());
        self.editor_viewport.set_total_lines(self.buffer.line_count());
        self.folds = FoldState::compute(&text);
        if self.section_applied {
            self.apply_section_focus();
        }
    }

    /// Fold the editor down to the target section and dim the rest of
    /// the preview.
    ///
    /// Does nothing when no section target is set or the ordinal has no
    /// match in the buffer.
    pub fn apply_section_focus(&mut self) {
        let Some(target) = self.section else {
            return;
        };
        let text = self.buffer.text();
        let Some(plan) = section::focus(target, &text) else {
            return;
        };

        self.folds.collapse_all();
        self.folds.unfold_at(plan.line);
        self.buffer.move_to(plan.line, 0);
        self.editor_viewport.scroll_into_view(plan.line);

        if let Some(preview_line) = self.preview.apply_section_focus(plan.ordinal) {
            self.preview_viewport
                .focus_line(preview_line, FOCUS_TOP_MARGIN);
        }
        self.section_applied = true;
    }

    /// Scroll metrics of the editor pane.
    pub fn editor_metrics(&self) -> PaneMetrics {
        PaneMetrics::new(
            self.editor_viewport.offset(),
            self.editor_viewport.total_lines(),
            usize::from(self.editor_viewport.height()),
        )
    }

    /// Scroll metrics of the preview pane.
    pub fn preview_metrics(&self) -> PaneMetrics {
        PaneMetrics::new(
            self.preview_viewport.offset(),
            self.preview_viewport.total_lines(),
            usize::from(self.preview_viewport.height()),
        )
    }

    /// Drive the preview viewport from the editor's scroll position.
    pub fn sync_preview_scroll(&mut self) {
        if let Some(offset) = self
            .scroll_sync
            .follow(self.editor_metrics(), self.preview_metrics())
        {
            self.preview_viewport.go_to_line(offset);
        }
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(3),
        });
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast.as_ref().map(|t| (t.message.as_str(), t.level))
    }

    /// Drop an expired toast. Returns `true` if one was dropped.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            true
        } else {
            false
        }
    }
}
