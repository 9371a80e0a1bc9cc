use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, effects, input, update};
use crate::session::FileRemote;
use crate::sync::UpdateThrottle;

/// Delay before section focus is applied after startup, giving the
/// first render a chance to settle.
const SECTION_SETTLE_MS: u64 = 200;

/// One-shot timer for the section-focus settle delay.
pub(super) struct SettleTimer {
    delay_ms: u64,
    armed_at: Option<u64>,
}

impl SettleTimer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            armed_at: None,
        }
    }

    pub(super) const fn arm(&mut self, now_ms: u64) {
        self.armed_at = Some(now_ms);
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> bool {
        match self.armed_at {
            Some(armed) if now_ms.saturating_sub(armed) >= self.delay_ms => {
                self.armed_at = None;
                true
            }
            _ => false,
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.armed_at.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let text = if self.file_path.exists() {
            std::fs::read_to_string(&self.file_path)
                .with_context(|| format!("Failed to read {}", self.file_path.display()))?
        } else {
            // A fresh draft starts empty; the file appears on first save.
            String::new()
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — markpair requires an interactive terminal")?;
        execute!(stdout(), EnableMouseCapture)?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            &text,
            (size.width, size.height),
            self.section,
        );
        let mut remote = FileRemote::new(&self.file_path);

        let result = Self::event_loop(&mut terminal, &mut model, &mut remote, self.window_ms);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        remote: &mut FileRemote,
        window_ms: u64,
    ) -> Result<()> {
        let start = Instant::now();
        let mut throttle = UpdateThrottle::new(window_ms);
        let mut settle = SettleTimer::new(SECTION_SETTLE_MS);
        if model.section.is_some() {
            settle.arm(0);
        }
        let mut needs_render = true;

        loop {
            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if settle.take_ready(now_ms) {
                *model = update(std::mem::take(model), Message::ApplySectionFocus);
                needs_render = true;
            }

            // Trailing pipeline run for a coalesced burst of edits.
            if throttle.take_ready(now_ms) {
                *model = update(std::mem::take(model), Message::RefreshPreview);
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else if throttle.is_pending() || settle.is_pending() {
                25
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if let Some(msg) = input::handle_event(&event::read()?, model) {
                    let run_now = msg.is_buffer_change() && throttle.on_change(event_ms);
                    *model = update(std::mem::take(model), msg);
                    if run_now {
                        *model = update(std::mem::take(model), Message::RefreshPreview);
                    }
                    needs_render = true;
                }
            }

            // Remote actions must see fields derived from the latest
            // buffer, so an owed trailing run is flushed first.
            if model.pending_action.is_some() {
                if throttle.flush() {
                    *model = update(std::mem::take(model), Message::RefreshPreview);
                }
                effects::run_pending(model, remote);
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
