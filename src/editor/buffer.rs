//! The raw text buffer, the single source of truth for the session.

use ropey::Rope;

/// Cursor position in the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in characters.
    pub col: usize,
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope.
///
/// The buffer has exactly one writer (user input routed through the
/// update function); everything else reads. Dirty tracking lives in the
/// session, not here; the buffer only knows its text and cursor.
#[derive(Debug, Clone)]
pub struct RawBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl RawBuffer {
    /// Create a buffer from initial text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
        }
    }

    /// The full text content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line, without its trailing newline.
    pub fn line_at(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line).to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in characters, without its trailing newline.
    pub fn line_len(&self, line: usize) -> usize {
        self.line_at(line).map_or(0, |s| s.chars().count())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let idx = self.char_idx(self.cursor.line, self.cursor.col);
        self.rope.insert_char(idx, ch);
        self.cursor.col += 1;
    }

    /// Split the current line at the cursor (Enter).
    pub fn split_line(&mut self) {
        let idx = self.char_idx(self.cursor.line, self.cursor.col);
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.col = 0;
    }

    /// Insert `text` at the start of `row`, clamped to the last line.
    ///
    /// Used by the preview placeholders, which target a fixed row for
    /// each missing field. The cursor is left where it was.
    pub fn insert_at_row(&mut self, row: usize, text: &str) {
        let row = row.min(self.rope.len_lines().saturating_sub(1));
        let idx = self.rope.line_to_char(row);
        self.rope.insert(idx, text);
        if self.cursor.line >= row {
            self.cursor.line += text.matches('\n').count();
        }
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        let idx = self.char_idx(self.cursor.line, self.cursor.col);
        if idx == 0 {
            return false;
        }
        if self.cursor.col == 0 {
            let prev_len = self.line_len(self.cursor.line - 1);
            self.rope.remove(idx - 1..idx);
            self.cursor.line -= 1;
            self.cursor.col = prev_len;
        } else {
            self.rope.remove(idx - 1..idx);
            self.cursor.col -= 1;
        }
        true
    }

    /// Delete the character at the cursor (Delete).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.char_idx(self.cursor.line, self.cursor.col);
        if idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(idx..=idx);
        true
    }

    /// Move the cursor one step in `dir`, clamping at buffer edges.
    pub fn move_cursor(&mut self, dir: Direction) {
        match dir {
            Direction::Up => {
                self.cursor.line = self.cursor.line.saturating_sub(1);
                self.clamp_col();
            }
            Direction::Down => {
                self.cursor.line = (self.cursor.line + 1).min(self.line_count().saturating_sub(1));
                self.clamp_col();
            }
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.col = self.line_len(self.cursor.line);
                }
            }
            Direction::Right => {
                if self.cursor.col < self.line_len(self.cursor.line) {
                    self.cursor.col += 1;
                } else if self.cursor.line + 1 < self.line_count() {
                    self.cursor.line += 1;
                    self.cursor.col = 0;
                }
            }
        }
    }

    /// Move the cursor to the start of the current line.
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move the cursor to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Move the cursor to an absolute position, clamped to the buffer.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.cursor.line = line.min(self.line_count().saturating_sub(1));
        self.cursor.col = col.min(self.line_len(self.cursor.line));
    }

    fn clamp_col(&mut self) {
        self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
    }

    fn char_idx(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(line) + col.min(self.line_len(line))
    }
}
