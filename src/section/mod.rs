//! Deep-linked section focus.
//!
//! A view can be opened on one specific section: the target is a
//! 1-based ordinal over the level-2 headings of the raw buffer, parsed
//! once at startup and immutable afterwards. Focusing folds the editor
//! down to that section and dims everything else in the preview.

/// Rows kept above the focused heading when scrolling the preview,
/// so the heading sits a fixed offset below the viewport top.
pub const FOCUS_TOP_MARGIN: usize = 3;

/// An ordinal reference to the Nth level-2 heading, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTarget(usize);

impl SectionTarget {
    /// Parse the optional `section` startup parameter.
    ///
    /// Absent, non-numeric, or non-positive values mean no section
    /// focus: the full free-scroll dual-pane mode.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let ordinal: usize = raw?.trim().parse().ok()?;
        if ordinal == 0 {
            return None;
        }
        Some(Self(ordinal))
    }

    pub const fn ordinal(self) -> usize {
        self.0
    }
}

/// The resolved focus action: where the target section starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPlan {
    /// 0-based buffer line of the target section heading.
    pub line: usize,
    /// The 1-based ordinal it resolved from.
    pub ordinal: usize,
}

/// Resolve a section target against the raw buffer.
///
/// Walks the buffer line by line counting section headings. Returns
/// `None` when the ordinal exceeds the number of sections present; the
/// caller takes no fold or scroll action in that case.
pub fn focus(target: SectionTarget, raw: &str) -> Option<FocusPlan> {
    section_line(raw, target.ordinal()).map(|line| FocusPlan {
        line,
        ordinal: target.ordinal(),
    })
}

/// 0-based line index of the `ordinal`-th (1-based) level-2 heading.
pub fn section_line(raw: &str, ordinal: usize) -> Option<usize> {
    if ordinal == 0 {
        return None;
    }
    raw.lines()
        .enumerate()
        .filter(|(_, line)| line.starts_with("## "))
        .nth(ordinal - 1)
        .map(|(idx, _)| idx)
}
