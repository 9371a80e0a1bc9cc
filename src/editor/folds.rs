//! Fold state for the editor pane.
//!
//! Each `## ` section heading starts a foldable region that runs to the
//! line before the next section heading (or the end of the buffer).
//! Collapsing a region hides every line after its heading; the heading
//! line itself always stays visible.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FoldRegion {
    lines: Range<usize>,
    collapsed: bool,
}

/// Foldable regions of the raw buffer, recomputed whenever the buffer
/// text is re-parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldState {
    regions: Vec<FoldRegion>,
}

impl FoldState {
    /// Compute fold regions from buffer text.
    pub fn compute(text: &str) -> Self {
        let starts: Vec<usize> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| line.starts_with("## "))
            .map(|(idx, _)| idx)
            .collect();
        let total = text.lines().count();

        let regions = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| FoldRegion {
                lines: start..starts.get(i + 1).copied().unwrap_or(total),
                collapsed: false,
            })
            .collect();
        Self { regions }
    }

    /// Number of foldable regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Collapse every region.
    pub fn collapse_all(&mut self) {
        for region in &mut self.regions {
            region.collapsed = true;
        }
    }

    /// Expand the region whose heading sits at `line`, if any.
    pub fn unfold_at(&mut self, line: usize) {
        if let Some(region) = self
            .regions
            .iter_mut()
            .find(|region| region.lines.contains(&line))
        {
            region.collapsed = false;
        }
    }

    /// Whether a buffer line is hidden by a collapsed region.
    pub fn is_hidden(&self, line: usize) -> bool {
        self.regions
            .iter()
            .any(|region| region.collapsed && region.lines.contains(&line) && region.lines.start != line)
    }

    /// Whether the region starting at `line` is collapsed.
    pub fn is_collapsed_at(&self, line: usize) -> bool {
        self.regions
            .iter()
            .any(|region| region.collapsed && region.lines.start == line)
    }

    /// Buffer line indices visible under the current fold state.
    pub fn visible_lines(&self, total: usize) -> Vec<usize> {
        (0..total).filter(|&line| !self.is_hidden(line)).collect()
    }
}
