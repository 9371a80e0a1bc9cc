//! Field extraction from raw markdown.
//!
//! The raw buffer is the single source of truth; this module derives the
//! article fields from it. The derived value is replaced wholesale on
//! every pipeline run, never patched incrementally.

mod parser;

pub use parser::parse;

/// The structured fields derived from the raw buffer.
///
/// Every field degrades to the empty string when its source block is
/// absent; extraction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Text of the first top-level heading.
    pub title: String,
    /// Text of the first quoted block.
    pub punchline: String,
    /// Raw source of the second top-level paragraph block. The first
    /// paragraph is assumed to be introductory and skipped.
    pub description: String,
    /// Trimmed suffix of the raw text starting at the first literal `##`.
    pub content: String,
}

impl ParsedDocument {
    /// True when every derived field is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.punchline.is_empty()
            && self.description.is_empty()
            && self.content.is_empty()
    }
}
