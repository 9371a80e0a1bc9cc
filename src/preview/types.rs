//! View-side types for the preview pane.

use std::ops::Range;

/// Inline style flags for a text span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub emphasis: bool,
    pub strong: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: bool,
}

/// A styled inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    text: String,
    style: InlineStyle,
}

impl InlineSpan {
    pub const fn new(text: String, style: InlineStyle) -> Self {
        Self { text, style }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn style(&self) -> InlineStyle {
        self.style
    }
}

/// Type of a preview line, used for styling and section focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Normal paragraph text
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    /// The article punchline, shown as a subtitle
    Punchline,
    /// Block quote line
    BlockQuote,
    /// Code block line
    CodeBlock,
    /// List item with nesting level
    ListItem(usize),
    /// Horizontal rule
    HorizontalRule,
    /// Empty line
    Empty,
}

/// A clickable "add this field" affordance shown when a field is empty.
///
/// Activating one inserts a starter snippet into the raw buffer at a
/// fixed row. The description field deliberately has no placeholder:
/// an empty description renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Punchline,
    Content,
}

impl Placeholder {
    /// The prompt shown in place of the missing field.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Title => "Click to add a title",
            Self::Punchline => "Click to add a punchline",
            Self::Content => "Click to add content",
        }
    }

    /// Buffer row the starter snippet is inserted at.
    pub const fn insert_row(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Punchline => 2,
            Self::Content => 6,
        }
    }

    /// Starter snippet for the missing field.
    pub const fn snippet(self) -> &'static str {
        match self {
            Self::Title => "# This is the title\n\n",
            Self::Punchline => "> This is a punchline\n\n",
            Self::Content => {
                "## A new section\n\n- [Link title](http://example.com) is an example of a link\n\n"
            }
        }
    }
}

/// A single preview line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    content: String,
    line_type: LineType,
    spans: Vec<InlineSpan>,
    placeholder: Option<Placeholder>,
    inactive: bool,
}

impl PreviewLine {
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self {
            content,
            line_type,
            spans: Vec::new(),
            placeholder: None,
            inactive: false,
        }
    }

    pub const fn with_spans(content: String, line_type: LineType, spans: Vec<InlineSpan>) -> Self {
        Self {
            content,
            line_type,
            spans,
            placeholder: None,
            inactive: false,
        }
    }

    /// A synthetic link line standing in for an empty field.
    pub fn placeholder(slot: Placeholder, line_type: LineType) -> Self {
        let style = InlineStyle {
            link: true,
            ..InlineStyle::default()
        };
        Self {
            content: slot.prompt().to_string(),
            line_type,
            spans: vec![InlineSpan::new(slot.prompt().to_string(), style)],
            placeholder: Some(slot),
            inactive: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn line_type(&self) -> LineType {
        self.line_type
    }

    pub fn spans(&self) -> Option<&[InlineSpan]> {
        if self.spans.is_empty() {
            None
        } else {
            Some(&self.spans)
        }
    }

    pub const fn placeholder_slot(&self) -> Option<Placeholder> {
        self.placeholder
    }

    pub const fn is_inactive(&self) -> bool {
        self.inactive
    }

    pub(super) const fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// Where a hyperlink opens when activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Follow within the current view.
    #[default]
    SameContext,
    /// Open in an external browsing context.
    NewContext,
}

/// A hyperlink discovered in the rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    /// Link text
    pub text: String,
    /// Link URL
    pub url: String,
    /// Line index in the assembled preview
    pub line: usize,
    /// How the link opens
    pub disposition: LinkDisposition,
}

/// The assembled preview state.
///
/// Rebuilt wholesale on every pipeline run: post-render passes such as
/// link retargeting and section focus must therefore be re-applied after
/// each render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewView {
    pub(super) lines: Vec<PreviewLine>,
    pub(super) links: Vec<LinkRef>,
    /// Line range of the rendered description block.
    pub(super) description_range: Range<usize>,
    /// Index of the first content line.
    pub(super) content_start: usize,
}

impl PreviewView {
    pub fn lines(&self) -> &[PreviewLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn links(&self) -> &[LinkRef] {
        &self.links
    }

    pub fn description_lines(&self) -> &[PreviewLine] {
        &self.lines[self.description_range.clone()]
    }

    /// The placeholder at a preview line, if that line is one.
    pub fn placeholder_at(&self, line: usize) -> Option<Placeholder> {
        self.lines.get(line).and_then(PreviewLine::placeholder_slot)
    }

    /// The link at a preview line, if any.
    pub fn link_at(&self, line: usize) -> Option<&LinkRef> {
        self.links.iter().find(|link| link.line == line)
    }

    /// Dim everything but the target section.
    ///
    /// Marks every heading, every list item, and the description block
    /// inactive, then reactivates the `ordinal`-th (1-based) level-2
    /// heading of the content and the block immediately following it.
    /// Returns the line index of the target heading, or `None` without
    /// touching the view when the ordinal has no match.
    pub fn apply_section_focus(&mut self, ordinal: usize) -> Option<usize> {
        let target = self.nth_content_heading(ordinal)?;

        for (idx, line) in self.lines.iter_mut().enumerate() {
            let dim = match line.line_type() {
                LineType::Heading(_) | LineType::Punchline | LineType::ListItem(_) => true,
                _ => self.description_range.contains(&idx),
            };
            line.set_inactive(dim);
        }

        self.lines[target].set_inactive(false);
        for line in self.block_after(target) {
            line.set_inactive(false);
        }
        Some(target)
    }

    /// Line index of the `ordinal`-th (1-based) level-2 heading in the
    /// content area.
    fn nth_content_heading(&self, ordinal: usize) -> Option<usize> {
        if ordinal == 0 {
            return None;
        }
        self.lines
            .iter()
            .enumerate()
            .skip(self.content_start)
            .filter(|(_, line)| matches!(line.line_type(), LineType::Heading(2)))
            .nth(ordinal - 1)
            .map(|(idx, _)| idx)
    }

    /// The contiguous non-empty run of lines forming the block right
    /// after `heading`.
    fn block_after(&mut self, heading: usize) -> impl Iterator<Item = &mut PreviewLine> {
        let mut start = heading + 1;
        while self
            .lines
            .get(start)
            .is_some_and(|line| line.line_type() == LineType::Empty)
        {
            start += 1;
        }
        let mut end = start;
        while self
            .lines
            .get(end)
            .is_some_and(|line| line.line_type() != LineType::Empty)
        {
            end += 1;
        }
        self.lines[start..end].iter_mut()
    }
}
