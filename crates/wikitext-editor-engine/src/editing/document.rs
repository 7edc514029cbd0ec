use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use xi_rope::tree::Cursor;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::{Cmd, Patch};
use crate::parsing::rope::{Span, line_span_at};

/// Text buffer and selection owned by the host editor.
///
/// The document is the single source of truth for one editing session:
///
/// - **Lossless storage**: the wikitext lives in one `xi_rope::Rope`, and
///   `to_bytes()` returns exactly what was loaded plus the applied edits.
/// - **Command-based edits**: every mutation is a [`Cmd`] compiled to an
///   xi-rope `Delta`, so selection tracking and versioning happen in one place.
/// - **Byte offsets**: the selection is a half-open byte range on codepoint
///   boundaries, `0 <= start <= end <= len`.
///
/// ```rust
/// # use wikitext_editor_engine::editing::{Cmd, Document};
/// let mut doc = Document::from_bytes(b"a b c").unwrap();
/// doc.set_selection(2..3);
///
/// let patch = doc.apply(Cmd::ReplaceRange { range: 2..3, text: "'''b'''".to_string() });
///
/// assert_eq!(doc.text(), "a '''b''' c");
/// assert_eq!(patch.version, 1);
/// ```
#[derive(Clone)]
pub struct Document {
    /// xi-rope buffer containing the entire page as UTF-8.
    pub(crate) buffer: Rope,
    /// Current selection/cursor as byte offsets into `buffer`.
    pub(crate) selection: Range<usize>,
    /// Incremented on each applied command.
    pub(crate) version: u64,
}

impl Document {
    /// Create a new document from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from(text))
    }

    /// Get the document's content as raw bytes (exact round-trip).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Apply a command, returning the resulting selection and version.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let delta = self.compile_command(&cmd);

        self.buffer = delta.apply(&self.buffer);

        let new_selection = self.transform_selection_for_command(&self.selection, &cmd);
        self.selection = self.clamp_range(new_selection);
        self.version += 1;

        Patch {
            new_selection: self.selection.clone(),
            version: self.version,
        }
    }

    /// Get the current selection range.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range.
    ///
    /// Inverted ranges are normalised, offsets past the end are clamped and
    /// offsets inside a multi-byte character move back to its first byte, so
    /// the stored selection always lies on codepoint boundaries.
    pub fn set_selection(&mut self, selection: Range<usize>) {
        let (start, end) = if selection.start <= selection.end {
            (selection.start, selection.end)
        } else {
            (selection.end, selection.start)
        };
        self.selection = self.clamp_range(start..end);
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the current text content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Slice the buffer to a cow string, clamping the range to the buffer.
    pub fn slice_to_cow(&self, range: Range<usize>) -> Cow<'_, str> {
        self.buffer.slice_to_cow(self.clamp_range(range))
    }

    /// Span of the line holding `offset`, newline excluded.
    pub fn line_span_at(&self, offset: usize) -> Span {
        line_span_at(&self.buffer, offset)
    }

    /// Offset of the character before `offset`, or `None` at the start.
    pub fn prev_char_offset(&self, offset: usize) -> Option<usize> {
        if offset == 0 || offset > self.len() {
            return None;
        }
        self.buffer.prev_codepoint_offset(offset)
    }

    /// Offset just past the character at `offset`, or `None` at the end.
    pub fn next_char_offset(&self, offset: usize) -> Option<usize> {
        if offset >= self.len() {
            return None;
        }
        self.buffer.next_codepoint_offset(offset)
    }

    /// Nearest codepoint boundary at or before `offset`, within the buffer.
    pub fn floor_char_boundary(&self, offset: usize) -> usize {
        let mut at = offset.min(self.len());
        while at > 0 && !self.is_char_boundary(at) {
            at -= 1;
        }
        at
    }

    fn is_char_boundary(&self, offset: usize) -> bool {
        // Leaves always split on codepoint boundaries
        Cursor::new(&self.buffer, offset)
            .get_leaf()
            .is_none_or(|(leaf, pos)| leaf.is_char_boundary(pos))
    }

    pub(crate) fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self.floor_char_boundary(range.start);
        let end = self.floor_char_boundary(range.end).max(start);
        start..end
    }

    pub(crate) fn compile_command(&self, cmd: &Cmd) -> Delta<RopeInfo> {
        crate::editing::commands::compile_command(self, cmd)
    }

    pub(crate) fn transform_selection_for_command(
        &self,
        range: &Range<usize>,
        cmd: &Cmd,
    ) -> Range<usize> {
        crate::editing::commands::transform_selection_for_command(range, cmd)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len, // Start with cursor at end
            version: 0,
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.buffer.to_string())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .finish()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.buffer.to_string() == other.buffer.to_string()
            && self.selection == other.selection
            && self.version == other.version
    }
}
