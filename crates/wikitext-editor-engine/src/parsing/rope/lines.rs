use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, newline included.
    pub text: String,
}

impl LineRef {
    /// Line text with any trailing `\r\n` / `\n` removed.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Byte span of [`LineRef::content`].
    pub fn content_span(&self) -> Span {
        Span {
            start: self.span.start,
            end: self.span.start + self.content().len(),
        }
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so that spans stay
/// contiguous over the whole rope.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Span of the line containing `offset`, newline excluded.
///
/// An offset sitting right after a newline belongs to the following line.
/// Offsets past the end are clamped to the end of the rope.
pub fn line_span_at(rope: &Rope, offset: usize) -> Span {
    let offset = offset.min(rope.len());
    let start = rope.offset_of_line(rope.line_of_offset(offset));
    let rest = rope.slice_to_cow(start..rope.len());
    let end = match rest.find('\n') {
        Some(newline) => start + newline,
        None => rope.len(),
    };
    Span { start, end }
}
