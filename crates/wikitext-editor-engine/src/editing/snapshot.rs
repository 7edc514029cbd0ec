use std::ops::Range;

use serde::Serialize;

use crate::formatting::FormattingState;

/// Immutable view of a session for hosts to render.
///
/// Hosts read text, selection and toolbar state from here and never touch
/// the rope directly. `version` lets them skip redraws when nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub version: u64,
    pub text: String,
    pub selection: Range<usize>,
    pub state: FormattingState,
}

impl Snapshot {
    /// The text with the selection drawn in, see [`mark_selection`].
    pub fn marked(&self) -> String {
        mark_selection(&self.text, self.selection.clone())
    }
}

/// Draw a selection into `text`: `[` and `]` around a range, `|` for a cursor.
///
/// Offsets that are out of range or off a character boundary are clamped
/// back to the nearest valid position.
pub fn mark_selection(text: &str, selection: Range<usize>) -> String {
    let start = floor_char_boundary(text, selection.start);
    let end = floor_char_boundary(text, selection.end).max(start);

    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(&text[..start]);
    if start == end {
        out.push('|');
    } else {
        out.push('[');
        out.push_str(&text[start..end]);
        out.push(']');
    }
    out.push_str(&text[end..]);
    out
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a b c", 2..3, "a [b] c")]
    #[case("''''''", 3..3, "'''|'''")]
    #[case("", 0..0, "|")]
    #[case("abc", 1..40, "a[bc]")]
    #[case("äb", 1..1, "|äb")]
    fn marks_selection(#[case] text: &str, #[case] selection: Range<usize>, #[case] expected: &str) {
        assert_eq!(mark_selection(text, selection), expected);
    }
}
