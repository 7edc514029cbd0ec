//! Character-wise position arithmetic over a [`Document`].
//!
//! Offsets are bytes but steps are characters, so every move goes through
//! the rope's codepoint navigation.

use crate::editing::Document;

/// Move `position` by `chars` characters, backwards when negative.
///
/// Returns `None` if the walk would leave the buffer.
pub fn try_shift(doc: &Document, position: usize, chars: isize) -> Option<usize> {
    if position > doc.len() {
        return None;
    }
    let mut at = position;
    for _ in 0..chars.unsigned_abs() {
        at = if chars < 0 {
            doc.prev_char_offset(at)?
        } else {
            doc.next_char_offset(at)?
        };
    }
    Some(at)
}

/// True when the text ending at `position` is exactly `token`.
pub fn preceded_by(doc: &Document, position: usize, token: &str) -> bool {
    let Some(from) = try_shift(doc, position, -char_count(token)) else {
        return false;
    };
    doc.slice_to_cow(from..position) == token
}

/// True when the text starting at `position` is exactly `token`.
pub fn followed_by(doc: &Document, position: usize, token: &str) -> bool {
    let Some(to) = try_shift(doc, position, char_count(token)) else {
        return false;
    };
    doc.slice_to_cow(position..to) == token
}

fn char_count(token: &str) -> isize {
    token.chars().count() as isize
}
