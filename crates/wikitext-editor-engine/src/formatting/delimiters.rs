use std::ops::Range;

use log::debug;

use super::error::FormatError;
use super::expand::Expansion;
use super::pair::DelimiterPair;
use super::position::{followed_by, preceded_by};
use crate::editing::{Cmd, Document};

/// Wrap the current selection (or cursor) in `pair`.
///
/// With a cursor the pair goes in empty and the cursor lands between the
/// two tokens. With a selection the same text stays selected inside the
/// new delimiters.
pub fn insert_pair(doc: &mut Document, pair: &DelimiterPair) -> Range<usize> {
    let selection = doc.selection();
    let new_selection = (selection.start + pair.start.len())..(selection.end + pair.start.len());

    if selection.is_empty() {
        doc.apply(Cmd::InsertText {
            at: selection.start,
            text: pair.wrap(""),
        });
    } else {
        let selected = doc.slice_to_cow(selection.clone()).into_owned();
        doc.apply(Cmd::ReplaceRange {
            range: selection,
            text: pair.wrap(&selected),
        });
    }

    doc.set_selection(new_selection);
    debug!("inserted {:?} pair, selection {:?}", pair.attribute, doc.selection());
    doc.selection()
}

/// Strip the delimiters found by [`expand`](super::expand) and select the
/// text they enclosed.
///
/// Both tokens are checked before anything is deleted, so a stale
/// expansion leaves the buffer untouched.
pub fn remove_pair(
    doc: &mut Document,
    expansion: &Expansion,
    pair: &DelimiterPair,
) -> Result<Range<usize>, FormatError> {
    let Expansion { inner, outer } = expansion;
    if !preceded_by(doc, inner.start, pair.start) || !followed_by(doc, inner.end, pair.end) {
        return Err(FormatError::ExpansionNotFound);
    }

    let shift = pair.start.len();
    let new_start = inner
        .start
        .checked_sub(shift)
        .ok_or(FormatError::BoundaryUnavailable)?;
    let new_end = inner
        .end
        .checked_sub(shift)
        .ok_or(FormatError::BoundaryUnavailable)?;

    // Trailing token first so the leading range is still valid
    doc.apply(Cmd::DeleteRange {
        range: inner.end..outer.end,
    });
    doc.apply(Cmd::DeleteRange {
        range: outer.start..inner.start,
    });

    doc.set_selection(new_start..new_end);
    debug!("removed {:?} pair, selection {:?}", pair.attribute, doc.selection());
    Ok(doc.selection())
}
