use std::ops::Range;

use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::Document;

/// Primitive text edits the formatting engine compiles its work into.
///
/// Every buffer mutation flows through one of these so that the document
/// version and selection stay in step with the rope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
}

/// Compile a command into a delta over the current buffer.
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Delta<RopeInfo> {
    let mut builder = Builder::new(doc.len());
    match cmd {
        Cmd::InsertText { at, text } => {
            let at = doc.floor_char_boundary(*at);
            builder.replace(at..at, Rope::from(text.as_str()));
        }
        Cmd::DeleteRange { range } => {
            builder.delete(doc.clamp_range(range.clone()));
        }
        Cmd::ReplaceRange { range, text } => {
            builder.replace(doc.clamp_range(range.clone()), Rope::from(text.as_str()));
        }
    }
    builder.build()
}

/// Transform a selection through the command being applied.
pub(crate) fn transform_selection_for_command(range: &Range<usize>, cmd: &Cmd) -> Range<usize> {
    match cmd {
        Cmd::InsertText { at, text } => {
            let text_len = text.len();
            if *at <= range.start {
                (range.start + text_len)..(range.end + text_len)
            } else if *at < range.end {
                // Insertion inside the selection grows it
                range.start..(range.end + text_len)
            } else {
                range.clone()
            }
        }
        Cmd::DeleteRange { range: del_range } => {
            let del_len = del_range.len();
            if del_range.end <= range.start {
                (range.start - del_len)..(range.end - del_len)
            } else if del_range.start >= range.end {
                range.clone()
            } else {
                // Overlap collapses to the deletion point
                let collapse_point = del_range.start;
                collapse_point..collapse_point
            }
        }
        Cmd::ReplaceRange {
            range: replace_range,
            text,
        } => {
            let del_len = replace_range.len();
            let insert_len = text.len();

            if replace_range.end <= range.start {
                let net_change = insert_len as isize - del_len as isize;
                let shift = |offset: usize| offset.saturating_add_signed(net_change);
                shift(range.start)..shift(range.end)
            } else if replace_range.start >= range.end {
                range.clone()
            } else {
                // Overlap selects the replacement text
                replace_range.start..(replace_range.start + insert_len)
            }
        }
    }
}
