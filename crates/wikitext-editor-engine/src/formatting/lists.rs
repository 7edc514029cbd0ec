//! Line-start list markers: `*` for bullets, `#` for numbered items.
//!
//! All edits target the line holding the selection start. Nesting depth is
//! the length of the marker run, so `**item` is a second-level bullet.

use std::ops::Range;

use log::debug;

use super::action::ListMarker;
use super::error::FormatError;
use crate::editing::{Cmd, Document};
use crate::parsing::rope::Span;

/// The marker run opening the selection's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRun {
    pub marker: ListMarker,
    pub span: Span,
}

/// Find the run of `marker` at the start of the selection's line.
pub fn marker_run(doc: &Document, marker: ListMarker) -> Option<MarkerRun> {
    let line = doc.line_span_at(doc.selection().start);
    let text = doc.slice_to_cow(line.range());
    let count = text.chars().take_while(|c| *c == marker.char()).count();
    (count > 0).then(|| MarkerRun {
        marker,
        span: Span::new(line.start, line.start + count),
    })
}

/// The run opening the selection's line, whichever marker it uses.
pub fn leading_run(doc: &Document) -> Option<MarkerRun> {
    let line = doc.line_span_at(doc.selection().start);
    let first = doc.slice_to_cow(line.range()).chars().next()?;
    ListMarker::from_char(first).and_then(|marker| marker_run(doc, marker))
}

/// Delete the whole run of `marker` at the start of the selection's line.
pub fn remove_markers(doc: &mut Document, marker: ListMarker) -> Result<Range<usize>, FormatError> {
    let run = marker_run(doc, marker).ok_or(FormatError::NotAListItem)?;
    Ok(delete_run(doc, run.span))
}

/// Prepend a single `marker` to the selection's line.
pub fn prepend_marker(doc: &mut Document, marker: ListMarker) -> Range<usize> {
    let line = doc.line_span_at(doc.selection().start);
    let selection = doc.selection();
    let shifted = shift_past(selection.start, line.start)..shift_past(selection.end, line.start);

    doc.apply(Cmd::InsertText {
        at: line.start,
        text: marker.char().to_string(),
    });
    doc.set_selection(shifted);
    debug!("prepended {:?} marker at {}", marker, line.start);
    doc.selection()
}

/// Nest the current list item one level deeper.
pub fn indent(doc: &mut Document) -> Result<Range<usize>, FormatError> {
    let run = leading_run(doc).ok_or(FormatError::NotAListItem)?;
    Ok(prepend_marker(doc, run.marker))
}

/// Lift the current list item one level, keeping at least one marker.
pub fn unindent(doc: &mut Document) -> Result<Range<usize>, FormatError> {
    let run = leading_run(doc).ok_or(FormatError::NotAListItem)?;
    if run.span.len() < 2 {
        return Err(FormatError::NothingToUnindent);
    }
    Ok(delete_run(doc, Span::new(run.span.start, run.span.start + 1)))
}

fn delete_run(doc: &mut Document, run: Span) -> Range<usize> {
    let selection = doc.selection();
    let collapsed = collapse(selection.start, run)..collapse(selection.end, run);

    doc.apply(Cmd::DeleteRange { range: run.range() });
    doc.set_selection(collapsed);
    debug!("removed {} list marker(s) at {}", run.len(), run.start);
    doc.selection()
}

// Endpoints inside a removed run land on the line start
fn collapse(offset: usize, run: Span) -> usize {
    if offset <= run.start {
        offset
    } else if offset < run.end {
        run.start
    } else {
        offset - run.len()
    }
}

fn shift_past(offset: usize, inserted_at: usize) -> usize {
    if offset >= inserted_at {
        offset + 1
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn doc_with(text: &str, selection: Range<usize>) -> Document {
        let mut doc = Document::from(text);
        doc.set_selection(selection);
        doc
    }

    #[test]
    fn removes_whole_bullet_run() {
        let mut doc = doc_with("***item", 5..5);
        let selection = remove_markers(&mut doc, ListMarker::Bullet).unwrap();

        assert_eq!(doc.text(), "item");
        assert_eq!(selection, 2..2);
    }

    #[test]
    fn removal_only_touches_selection_line() {
        let mut doc = doc_with("*one\n##two\n*three", 8..9);
        remove_markers(&mut doc, ListMarker::Number).unwrap();

        assert_eq!(doc.text(), "*one\ntwo\n*three");
        assert_eq!(doc.selection(), 6..7);
    }

    #[rstest]
    #[case(1..1, 0..0)]
    #[case(0..6, 0..3)]
    #[case(2..5, 0..2)]
    fn endpoints_inside_run_collapse_to_line_start(
        #[case] selection: Range<usize>,
        #[case] expected: Range<usize>,
    ) {
        let mut doc = doc_with("###abc", selection);
        remove_markers(&mut doc, ListMarker::Number).unwrap();
        assert_eq!(doc.selection(), expected);
    }

    #[test]
    fn removal_without_markers_is_rejected() {
        let mut doc = doc_with("plain", 2..2);
        assert_eq!(
            remove_markers(&mut doc, ListMarker::Bullet),
            Err(FormatError::NotAListItem)
        );
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn prepend_shifts_selection_by_one() {
        let mut doc = doc_with("first\nsecond", 8..10);
        let selection = prepend_marker(&mut doc, ListMarker::Bullet);

        assert_eq!(doc.text(), "first\n*second");
        assert_eq!(selection, 9..11);
    }

    #[test]
    fn indent_repeats_the_line_marker() {
        let mut doc = doc_with("#step", 3..3);
        indent(&mut doc).unwrap();

        assert_eq!(doc.text(), "##step");
        assert_eq!(doc.selection(), 4..4);
    }

    #[test]
    fn unindent_removes_one_marker() {
        let mut doc = doc_with("**nested", 4..4);
        unindent(&mut doc).unwrap();

        assert_eq!(doc.text(), "*nested");
        assert_eq!(doc.selection(), 3..3);
    }

    #[test]
    fn unindent_keeps_last_marker() {
        let mut doc = doc_with("*top", 2..2);
        assert_eq!(unindent(&mut doc), Err(FormatError::NothingToUnindent));
        assert_eq!(doc.text(), "*top");
    }

    #[test]
    fn indent_outside_list_is_rejected() {
        let mut doc = doc_with("text", 1..1);
        assert_eq!(indent(&mut doc), Err(FormatError::NotAListItem));
    }
}
