use std::ops::Range;

use log::debug;

use super::action::{FormatAction, HeadingLevel, ListMarker};
use super::attribute::{Attribute, AttributeLookup, selection_has};
use super::delimiters::{insert_pair, remove_pair};
use super::error::FormatError;
use super::expand::expand;
use super::lists;
use super::pair::DelimiterPair;
use super::state::FormattingState;
use crate::editing::Document;
use crate::parsing::rope::preview;

/// Result of one [`apply`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// True when the buffer was edited.
    pub applied: bool,
    /// Why nothing happened, when the action was skipped.
    pub skipped: Option<FormatError>,
    pub selection: Range<usize>,
    pub version: u64,
    /// Formatting state after the edit, filled in by hosts that re-highlight.
    pub state: Option<FormattingState>,
}

/// Apply a toolbar action to the document's current selection.
///
/// Paired styles toggle: an active style is stripped from the enclosing
/// delimiters, an inactive one is wrapped around the selection. Failures
/// never propagate; they leave the buffer untouched and come back as
/// [`Outcome::skipped`].
pub fn apply(doc: &mut Document, lookup: &impl AttributeLookup, action: FormatAction) -> Outcome {
    let version_before = doc.version();

    let result = match action {
        FormatAction::Heading(level) => set_heading(doc, lookup, level),
        FormatAction::List(marker) => toggle_list(doc, lookup, marker),
        FormatAction::Indent => {
            require_list(doc, lookup).and_then(|()| lists::indent(doc).map(drop))
        }
        FormatAction::Unindent => {
            require_list(doc, lookup).and_then(|()| lists::unindent(doc).map(drop))
        }
        paired => match paired.pair() {
            Some(pair) => toggle_pair(doc, lookup, pair),
            None => Ok(()),
        },
    };

    if let Err(err) = &result {
        let line = doc.line_span_at(doc.selection().start);
        debug!(
            "{action} skipped: {err} (line {:?})",
            preview(doc.rope(), line, 40)
        );
    }

    Outcome {
        applied: doc.version() != version_before,
        skipped: result.err(),
        selection: doc.selection(),
        version: doc.version(),
        state: None,
    }
}

/// The single active heading level, checked from H2 down to H6.
pub fn current_heading(doc: &Document, lookup: &impl AttributeLookup) -> Option<HeadingLevel> {
    HeadingLevel::ALL
        .into_iter()
        .find(|level| selection_has(doc, lookup, level.attribute()))
}

fn toggle_pair(
    doc: &mut Document,
    lookup: &impl AttributeLookup,
    pair: DelimiterPair,
) -> Result<(), FormatError> {
    if selection_has(doc, lookup, pair.attribute) {
        match expand(doc, doc.selection(), &pair) {
            Ok(expansion) => return remove_pair(doc, &expansion, &pair).map(drop),
            Err(FormatError::ExpansionNotFound) => {
                debug!("{:?} active but no enclosing pair, inserting", pair.attribute);
            }
            Err(err) => return Err(err),
        }
    }
    insert_pair(doc, &pair);
    Ok(())
}

// A different level is stripped before the new one goes in, so the line
// never carries two sets of `=` runs
fn set_heading(
    doc: &mut Document,
    lookup: &impl AttributeLookup,
    level: HeadingLevel,
) -> Result<(), FormatError> {
    let current = current_heading(doc, lookup);
    if current == Some(level) {
        return Ok(());
    }

    if let Some(current) = current {
        let old = DelimiterPair::heading(current);
        let expansion = expand(doc, doc.selection(), &old)?;
        remove_pair(doc, &expansion, &old)?;
    }

    insert_pair(doc, &DelimiterPair::heading(level));
    Ok(())
}

fn toggle_list(
    doc: &mut Document,
    lookup: &impl AttributeLookup,
    marker: ListMarker,
) -> Result<(), FormatError> {
    if selection_has(doc, lookup, marker.attribute()) {
        lists::remove_markers(doc, marker)?;
    } else {
        lists::prepend_marker(doc, marker);
    }
    Ok(())
}

fn require_list(doc: &Document, lookup: &impl AttributeLookup) -> Result<(), FormatError> {
    let on_list = selection_has(doc, lookup, Attribute::ListBullet)
        || selection_has(doc, lookup, Attribute::ListNumber);
    if on_list {
        Ok(())
    } else {
        Err(FormatError::NotAListItem)
    }
}
