use std::ops::Range;

use log::debug;

use crate::editing::{Document, Snapshot};
use crate::formatting::{self, AttributeSpans, FormatAction, FormattingState, Outcome};
use crate::parsing::highlight;

/// A document paired with up-to-date highlighter output.
///
/// This is the loop a host editor runs: apply an action, re-highlight the
/// changed buffer, re-query the toolbar state. Hosts that bring their own
/// highlighter call [`formatting::apply`] directly instead.
#[derive(Debug, Clone)]
pub struct EditorSession {
    document: Document,
    attributes: AttributeSpans,
}

impl EditorSession {
    pub fn new(document: Document) -> Self {
        let attributes = highlight(document.rope());
        Self {
            document,
            attributes,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn attributes(&self) -> &AttributeSpans {
        &self.attributes
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Move the selection and report the toolbar state there.
    pub fn set_selection(&mut self, selection: Range<usize>) -> FormattingState {
        self.document.set_selection(selection);
        self.state()
    }

    pub fn state(&self) -> FormattingState {
        formatting::resolve_state(&self.document, &self.attributes)
    }

    /// Apply `action` and refresh attributes so the returned state matches
    /// the edited buffer.
    pub fn apply(&mut self, action: FormatAction) -> Outcome {
        let mut outcome = formatting::apply(&mut self.document, &self.attributes, action);
        if outcome.applied {
            self.attributes = highlight(self.document.rope());
            debug!(
                "{action} applied, v{} selection {:?}",
                outcome.version, outcome.selection
            );
        }
        outcome.state = Some(self.state());
        outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.document.version(),
            text: self.document.text(),
            selection: self.document.selection(),
            state: self.state(),
        }
    }
}

impl From<&str> for EditorSession {
    fn from(text: &str) -> Self {
        Self::new(Document::from(text))
    }
}
