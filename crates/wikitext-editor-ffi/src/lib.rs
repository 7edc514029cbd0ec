//! UniFFI bindings for native wikitext editors
//!
//! The host keeps its own text view and calls into an [`EditorHandle`]
//! whenever the user moves the selection or taps a toolbar button. Offsets
//! cross the boundary as UTF-8 byte offsets in `u64`.

use std::ops::Range;
use std::sync::Mutex;

use wikitext_editor_engine::{
    Document, EditorSession, FormatAction, FormattingState, HeadingLevel, ListMarker, Outcome,
    Snapshot,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },
}

// ============ Editor Handle ============

/// A page being edited, with its highlighter output kept current.
#[derive(uniffi::Object)]
pub struct EditorHandle {
    inner: Mutex<EditorSession>,
}

impl EditorHandle {
    fn session(&self) -> std::sync::MutexGuard<'_, EditorSession> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl EditorHandle {
    /// Create an editor over wikitext content. The cursor starts at 0.
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Result<Self, FfiError> {
        let doc = Document::from_bytes(content.as_bytes()).map_err(|e| FfiError::ParseError {
            reason: e.to_string(),
        })?;

        let mut session = EditorSession::new(doc);
        session.set_selection(0..0);

        Ok(Self {
            inner: Mutex::new(session),
        })
    }

    pub fn get_text(&self) -> String {
        self.session().document().text()
    }

    pub fn get_selection(&self) -> SelectionDto {
        SelectionDto::from_engine(self.session().document().selection())
    }

    /// Move the selection and return the toolbar state there.
    ///
    /// Out-of-range offsets are clamped into the buffer and offsets inside a
    /// multi-byte character move back to its start.
    pub fn set_selection(&self, selection: SelectionDto) -> FormattingStateDto {
        let state = self.session().set_selection(selection.to_engine());
        FormattingStateDto::from_engine(state)
    }

    pub fn get_state(&self) -> FormattingStateDto {
        FormattingStateDto::from_engine(self.session().state())
    }

    /// Apply a toolbar action to the current selection.
    ///
    /// A skipped action is not an error: the outcome carries the reason and
    /// the buffer is untouched.
    pub fn apply(&self, action: FormatActionDto) -> Result<OutcomeDto, FfiError> {
        let action = action.to_engine()?;
        let mut session = self.session();
        let outcome = session.apply(action);
        let fallback = session.state();
        Ok(OutcomeDto::from_engine(outcome, fallback))
    }

    /// Apply an action by name, e.g. `"bold"` or `"heading3"`.
    pub fn apply_named(&self, name: String) -> Result<OutcomeDto, FfiError> {
        let action = name
            .parse::<FormatAction>()
            .map_err(|e| FfiError::InvalidAction {
                reason: e.to_string(),
            })?;
        let mut session = self.session();
        let outcome = session.apply(action);
        let fallback = session.state();
        Ok(OutcomeDto::from_engine(outcome, fallback))
    }

    /// Get a snapshot of the editor for UI rendering.
    pub fn get_snapshot(&self) -> SnapshotDto {
        SnapshotDto::from_engine(self.session().snapshot())
    }
}

// ============ DTOs ============

/// Half-open byte range; `start == end` is a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct SelectionDto {
    pub start: u64,
    pub end: u64,
}

impl SelectionDto {
    fn from_engine(range: Range<usize>) -> Self {
        Self {
            start: range.start as u64,
            end: range.end as u64,
        }
    }

    fn to_engine(self) -> Range<usize> {
        let clamp = |v: u64| usize::try_from(v).unwrap_or(usize::MAX);
        clamp(self.start)..clamp(self.end)
    }
}

/// Toolbar buttons the host can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FormatActionDto {
    Bold,
    Italic,
    Template,
    Reference,
    Superscript,
    Subscript,
    Underline,
    Strikethrough,
    /// Level 2 through 6
    Heading { level: u8 },
    Bullet,
    Number,
    Indent,
    Unindent,
}

impl FormatActionDto {
    fn to_engine(self) -> Result<FormatAction, FfiError> {
        Ok(match self {
            Self::Bold => FormatAction::Bold,
            Self::Italic => FormatAction::Italic,
            Self::Template => FormatAction::Template,
            Self::Reference => FormatAction::Reference,
            Self::Superscript => FormatAction::Superscript,
            Self::Subscript => FormatAction::Subscript,
            Self::Underline => FormatAction::Underline,
            Self::Strikethrough => FormatAction::Strikethrough,
            Self::Heading { level } => {
                let level = HeadingLevel::new(level).map_err(|e| FfiError::InvalidAction {
                    reason: e.to_string(),
                })?;
                FormatAction::Heading(level)
            }
            Self::Bullet => FormatAction::List(ListMarker::Bullet),
            Self::Number => FormatAction::List(ListMarker::Number),
            Self::Indent => FormatAction::Indent,
            Self::Unindent => FormatAction::Unindent,
        })
    }
}

/// Which toolbar buttons should show as active.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FormattingStateDto {
    pub range_selected: bool,
    pub bold: bool,
    pub italic: bool,
    pub template: bool,
    pub reference: bool,
    pub superscript: bool,
    pub subscript: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub list_bullet: bool,
    pub list_number: bool,
    /// Heading level (2-6) if the selection is in a heading
    pub heading_level: Option<u8>,
    pub indent_enabled: bool,
}

impl FormattingStateDto {
    fn from_engine(state: FormattingState) -> Self {
        Self {
            range_selected: state.range_selected,
            bold: state.bold,
            italic: state.italic,
            template: state.template,
            reference: state.reference,
            superscript: state.superscript,
            subscript: state.subscript,
            underline: state.underline,
            strikethrough: state.strikethrough,
            list_bullet: state.list_bullet,
            list_number: state.list_number,
            heading_level: state.heading.map(HeadingLevel::get),
            indent_enabled: state.indent_enabled,
        }
    }
}

/// Result of a toolbar action.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct OutcomeDto {
    pub applied: bool,
    /// Why the action was skipped, if it was
    pub skipped_reason: Option<String>,
    pub selection: SelectionDto,
    /// Document version for change detection
    pub version: u64,
    pub state: FormattingStateDto,
}

impl OutcomeDto {
    fn from_engine(outcome: Outcome, fallback: FormattingState) -> Self {
        Self {
            applied: outcome.applied,
            skipped_reason: outcome.skipped.map(|e| e.to_string()),
            selection: SelectionDto::from_engine(outcome.selection),
            version: outcome.version,
            state: FormattingStateDto::from_engine(outcome.state.unwrap_or(fallback)),
        }
    }
}

/// UI-ready snapshot of the editor.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SnapshotDto {
    pub version: u64,
    pub text: String,
    pub selection: SelectionDto,
    pub state: FormattingStateDto,
}

impl SnapshotDto {
    fn from_engine(snapshot: Snapshot) -> Self {
        Self {
            version: snapshot.version,
            text: snapshot.text,
            selection: SelectionDto::from_engine(snapshot.selection),
            state: FormattingStateDto::from_engine(snapshot.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sel(start: u64, end: u64) -> SelectionDto {
        SelectionDto { start, end }
    }

    #[test]
    fn test_editor_from_string() {
        let content = "==Paris==\n*Capital of France";
        let editor = EditorHandle::from_string(content.to_string()).unwrap();

        assert_eq!(editor.get_text(), content);
        assert_eq!(editor.get_selection(), sel(0, 0));
    }

    #[test]
    fn test_apply_right_after_construction_starts_at_cursor_zero() {
        let editor = EditorHandle::from_string("word".to_string()).unwrap();

        let outcome = editor.apply(FormatActionDto::Bold).unwrap();

        assert_eq!(editor.get_text(), "word");
        assert_eq!(outcome.selection, sel(3, 3));
    }

    #[test]
    fn test_mid_character_selection_is_snapped() {
        let editor = EditorHandle::from_string("äb".to_string()).unwrap();

        editor.set_selection(sel(1, 1));
        assert_eq!(editor.get_selection(), sel(0, 0));

        let outcome = editor.apply(FormatActionDto::Bold).unwrap();
        assert!(outcome.applied);
        assert_eq!(editor.get_text(), "äb");
        assert_eq!(outcome.selection, sel(3, 3));
    }

    #[test]
    fn test_set_selection_reports_state() {
        let editor = EditorHandle::from_string("see '''bold''' text".to_string()).unwrap();

        let state = editor.set_selection(sel(7, 11));

        assert!(state.bold);
        assert!(state.range_selected);
        assert_eq!(state.heading_level, None);
    }

    #[test]
    fn test_set_selection_clamps() {
        let editor = EditorHandle::from_string("abc".to_string()).unwrap();

        editor.set_selection(sel(1, u64::MAX));

        assert_eq!(editor.get_selection(), sel(1, 3));
    }

    #[test]
    fn test_apply_bold_round_trip() {
        let editor = EditorHandle::from_string("a word here".to_string()).unwrap();
        editor.set_selection(sel(2, 6));

        let on = editor.apply(FormatActionDto::Bold).unwrap();
        assert!(on.applied);
        assert_eq!(editor.get_text(), "a '''word''' here");
        assert_eq!(on.selection, sel(5, 9));
        assert!(on.state.bold);

        let off = editor.apply(FormatActionDto::Bold).unwrap();
        assert!(off.applied);
        assert_eq!(editor.get_text(), "a word here");
        assert_eq!(off.selection, sel(2, 6));
        assert!(!off.state.bold);
    }

    #[test]
    fn test_apply_heading_sets_level() {
        let editor = EditorHandle::from_string("Title".to_string()).unwrap();
        editor.set_selection(sel(0, 5));

        let outcome = editor.apply(FormatActionDto::Heading { level: 4 }).unwrap();

        assert_eq!(editor.get_text(), "====Title====");
        assert_eq!(outcome.state.heading_level, Some(4));
    }

    #[test]
    fn test_apply_invalid_heading_is_error() {
        let editor = EditorHandle::from_string("Title".to_string()).unwrap();

        let result = editor.apply(FormatActionDto::Heading { level: 1 });

        assert!(matches!(result, Err(FfiError::InvalidAction { .. })));
        assert_eq!(editor.get_text(), "Title");
    }

    #[test]
    fn test_skipped_action_carries_reason() {
        let editor = EditorHandle::from_string("plain".to_string()).unwrap();
        editor.set_selection(sel(2, 2));

        let outcome = editor.apply(FormatActionDto::Indent).unwrap();

        assert!(!outcome.applied);
        assert!(outcome.skipped_reason.is_some());
        assert_eq!(editor.get_text(), "plain");
    }

    #[test]
    fn test_apply_named() {
        let editor = EditorHandle::from_string("note".to_string()).unwrap();
        editor.set_selection(sel(0, 4));

        editor.apply_named("ref".to_string()).unwrap();

        assert_eq!(editor.get_text(), "<ref>note</ref>");
        assert!(matches!(
            editor.apply_named("blink".to_string()),
            Err(FfiError::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_get_snapshot() {
        let editor = EditorHandle::from_string("item".to_string()).unwrap();
        editor.apply(FormatActionDto::Number).unwrap();

        let snapshot = editor.get_snapshot();

        assert_eq!(snapshot.text, "#item");
        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.selection, sel(1, 1));
        assert!(snapshot.state.list_number);
    }
}
