use serde::Serialize;

use super::action::{FormatAction, HeadingLevel, ListMarker};
use super::attribute::{Attribute, AttributeLookup, selection_has};
use super::engine::current_heading;
use crate::editing::Document;

/// Which toolbar buttons should read as active for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattingState {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingLevel>,
    /// Indent and unindent only make sense on a list item.
    pub indent_enabled: bool,
}

impl FormattingState {
    /// Whether tapping `action` would strip formatting rather than add it.
    pub fn is_active(&self, action: FormatAction) -> bool {
        match action {
            FormatAction::Bold => self.bold,
            FormatAction::Italic => self.italic,
            FormatAction::Template => self.template,
            FormatAction::Reference => self.reference,
            FormatAction::Superscript => self.superscript,
            FormatAction::Subscript => self.subscript,
            FormatAction::Underline => self.underline,
            FormatAction::Strikethrough => self.strikethrough,
            FormatAction::Heading(level) => self.heading == Some(level),
            FormatAction::List(ListMarker::Bullet) => self.list_bullet,
            FormatAction::List(ListMarker::Number) => self.list_number,
            FormatAction::Indent | FormatAction::Unindent => self.indent_enabled,
        }
    }
}

/// Query every attribute over the document's selection.
pub fn resolve_state(doc: &Document, lookup: &impl AttributeLookup) -> FormattingState {
    let has = |attribute| selection_has(doc, lookup, attribute);
    let list_bullet = has(Attribute::ListBullet);
    let list_number = has(Attribute::ListNumber);

    FormattingState {
        range_selected: !doc.selection().is_empty(),
        bold: has(Attribute::Bold),
        italic: has(Attribute::Italic),
        template: has(Attribute::Template),
        reference: has(Attribute::Reference),
        superscript: has(Attribute::Superscript),
        subscript: has(Attribute::Subscript),
        underline: has(Attribute::Underline),
        strikethrough: has(Attribute::Strikethrough),
        list_bullet,
        list_number,
        heading: current_heading(doc, lookup),
        indent_enabled: list_bullet || list_number,
    }
}
