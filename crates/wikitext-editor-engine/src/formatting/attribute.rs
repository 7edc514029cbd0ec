use std::ops::Range;

use serde::Serialize;

use super::action::HeadingLevel;
use crate::editing::Document;
use crate::parsing::rope::Span;

/// Semantic tag a syntax highlighter attaches to a range of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Bold,
    Italic,
    BoldItalic,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Template,
    Reference,
    Superscript,
    Subscript,
    Underline,
    Strikethrough,
    ListBullet,
    ListNumber,
}

impl Attribute {
    pub fn heading(level: HeadingLevel) -> Self {
        match level.get() {
            2 => Attribute::Heading2,
            3 => Attribute::Heading3,
            4 => Attribute::Heading4,
            5 => Attribute::Heading5,
            _ => Attribute::Heading6,
        }
    }

    pub fn heading_level(self) -> Option<HeadingLevel> {
        let level = match self {
            Attribute::Heading2 => 2,
            Attribute::Heading3 => 3,
            Attribute::Heading4 => 4,
            Attribute::Heading5 => 5,
            Attribute::Heading6 => 6,
            _ => return None,
        };
        HeadingLevel::new(level).ok()
    }
}

/// Read-only view of the attributes attached to a buffer.
pub trait AttributeLookup {
    /// True when every character of `range` carries `attribute`.
    ///
    /// An empty range is never uniformly attributed.
    fn is_uniform(&self, range: Range<usize>, attribute: Attribute) -> bool;
}

/// Attribute runs as produced by a highlighter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSpans {
    spans: Vec<(Span, Attribute)>,
}

impl AttributeSpans {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `attribute` to `span`. Empty spans carry nothing and are dropped.
    pub fn tag(&mut self, span: Span, attribute: Attribute) {
        if !span.is_empty() {
            self.spans.push((span, attribute));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Span, Attribute)> + '_ {
        self.spans.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// All attributes covering the byte at `offset`, sorted and deduplicated.
    pub fn attributes_at(&self, offset: usize) -> Vec<Attribute> {
        let mut found: Vec<Attribute> = self
            .spans
            .iter()
            .filter(|(span, _)| span.start <= offset && offset < span.end)
            .map(|(_, attribute)| *attribute)
            .collect();
        found.sort();
        found.dedup();
        found
    }
}

impl AttributeLookup for AttributeSpans {
    fn is_uniform(&self, range: Range<usize>, attribute: Attribute) -> bool {
        let wanted = Span::from(range);
        if wanted.is_empty() {
            return false;
        }

        let mut covering: Vec<Span> = self
            .spans
            .iter()
            .filter(|(_, a)| *a == attribute)
            .filter_map(|(span, _)| span.intersect(wanted))
            .collect();
        covering.sort();

        // Single sweep: any gap before the end means a run without the tag
        let mut reached = wanted.start;
        for span in covering {
            if span.start > reached {
                return false;
            }
            reached = reached.max(span.end);
            if reached >= wanted.end {
                return true;
            }
        }
        false
    }
}

/// The range actually inspected for a selection.
///
/// A bare cursor is widened to the two characters straddling it, so a
/// cursor between two bold words reads as bold. At the very start of the
/// buffer, or with fewer than two characters after it, the cursor stays
/// an empty range.
pub fn probe_range(doc: &Document, selection: Range<usize>) -> Range<usize> {
    if !selection.is_empty() {
        return selection;
    }
    let at = selection.start;
    match (doc.prev_char_offset(at), doc.next_char_offset(at)) {
        (Some(before), Some(after)) if after < doc.len() => before..after,
        _ => selection,
    }
}

/// Whether `attribute` holds uniformly over `selection`.
pub fn query(
    doc: &Document,
    selection: Range<usize>,
    attribute: Attribute,
    lookup: &impl AttributeLookup,
) -> bool {
    lookup.is_uniform(probe_range(doc, selection), attribute)
}

/// Whether the document's current selection reads as `attribute`.
///
/// Bold and italic also hold on text tagged as combined bold-italic.
pub fn selection_has(doc: &Document, lookup: &impl AttributeLookup, attribute: Attribute) -> bool {
    let selection = doc.selection();
    match attribute {
        Attribute::Bold | Attribute::Italic => {
            query(doc, selection.clone(), attribute, lookup)
                || query(doc, selection, Attribute::BoldItalic, lookup)
        }
        _ => query(doc, selection, attribute, lookup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(tags: &[(usize, usize, Attribute)]) -> AttributeSpans {
        let mut spans = AttributeSpans::new();
        for (start, end, attribute) in tags {
            spans.tag(Span::new(*start, *end), *attribute);
        }
        spans
    }

    #[test]
    fn uniform_requires_full_coverage() {
        let attrs = spans(&[(2, 9, Attribute::Bold)]);
        assert!(attrs.is_uniform(2..9, Attribute::Bold));
        assert!(attrs.is_uniform(4..6, Attribute::Bold));
        assert!(!attrs.is_uniform(1..6, Attribute::Bold));
        assert!(!attrs.is_uniform(4..10, Attribute::Bold));
        assert!(!attrs.is_uniform(4..6, Attribute::Italic));
    }

    #[test]
    fn uniform_accepts_adjacent_runs_and_rejects_gaps() {
        let attrs = spans(&[(0, 4, Attribute::Template), (4, 8, Attribute::Template)]);
        assert!(attrs.is_uniform(2..6, Attribute::Template));

        let gapped = spans(&[(0, 3, Attribute::Template), (4, 8, Attribute::Template)]);
        assert!(!gapped.is_uniform(2..6, Attribute::Template));
    }

    #[test]
    fn empty_range_is_never_uniform() {
        let attrs = spans(&[(0, 4, Attribute::Bold)]);
        assert!(!attrs.is_uniform(2..2, Attribute::Bold));
    }

    #[test]
    fn empty_spans_are_not_stored() {
        let attrs = spans(&[(3, 3, Attribute::Bold)]);
        assert!(attrs.is_empty());
    }

    #[test]
    fn cursor_probes_two_characters() {
        let mut doc = Document::from("ab cd");
        doc.set_selection(2..2);
        assert_eq!(probe_range(&doc, doc.selection()), 1..3);
    }

    #[test]
    fn cursor_at_start_or_near_end_is_not_widened() {
        let mut doc = Document::from("abcd");
        doc.set_selection(0..0);
        assert_eq!(probe_range(&doc, doc.selection()), 0..0);

        doc.set_selection(3..3);
        assert_eq!(probe_range(&doc, doc.selection()), 3..3);

        doc.set_selection(4..4);
        assert_eq!(probe_range(&doc, doc.selection()), 4..4);
    }

    #[test]
    fn cursor_probe_steps_over_multibyte_characters() {
        let mut doc = Document::from("äöü");
        doc.set_selection(2..2);
        assert_eq!(probe_range(&doc, doc.selection()), 0..4);
    }

    #[test]
    fn cursor_between_bold_words_reads_bold() {
        let mut doc = Document::from("'''one two'''.");
        doc.set_selection(6..6);
        let attrs = spans(&[(0, 13, Attribute::Bold)]);
        assert!(query(&doc, doc.selection(), Attribute::Bold, &attrs));
    }

    #[test]
    fn bold_and_italic_hold_on_bold_italic() {
        let mut doc = Document::from("'''''both'''''");
        doc.set_selection(6..8);
        let attrs = spans(&[(0, 14, Attribute::BoldItalic)]);

        assert!(selection_has(&doc, &attrs, Attribute::Bold));
        assert!(selection_has(&doc, &attrs, Attribute::Italic));
        assert!(!selection_has(&doc, &attrs, Attribute::Template));
    }

    #[test]
    fn heading_attribute_round_trips_level() {
        for level in HeadingLevel::ALL {
            assert_eq!(Attribute::heading(level).heading_level(), Some(level));
        }
        assert_eq!(Attribute::Bold.heading_level(), None);
    }
}
