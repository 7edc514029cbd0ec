use std::ops::Range;

use log::trace;

use super::error::FormatError;
use super::pair::DelimiterPair;
use super::position::{followed_by, preceded_by};
use crate::editing::Document;

/// A selection grown out to the nearest enclosing delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Between the delimiters.
    pub inner: Range<usize>,
    /// Including both delimiters.
    pub outer: Range<usize>,
}

/// Grow `selection` outward until it sits directly inside `pair`.
///
/// Each boundary walks independently, one character at a time, checking
/// the unexpanded boundary first. A walk stops without a match at a line
/// break, at the start or end of the buffer, or for asymmetric pairs at
/// the opposite tag (so a cursor after `</ref>` never pairs with an
/// earlier `<ref>`).
pub fn expand(
    doc: &Document,
    selection: Range<usize>,
    pair: &DelimiterPair,
) -> Result<Expansion, FormatError> {
    let start = walk_left(doc, selection.start, pair)?;
    let end = walk_right(doc, selection.end.max(start), pair)?;

    let expansion = Expansion {
        inner: start..end,
        outer: (start - pair.start.len())..(end + pair.end.len()),
    };
    trace!(
        "expanded {:?} to {:?} for {:?}",
        selection, expansion.inner, pair.attribute
    );
    Ok(expansion)
}

fn walk_left(doc: &Document, from: usize, pair: &DelimiterPair) -> Result<usize, FormatError> {
    let mut at = from;
    loop {
        if preceded_by(doc, at, pair.start) {
            return Ok(at);
        }
        if preceded_by(doc, at, "\n") {
            trace!("left walk hit line start at {at}");
            return Err(FormatError::ExpansionNotFound);
        }
        if !pair.is_symmetric() && preceded_by(doc, at, pair.end) {
            trace!("left walk hit closing tag at {at}");
            return Err(FormatError::ExpansionNotFound);
        }
        at = doc
            .prev_char_offset(at)
            .ok_or(FormatError::ExpansionNotFound)?;
    }
}

fn walk_right(doc: &Document, from: usize, pair: &DelimiterPair) -> Result<usize, FormatError> {
    let mut at = from;
    loop {
        if followed_by(doc, at, pair.end) {
            return Ok(at);
        }
        if followed_by(doc, at, "\n") {
            trace!("right walk hit line end at {at}");
            return Err(FormatError::ExpansionNotFound);
        }
        if !pair.is_symmetric() && followed_by(doc, at, pair.start) {
            trace!("right walk hit opening tag at {at}");
            return Err(FormatError::ExpansionNotFound);
        }
        at = doc
            .next_char_offset(at)
            .ok_or(FormatError::ExpansionNotFound)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::HeadingLevel;
    use rstest::rstest;

    fn expand_at(
        text: &str,
        selection: Range<usize>,
        pair: DelimiterPair,
    ) -> Result<Expansion, FormatError> {
        let doc = Document::from(text);
        expand(&doc, selection, &pair)
    }

    #[test]
    fn cursor_inside_bold_finds_both_delimiters() {
        let expansion = expand_at("a '''b''' c", 5..5, DelimiterPair::BOLD).unwrap();
        assert_eq!(expansion.inner, 5..6);
        assert_eq!(expansion.outer, 2..9);
    }

    #[test]
    fn selection_inside_template_expands_outward() {
        let expansion =
            expand_at("see {{cite web|url=x}} here", 8..12, DelimiterPair::TEMPLATE).unwrap();
        assert_eq!(expansion.inner, 6..20);
        assert_eq!(expansion.outer, 4..22);
    }

    #[test]
    fn asymmetric_pair_stops_at_neighbouring_tag() {
        let expansion =
            expand_at("<ref>x</ref><ref>y</ref>", 17..17, DelimiterPair::REFERENCE).unwrap();
        assert_eq!(expansion.inner, 17..18);
        assert_eq!(expansion.outer, 12..24);
    }

    #[test]
    fn asymmetric_pair_does_not_reach_past_closing_tag() {
        let text = "<ref>x</ref> y</ref>";
        assert_eq!(
            expand_at(text, 13..13, DelimiterPair::REFERENCE),
            Err(FormatError::ExpansionNotFound)
        );
    }

    #[rstest]
    #[case("'''a\nb'''", 5..5)]
    #[case("'''a\nb'''", 3..3)]
    #[case("{{a\n}}", 3..3)]
    fn never_crosses_a_line_break(#[case] text: &str, #[case] selection: Range<usize>) {
        let pair = if text.starts_with("{{") {
            DelimiterPair::TEMPLATE
        } else {
            DelimiterPair::BOLD
        };
        assert_eq!(
            expand_at(text, selection, pair),
            Err(FormatError::ExpansionNotFound)
        );
    }

    #[test]
    fn missing_delimiter_at_buffer_edge_fails() {
        assert_eq!(
            expand_at("plain words", 3..3, DelimiterPair::ITALIC),
            Err(FormatError::ExpansionNotFound)
        );
    }

    #[test]
    fn empty_pair_expands_to_cursor() {
        let expansion = expand_at("''''''", 3..3, DelimiterPair::BOLD).unwrap();
        assert_eq!(expansion.inner, 3..3);
        assert_eq!(expansion.outer, 0..6);
    }

    #[test]
    fn heading_expansion_covers_title() {
        let pair = DelimiterPair::heading(HeadingLevel::new(2).unwrap());
        let expansion = expand_at("==Title==\nbody", 4..4, pair).unwrap();
        assert_eq!(expansion.inner, 2..7);
        assert_eq!(expansion.outer, 0..9);
    }

    #[test]
    fn expansion_steps_over_multibyte_text() {
        let expansion = expand_at("''Zürich''", 5..5, DelimiterPair::ITALIC).unwrap();
        assert_eq!(expansion.inner, 2..9);
    }
}
