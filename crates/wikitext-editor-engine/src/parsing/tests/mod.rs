//! Integration tests for the highlighter.
//!
//! Snapshots render each span as `Attribute start..end "text"` so the
//! expected output reads like the markup it came from.


use rstest::rstest;
use xi_rope::Rope;

use crate::formatting::{Attribute, AttributeLookup, HeadingLevel};
use crate::parsing::{blocks::BlockKind, highlight, parse_document};

fn highlighted(text: &str) -> String {
    let rope = Rope::from(text);
    let spans = highlight(&rope);
    invariants::check(&rope, &spans);
    normalize::render(&rope, &spans)
}

#[test]
fn inline_bold() {
    insta::assert_snapshot!(highlighted("a '''b''' c"), @r#"Bold 2..9 "'''b'''""#);
}

#[test]
fn mixed_page() {
    let page = "==History==\n*see {{cite}}\n#one <ref>r</ref>\nplain ''it''";
    insta::assert_snapshot!(highlighted(page), @r##"
    Heading2 0..11 "==History=="
    ListBullet 12..25 "*see {{cite}}"
    Template 17..25 "{{cite}}"
    ListNumber 26..43 "#one <ref>r</ref>"
    Reference 31..43 "<ref>r</ref>"
    Italic 50..56 "''it''"
    "##);
}

#[test]
fn empty_document() {
    insta::assert_snapshot!(highlighted(""), @"");
}

/// Every span stays on one line whatever the input looks like.
#[rstest]
#[case("'''a\nb'''")]
#[case("{{a\n}}\n\n\n")]
#[case("====\n==\n=\n")]
#[case("''''''''''")]
#[case("<ref><ref></ref></ref>")]
#[case("Zürich '''ü''' {{ö}}\r\n*ä")]
fn spans_respect_invariants(#[case] text: &str) {
    let rope = Rope::from(text);
    invariants::check(&rope, &highlight(&rope));
}

#[test]
fn delimiters_split_across_lines_are_not_tagged() {
    let rope = Rope::from("'''a\nb'''");
    assert!(highlight(&rope).is_empty());
}

#[test]
fn heading_line_is_uniform_for_its_level_only() {
    let rope = Rope::from("===Sub===\nbody");
    let spans = highlight(&rope);

    assert!(spans.is_uniform(0..9, Attribute::Heading3));
    assert!(!spans.is_uniform(0..9, Attribute::Heading2));
    assert!(!spans.is_uniform(0..11, Attribute::Heading3));
}

#[test]
fn parse_document_skips_blank_lines() {
    let rope = Rope::from("==A==\n\n   \ntext");
    let doc = parse_document(&rope);

    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Heading {
            level: HeadingLevel::new(2).unwrap(),
            title: crate::parsing::rope::Span::new(2, 3),
        }
    );
    assert_eq!(doc.blocks[1].kind, BlockKind::Paragraph);
}

#[test]
fn empty_heading_line_is_tagged() {
    let rope = Rope::from("====");
    let spans = highlight(&rope);
    assert!(spans.is_uniform(0..4, Attribute::Heading2));
}
