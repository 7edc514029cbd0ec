//! Wikitext syntax highlighting.
//!
//! Produces the attribute runs the formatting engine reads. Parsing is
//! line-based: each line is classified as heading, list item or paragraph,
//! then scanned for inline markup.

pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use log::trace;
use xi_rope::Rope;

use crate::formatting::AttributeSpans;
use blocks::{BlockNode, WikitextLineClassifier};
use rope::{lines_with_spans, slice::slice_to_string};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Classify every non-blank line of the rope.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = WikitextLineClassifier;
    let blocks = lines_with_spans(rope)
        .map(|lr| classifier.classify(&lr))
        .filter(|lc| !lc.is_blank)
        .map(|lc| BlockNode {
            kind: lc.kind,
            span: lc.content,
        })
        .collect();

    ParsedDoc { blocks }
}

/// Inline constructs on one block's line.
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode) -> Vec<inline::InlineNode> {
    let s = slice_to_string(rope, b.span);
    inline::parse_inline(b.span.start, &s)
}

/// Tag every heading, list line and inline construct in the rope.
///
/// Line-level attributes cover the whole line without its newline; inline
/// attributes cover their delimiters as well as the content.
pub fn highlight(rope: &Rope) -> AttributeSpans {
    let doc = parse_document(rope);
    let mut spans = AttributeSpans::new();

    for block in &doc.blocks {
        if let Some(attribute) = block.kind.attribute() {
            spans.tag(block.span, attribute);
        }
        for node in parse_inline_for_block(rope, block) {
            spans.tag(node.full, node.attribute);
        }
    }

    trace!(
        "highlighted {} lines into {} spans",
        doc.blocks.len(),
        spans.len()
    );
    spans
}
