use crate::formatting::DelimiterPair;
use crate::parsing::rope::span::Span;

use super::{cursor::Cursor, kinds::PRECEDENCE, types::InlineNode};

/// Parses one line of wikitext into the inline constructs it contains.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins
/// - `s`: A single line, newline excluded
///
/// # Precedence
/// Constructs are matched one kind at a time in [`PRECEDENCE`] order.
/// Delimiters claimed by an earlier match are masked, so the apostrophes
/// of `'''bold'''` cannot also open an italic run. Content is not masked:
/// `'''a ''b'' c'''` yields both a bold and an italic node.
///
/// Nodes are returned sorted by start position.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut claimed: Vec<Span> = vec![];
    let mut out = vec![];

    for pair in &PRECEDENCE {
        let mut cur = Cursor::new(s, base);
        while !cur.eof() {
            match try_parse_delimited(&mut cur, pair, &claimed) {
                Some(node) => {
                    claimed.push(Span::new(node.full.start, node.inner.start));
                    claimed.push(Span::new(node.inner.end, node.full.end));
                    out.push(node);
                }
                None => {
                    cur.bump();
                }
            }
        }
    }

    out.sort_by_key(|node| (node.full.start, node.full.end));
    out
}

/// Attempts to match `pair` starting at the cursor.
///
/// The closing delimiter is the first unclaimed occurrence after the
/// opener. On failure the cursor is left where it was.
fn try_parse_delimited(
    cur: &mut Cursor<'_>,
    pair: &DelimiterPair,
    claimed: &[Span],
) -> Option<InlineNode> {
    if !cur.starts_with(pair.start) {
        return None;
    }
    let start = cur.pos();
    if overlaps(claimed, Span::new(start, start + pair.start.len())) {
        return None;
    }

    let mut probe = cur.clone();
    probe.bump_str(pair.start);
    let inner_start = probe.pos();

    let inner_end = probe
        .occurrences(pair.end)
        .map(|local| probe.base + local)
        .find(|&at| !overlaps(claimed, Span::new(at, at + pair.end.len())))?;
    let end = inner_end + pair.end.len();

    cur.i = end - cur.base;
    Some(InlineNode {
        attribute: pair.attribute,
        full: Span::new(start, end),
        inner: Span::new(inner_start, inner_end),
    })
}

fn overlaps(claimed: &[Span], candidate: Span) -> bool {
    claimed.iter().any(|c| c.intersect(candidate).is_some())
}
