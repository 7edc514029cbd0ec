//! Inline constructs in match order.
//!
//! The delimiters themselves are owned by [`DelimiterPair`] so the
//! highlighter and the formatting engine can never disagree on them.

use crate::formatting::DelimiterPair;

/// Longer apostrophe runs come first so `'''''` is never read as `''` + `'''`.
pub const PRECEDENCE: [DelimiterPair; 9] = [
    DelimiterPair::BOLD_ITALIC,
    DelimiterPair::BOLD,
    DelimiterPair::ITALIC,
    DelimiterPair::TEMPLATE,
    DelimiterPair::REFERENCE,
    DelimiterPair::SUPERSCRIPT,
    DelimiterPair::SUBSCRIPT,
    DelimiterPair::UNDERLINE,
    DelimiterPair::STRIKETHROUGH,
];
