use crate::formatting::Attribute;
use crate::parsing::rope::span::Span;

/// A matched inline construct with byte spans into the rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineNode {
    pub attribute: Attribute,
    /// Full span including both delimiters.
    pub full: Span,
    /// Content between the delimiters; may be empty.
    pub inner: Span,
}
