use crate::formatting::{Attribute, HeadingLevel, ListMarker};
use crate::parsing::rope::span::Span;

/// What a single wikitext line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A section heading; `title` excludes the `=` runs.
    Heading { level: HeadingLevel, title: Span },
    /// A list item; `depth` is the marker run length.
    ListItem {
        marker: ListMarker,
        depth: usize,
        body: Span,
    },
    Paragraph,
}

impl BlockKind {
    /// Line-wide attribute a highlighter attaches for this kind.
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            BlockKind::Heading { level, .. } => Some(level.attribute()),
            BlockKind::ListItem { marker, .. } => Some(marker.attribute()),
            BlockKind::Paragraph => None,
        }
    }
}

/// One non-blank line of the document.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// The line without its trailing newline.
    pub span: Span,
}
