use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{Heading, ListPrefix};
use super::types::BlockKind;

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, newline included.
    pub line: Span,
    /// Byte span of the line without its newline.
    pub content: Span,
    pub is_blank: bool,
    pub kind: BlockKind,
}

/// Classifies wikitext lines. Wikitext block syntax is line-local, so no
/// state is carried between lines.
pub struct WikitextLineClassifier;

impl WikitextLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.content();
        let content = lr.content_span();
        let at = |local: usize| content.start + local;

        let kind = if let Some((level, title)) = Heading::parse(text) {
            BlockKind::Heading {
                level,
                title: Span::new(at(title.start), at(title.end)),
            }
        } else if let Some((marker, depth)) = ListPrefix::parse(text) {
            BlockKind::ListItem {
                marker,
                depth,
                body: Span::new(at(depth), content.end),
            }
        } else {
            BlockKind::Paragraph
        };

        LineClass {
            line: lr.span,
            content,
            is_blank: text.trim().is_empty(),
            kind,
        }
    }
}
