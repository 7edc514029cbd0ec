//! Selection-driven wikitext formatting.
//!
//! - [`editing`]: the rope-backed [`Document`] and [`EditorSession`]
//! - [`formatting`]: toggling delimiter pairs, headings and list markers
//! - [`parsing`]: the line-based highlighter producing attribute runs

pub mod editing;
pub mod formatting;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, EditorSession, Patch, Snapshot};
pub use formatting::{
    Attribute, AttributeLookup, AttributeSpans, FormatAction, FormatError, FormattingState,
    HeadingLevel, ListMarker, Outcome,
};
pub use parsing::highlight;
