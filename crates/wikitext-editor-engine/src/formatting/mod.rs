//! Delimiter formatting engine.
//!
//! The engine never parses wikitext. It reads semantic attributes through
//! [`AttributeLookup`], decides whether an action adds or strips markup,
//! and edits the [`Document`](crate::editing::Document) through commands.
//!
//! ```rust
//! # use wikitext_editor_engine::editing::Document;
//! # use wikitext_editor_engine::formatting::{self, FormatAction};
//! # use wikitext_editor_engine::parsing::highlight;
//! let mut doc = Document::from("a b c");
//! doc.set_selection(2..3);
//!
//! let attrs = highlight(doc.rope());
//! let outcome = formatting::apply(&mut doc, &attrs, FormatAction::Italic);
//!
//! assert_eq!(doc.text(), "a ''b'' c");
//! assert_eq!(outcome.selection, 4..5);
//! ```

pub mod action;
pub mod attribute;
pub mod delimiters;
pub mod engine;
pub mod error;
pub mod expand;
pub mod lists;
pub mod pair;
pub mod position;
pub mod state;

pub use action::{FormatAction, HeadingLevel, ListMarker};
pub use attribute::{Attribute, AttributeLookup, AttributeSpans, probe_range, query, selection_has};
pub use delimiters::{insert_pair, remove_pair};
pub use engine::{Outcome, apply, current_heading};
pub use error::FormatError;
pub use expand::{Expansion, expand};
pub use pair::DelimiterPair;
pub use position::{followed_by, preceded_by, try_shift};
pub use state::{FormattingState, resolve_state};
