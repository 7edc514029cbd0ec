//! # Inline Parsing
//!
//! Cursor-based matching of paired inline markup within one line.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (attribute plus full and inner spans)
//! - **`kinds`**: match order over the shared delimiter pairs
//! - **`cursor`**: `Cursor` for character stepping with absolute positions
//! - **`parser`**: `parse_inline()` entry point
//!
//! Inline markup never spans lines in wikitext, so the parser is always
//! handed a single line.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
