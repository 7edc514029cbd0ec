//! # Block Parsing
//!
//! Wikitext block syntax lives entirely at line starts, so block parsing is
//! a single classification pass.
//!
//! ## Modules
//!
//! - **`kinds`**: Line constructs owning their markers (`Heading`, `ListPrefix`)
//! - **`classify`**: `WikitextLineClassifier` produces a `LineClass` per line
//! - **`types`**: `BlockKind` and `BlockNode`
//!
//! ## Key Invariants
//!
//! - A line is at most one of heading or list item; headings win
//! - All block nodes store byte spans into the rope, newline excluded

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{LineClass, WikitextLineClassifier};
pub use types::{BlockKind, BlockNode};
