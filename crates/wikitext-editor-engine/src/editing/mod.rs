/*!
 * # Editing Core
 *
 * The buffer side of the editor: a lossless xi-rope document edited only
 * through commands.
 *
 * ## Architecture
 *
 * ### Single Source of Truth: xi-rope Buffer
 * - The page lives in one **`xi_rope::Rope`**; `to_bytes()` gives back exactly
 *   what was loaded plus the applied edits
 * - Offsets are bytes on codepoint boundaries
 *
 * ### Command-Based Editing
 * - Every mutation is a **`Cmd`** compiled to an xi-rope `Delta`
 * - Applying a command bumps the version and carries the selection through
 *   the edit, returning a **`Patch`**
 *
 * ### Read API: Snapshots
 * - **`EditorSession`** keeps highlighter output in step with the buffer
 * - Hosts render from **`Snapshot`**s and never mutate the rope directly
 *
 * ## Usage Pattern
 *
 * ```rust
 * use wikitext_editor_engine::editing::*;
 * use wikitext_editor_engine::formatting::FormatAction;
 *
 * let mut session = EditorSession::from("some text");
 * session.set_selection(5..9);
 *
 * let outcome = session.apply(FormatAction::Template);
 * assert!(outcome.applied);
 * assert_eq!(session.snapshot().marked(), "some {{[text]}}");
 * ```
 */

pub mod commands;
pub mod document;
pub mod patch;
pub mod session;
pub mod snapshot;

pub use commands::Cmd;
pub use document::Document;
pub use patch::Patch;
pub use session::EditorSession;
pub use snapshot::{Snapshot, mark_selection};
