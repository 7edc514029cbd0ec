use thiserror::Error;

/// Why a formatting step was skipped.
///
/// None of these are fatal: the engine reports them on the
/// [`Outcome`](super::Outcome) and leaves the buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No enclosing delimiter pair was found on the selection's line.
    #[error("no enclosing delimiter pair on the current line")]
    ExpansionNotFound,

    /// Position arithmetic stepped outside the buffer.
    #[error("boundary position is outside the buffer")]
    BoundaryUnavailable,

    #[error("heading level {0} is outside 2..=6")]
    InvalidHeadingLevel(u8),

    #[error("selection is not on a list item")]
    NotAListItem,

    #[error("list item is already at the outermost level")]
    NothingToUnindent,

    #[error("unknown formatting action `{0}`")]
    UnknownAction(String),
}
