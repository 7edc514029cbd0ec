use std::ops::Range;

/// Selection and version after a single applied [`Cmd`](super::Cmd).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub new_selection: Range<usize>,
    pub version: u64,
}
