use crate::formatting::ListMarker;

/// List item prefix: a run of `*` or `#` at the start of the line.
pub struct ListPrefix;

impl ListPrefix {
    /// Marker kind and run length. The run is single-kind, so `*#x` is a
    /// depth-one bullet.
    pub fn parse(line: &str) -> Option<(ListMarker, usize)> {
        let marker = ListMarker::from_char(line.chars().next()?)?;
        let depth = line.chars().take_while(|c| *c == marker.char()).count();
        Some((marker, depth))
    }
}
