/// A cursor for inline scanning with absolute position tracking.
///
/// Operates over a line's text while reporting positions in rope
/// coordinates (via `base`). Steps are whole characters so positions
/// always land on codepoint boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    /// Rope offset of `s[0]`.
    pub base: usize,
    /// Local byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.s[self.i..].starts_with(pat)
    }

    /// Advance past one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.s[self.i..].chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advance past `pat`, which the caller has just matched.
    pub fn bump_str(&mut self, pat: &str) {
        self.i = (self.i + pat.len()).min(self.s.len());
    }

    /// Local index of every occurrence of `pat` at or after the cursor.
    pub fn occurrences(&self, pat: &'a str) -> impl Iterator<Item = usize> + 'a {
        let from = self.i;
        self.s[from..]
            .match_indices(pat)
            .map(move |(at, _)| from + at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_absolute() {
        let mut cur = Cursor::new("''x''", 10);
        assert_eq!(cur.pos(), 10);
        cur.bump_str("''");
        assert_eq!(cur.pos(), 12);
        assert!(cur.starts_with("x"));
    }

    #[test]
    fn bump_steps_whole_characters() {
        let mut cur = Cursor::new("ä'", 0);
        assert_eq!(cur.bump(), Some('ä'));
        assert_eq!(cur.i, 2);
        assert_eq!(cur.bump(), Some('\''));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn occurrences_start_at_cursor() {
        let mut cur = Cursor::new("<s>a</s><s>b</s>", 0);
        cur.bump_str("<s>");
        let found: Vec<_> = cur.occurrences("</s>").collect();
        assert_eq!(found, vec![4, 12]);
    }

    #[test]
    fn bump_str_stops_at_end() {
        let mut cur = Cursor::new("ab", 0);
        cur.bump_str("abcdef");
        assert!(cur.eof());
        assert!(cur.starts_with(""));
        assert!(!cur.starts_with("a"));
    }
}
