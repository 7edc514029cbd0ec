use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::formatting::HeadingLevel;

/// Section heading line: `==Title==` through `======Title======`.
pub struct Heading;

impl Heading {
    pub const MARK: char = '=';

    /// Detect a heading and return its level plus the title's local range.
    ///
    /// The level is the shorter of the two `=` runs, capped at six. A line
    /// made only of `=` is an empty heading when it splits evenly.
    pub fn parse(line: &str) -> Option<(HeadingLevel, Range<usize>)> {
        let trimmed = line.trim_end();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c == Self::MARK) {
            let len = trimmed.len();
            if len % 2 != 0 {
                return None;
            }
            let level = HeadingLevel::new(u8::try_from(len / 2).ok()?).ok()?;
            return Some((level, len / 2..len / 2));
        }

        let caps = heading_regex().captures(line)?;
        let (open, title, close) = (caps.get(1)?, caps.get(2)?, caps.get(3)?);
        let depth = open.len().min(close.len()).min(usize::from(HeadingLevel::MAX));
        let level = HeadingLevel::new(u8::try_from(depth).ok()?).ok()?;
        Some((level, title.range()))
    }
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"^(=+)(.*?[^=].*?)(=+)[ \t]*$").expect("Invalid heading regex")
    })
}
