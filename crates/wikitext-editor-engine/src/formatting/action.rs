use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::error::FormatError;
use super::pair::DelimiterPair;

/// Section heading depth. Level N is delimited by N `=` on each side.
///
/// Level 1 is the page title and cannot be produced from the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 6;

    pub const ALL: [HeadingLevel; 5] = [
        HeadingLevel(2),
        HeadingLevel(3),
        HeadingLevel(4),
        HeadingLevel(5),
        HeadingLevel(6),
    ];

    pub fn new(level: u8) -> Result<Self, FormatError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(FormatError::InvalidHeadingLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The run of `=` that opens and closes a heading of this level.
    pub fn delimiter(self) -> &'static str {
        &"======"[..self.0 as usize]
    }

    pub fn attribute(self) -> Attribute {
        Attribute::heading(self)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = FormatError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line-start marker of a wikitext list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    Bullet,
    Number,
}

impl ListMarker {
    pub fn char(self) -> char {
        match self {
            ListMarker::Bullet => '*',
            ListMarker::Number => '#',
        }
    }

    pub fn attribute(self) -> Attribute {
        match self {
            ListMarker::Bullet => Attribute::ListBullet,
            ListMarker::Number => Attribute::ListNumber,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(ListMarker::Bullet),
            '#' => Some(ListMarker::Number),
            _ => None,
        }
    }
}

/// A toolbar command the engine knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatAction {
    Bold,
    Italic,
    Template,
    Reference,
    Superscript,
    Subscript,
    Underline,
    Strikethrough,
    Heading(HeadingLevel),
    List(ListMarker),
    Indent,
    Unindent,
}

impl FormatAction {
    /// Delimiters for the paired styles; `None` for line-level actions.
    pub fn pair(self) -> Option<DelimiterPair> {
        match self {
            FormatAction::Bold => Some(DelimiterPair::BOLD),
            FormatAction::Italic => Some(DelimiterPair::ITALIC),
            FormatAction::Template => Some(DelimiterPair::TEMPLATE),
            FormatAction::Reference => Some(DelimiterPair::REFERENCE),
            FormatAction::Superscript => Some(DelimiterPair::SUPERSCRIPT),
            FormatAction::Subscript => Some(DelimiterPair::SUBSCRIPT),
            FormatAction::Underline => Some(DelimiterPair::UNDERLINE),
            FormatAction::Strikethrough => Some(DelimiterPair::STRIKETHROUGH),
            FormatAction::Heading(_)
            | FormatAction::List(_)
            | FormatAction::Indent
            | FormatAction::Unindent => None,
        }
    }
}

impl fmt::Display for FormatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatAction::Bold => f.write_str("bold"),
            FormatAction::Italic => f.write_str("italic"),
            FormatAction::Template => f.write_str("template"),
            FormatAction::Reference => f.write_str("reference"),
            FormatAction::Superscript => f.write_str("superscript"),
            FormatAction::Subscript => f.write_str("subscript"),
            FormatAction::Underline => f.write_str("underline"),
            FormatAction::Strikethrough => f.write_str("strikethrough"),
            FormatAction::Heading(level) => write!(f, "heading{level}"),
            FormatAction::List(ListMarker::Bullet) => f.write_str("bullet"),
            FormatAction::List(ListMarker::Number) => f.write_str("number"),
            FormatAction::Indent => f.write_str("indent"),
            FormatAction::Unindent => f.write_str("unindent"),
        }
    }
}

impl FromStr for FormatAction {
    type Err = FormatError;

    /// Parses the names printed by `Display`, case-insensitively.
    ///
    /// Headings accept `heading3`, `heading-3` and `h3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let action = match name.as_str() {
            "bold" => FormatAction::Bold,
            "italic" => FormatAction::Italic,
            "template" => FormatAction::Template,
            "reference" | "ref" => FormatAction::Reference,
            "superscript" | "sup" => FormatAction::Superscript,
            "subscript" | "sub" => FormatAction::Subscript,
            "underline" => FormatAction::Underline,
            "strikethrough" => FormatAction::Strikethrough,
            "bullet" => FormatAction::List(ListMarker::Bullet),
            "number" => FormatAction::List(ListMarker::Number),
            "indent" => FormatAction::Indent,
            "unindent" => FormatAction::Unindent,
            other => {
                let digits = other
                    .strip_prefix("heading")
                    .or_else(|| other.strip_prefix('h'))
                    .map(|rest| rest.trim_start_matches('-'))
                    .filter(|rest| !rest.is_empty())
                    .ok_or_else(|| FormatError::UnknownAction(s.to_string()))?;
                let level: u8 = digits
                    .parse()
                    .map_err(|_| FormatError::UnknownAction(s.to_string()))?;
                FormatAction::Heading(HeadingLevel::new(level)?)
            }
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, "==")]
    #[case(3, "===")]
    #[case(6, "======")]
    fn heading_delimiter_has_one_equals_per_level(#[case] level: u8, #[case] delimiter: &str) {
        assert_eq!(HeadingLevel::new(level).unwrap().delimiter(), delimiter);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    fn heading_level_outside_range_is_rejected(#[case] level: u8) {
        assert_eq!(
            HeadingLevel::new(level),
            Err(FormatError::InvalidHeadingLevel(level))
        );
    }

    #[rstest]
    #[case("bold", FormatAction::Bold)]
    #[case("Italic", FormatAction::Italic)]
    #[case("ref", FormatAction::Reference)]
    #[case("heading4", FormatAction::Heading(HeadingLevel(4)))]
    #[case("heading-5", FormatAction::Heading(HeadingLevel(5)))]
    #[case("h2", FormatAction::Heading(HeadingLevel(2)))]
    #[case("bullet", FormatAction::List(ListMarker::Bullet))]
    #[case("unindent", FormatAction::Unindent)]
    fn parses_action_names(#[case] input: &str, #[case] expected: FormatAction) {
        assert_eq!(input.parse::<FormatAction>(), Ok(expected));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let actions = [
            FormatAction::Strikethrough,
            FormatAction::Heading(HeadingLevel(6)),
            FormatAction::List(ListMarker::Number),
            FormatAction::Indent,
        ];
        for action in actions {
            assert_eq!(action.to_string().parse::<FormatAction>(), Ok(action));
        }
    }

    #[rstest]
    #[case("blink")]
    #[case("heading")]
    #[case("hx")]
    fn rejects_unknown_actions(#[case] input: &str) {
        assert_eq!(
            input.parse::<FormatAction>(),
            Err(FormatError::UnknownAction(input.to_string()))
        );
    }

    #[test]
    fn heading_one_is_invalid_not_unknown() {
        assert_eq!(
            "heading1".parse::<FormatAction>(),
            Err(FormatError::InvalidHeadingLevel(1))
        );
    }
}
