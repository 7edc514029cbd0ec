use super::action::HeadingLevel;
use super::attribute::Attribute;

/// Literal start and end markers wrapping formatted wikitext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPair {
    pub start: &'static str,
    pub end: &'static str,
    pub attribute: Attribute,
}

impl DelimiterPair {
    pub const BOLD_ITALIC: Self = Self::symmetric("'''''", Attribute::BoldItalic);
    pub const BOLD: Self = Self::symmetric("'''", Attribute::Bold);
    pub const ITALIC: Self = Self::symmetric("''", Attribute::Italic);
    pub const TEMPLATE: Self = Self::new("{{", "}}", Attribute::Template);
    pub const REFERENCE: Self = Self::new("<ref>", "</ref>", Attribute::Reference);
    pub const SUPERSCRIPT: Self = Self::new("<sup>", "</sup>", Attribute::Superscript);
    pub const SUBSCRIPT: Self = Self::new("<sub>", "</sub>", Attribute::Subscript);
    pub const UNDERLINE: Self = Self::new("<u>", "</u>", Attribute::Underline);
    pub const STRIKETHROUGH: Self = Self::new("<s>", "</s>", Attribute::Strikethrough);

    pub const fn new(start: &'static str, end: &'static str, attribute: Attribute) -> Self {
        Self {
            start,
            end,
            attribute,
        }
    }

    const fn symmetric(token: &'static str, attribute: Attribute) -> Self {
        Self::new(token, token, attribute)
    }

    pub fn heading(level: HeadingLevel) -> Self {
        Self::symmetric(level.delimiter(), level.attribute())
    }

    /// Symmetric pairs cannot tell an opening marker from a closing one,
    /// so expansion only stops early on asymmetric pairs.
    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }

    /// Bytes a wrap adds around the inner text.
    pub fn wrap_len(&self) -> usize {
        self.start.len() + self.end.len()
    }

    pub fn wrap(&self, inner: &str) -> String {
        let mut wrapped = String::with_capacity(inner.len() + self.wrap_len());
        wrapped.push_str(self.start);
        wrapped.push_str(inner);
        wrapped.push_str(self.end);
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_pair_uses_level_delimiter() {
        let pair = DelimiterPair::heading(HeadingLevel::new(4).unwrap());
        assert_eq!(pair.start, "====");
        assert!(pair.is_symmetric());
        assert_eq!(pair.attribute, Attribute::Heading4);
    }

    #[test]
    fn tag_pairs_are_asymmetric() {
        assert!(!DelimiterPair::REFERENCE.is_symmetric());
        assert!(DelimiterPair::ITALIC.is_symmetric());
    }

    #[test]
    fn wrap_surrounds_inner_text() {
        assert_eq!(DelimiterPair::SUBSCRIPT.wrap("2"), "<sub>2</sub>");
        assert_eq!(DelimiterPair::TEMPLATE.wrap(""), "{{}}");
    }
}
