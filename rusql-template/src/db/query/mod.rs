pub mod builder;
pub mod condition;
pub mod format;
pub mod statement;

use std::fmt;

use super::PLACEHOLDER;
use crate::{Error, Result};

/// Selects how the argument bound to a placeholder is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `?`
    Default,
    /// `?d`
    Integer,
    /// `?f`
    Float,
    /// `?a`
    Collection,
    /// `?#`
    Identifier,
}

impl Specifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Integer),
            'f' => Some(Self::Float),
            'a' => Some(Self::Collection),
            '#' => Some(Self::Identifier),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Default => None,
            Self::Integer => Some('d'),
            Self::Float => Some('f'),
            Self::Collection => Some('a'),
            Self::Identifier => Some('#'),
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{PLACEHOLDER}{c}"),
            None => write!(f, "{PLACEHOLDER}"),
        }
    }
}

/// Marker characters of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub placeholder: char,
    pub block_open: char,
    pub block_close: char,
}

impl Syntax {
    pub fn new(placeholder: char, block_open: char, block_close: char) -> Result<Self> {
        if placeholder == block_open || placeholder == block_close || block_open == block_close {
            return Err(Error::InvalidSyntax(format!(
                "markers must be distinct, got {placeholder:?}, {block_open:?} and {block_close:?}"
            )));
        }
        if Specifier::from_char(block_open).is_some() || Specifier::from_char(block_close).is_some()
        {
            return Err(Error::InvalidSyntax(format!(
                "block markers {block_open:?} and {block_close:?} must not be specifier characters"
            )));
        }
        Ok(Self {
            placeholder,
            block_open,
            block_close,
        })
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER,
            block_open: '{',
            block_close: '}',
        }
    }
}

/// Output of the substitution pass, consumed by the block resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum Span<'t> {
    /// Template text outside placeholders.
    Literal(&'t str),
    /// A placeholder filled with its formatted argument. `omits` is set when the argument is a
    /// collection holding the sentinel: the text is kept, but an enclosing block is dropped.
    Rendered { text: String, omits: bool },
    /// A placeholder whose argument was the sentinel.
    Omitted,
    Open,
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifier_chars() {
        for c in ['d', 'f', 'a', '#'] {
            let specifier = Specifier::from_char(c).unwrap();
            assert_eq!(specifier.as_char(), Some(c));
        }
        assert_eq!(Specifier::from_char('x'), None);
        assert_eq!(Specifier::Identifier.to_string(), "?#");
        assert_eq!(Specifier::Default.to_string(), "?");
    }

    #[test]
    fn test_syntax_rejects_clashing_markers() {
        assert!(Syntax::new('?', '[', ']').is_ok());
        assert!(matches!(
            Syntax::new('?', '?', '}'),
            Err(Error::InvalidSyntax(_))
        ));
        assert!(matches!(
            Syntax::new('?', '{', '{'),
            Err(Error::InvalidSyntax(_))
        ));
        assert!(matches!(
            Syntax::new(':', 'd', '}'),
            Err(Error::InvalidSyntax(_))
        ));
    }
}
