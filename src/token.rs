//! Token model shared by the scanner and the renderer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three markup delimiter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Delimiter {
    /// `*`, rendered as bold.
    Asterisk,
    /// `_`, rendered as italic.
    Underscore,
    /// `~`, rendered as strikethrough.
    Tilde,
}

impl Delimiter {
    /// The literal character this delimiter degrades to in plain text.
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Asterisk => '*',
            Delimiter::Underscore => '_',
            Delimiter::Tilde => '~',
        }
    }

    /// Map a markup character to its delimiter kind.
    pub fn from_char(c: char) -> Option<Delimiter> {
        match c {
            '*' => Some(Delimiter::Asterisk),
            '_' => Some(Delimiter::Underscore),
            '~' => Some(Delimiter::Tilde),
            _ => None,
        }
    }

    /// Stable index used for presence-flag arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Delimiter::Asterisk => 0,
            Delimiter::Underscore => 1,
            Delimiter::Tilde => 2,
        }
    }
}

/// A lexical token produced by [`scan`](crate::scan).
///
/// The repertoire is intentionally closed: text runs, line breaks, and the
/// three markup delimiters. A `Text` payload is never empty; the scanner
/// only flushes non-empty buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// A run of literal text.
    Text(String),
    /// A line break outside of a URL.
    Newline,
    /// A delimiter occurrence eligible to act as markup.
    Markup(Delimiter),
}

impl Token {
    /// Shorthand for building a text token.
    pub fn text(value: impl Into<String>) -> Token {
        Token::Text(value.into())
    }
}
