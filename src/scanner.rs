//! Lexical scanner: classifies input characters into markup tokens.
//!
//! A delimiter character only counts as markup when it sits along a word
//! boundary, and never inside a URL. Everything else accumulates into text
//! runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::token::{Delimiter, Token};

/// Matches the start of a URL (`scheme://`).
static URL_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z]+://").expect("hard-coded pattern"));

/// Return whether `c` is a boundary character. `None` (the stream edge)
/// counts as a boundary.
///
/// The set is an explicit list: whitespace, sentence punctuation, bracket
/// and quotation variants, the markup characters themselves, hyphen, and
/// ellipsis forms. It deliberately differs from the general Unicode
/// punctuation categories.
fn is_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => {
            c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | '!'
                        | '?'
                        | '¡'
                        | '¿'
                        | '‽'
                        | '⸮'
                        | ';'
                        | ':'
                        | '&'
                        | '('
                        | ')'
                        | '{'
                        | '}'
                        | '['
                        | ']'
                        | '⟨'
                        | '⟩'
                        | '‹'
                        | '›'
                        | '«'
                        | '»'
                        | '\''
                        | '"'
                        | '‘'
                        | '’'
                        | '“'
                        | '”'
                        | '*'
                        | '~'
                        | '-'
                        | '_'
                        | '…'
                        | '⋯'
                        | '᠁'
                )
        }
    }
}

/// Return whether `c` terminates a URL. `None` (end of stream) counts as a
/// boundary.
///
/// Characters that may appear in a URL according to RFC 3986:
/// `A-Z a-z 0-9 - . _ ~ : / ? # [ ] @ ! $ & ' ( ) * + , ; = %`
fn is_url_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => {
            !(c.is_ascii_alphanumeric()
                || matches!(
                    c,
                    '-' | '.'
                        | '_'
                        | '~'
                        | ':'
                        | '/'
                        | '?'
                        | '#'
                        | '['
                        | ']'
                        | '@'
                        | '!'
                        | '$'
                        | '&'
                        | '\''
                        | '('
                        | ')'
                        | '*'
                        | '+'
                        | ','
                        | ';'
                        | '='
                        | '%'
                ))
        }
    }
}

/// Return whether `rest` starts a URL.
fn is_url_start(rest: &str) -> bool {
    URL_START.is_match(rest)
}

/// Flush the pending text buffer as a single text token, if non-empty.
fn flush_text(tokens: &mut Vec<Token>, buf: &mut String) {
    if !buf.is_empty() {
        tokens.push(Token::Text(std::mem::take(buf)));
    }
}

/// Split `text` into an ordered sequence of tokens.
///
/// Total and deterministic for any input; the empty string yields an empty
/// vector. Delimiter characters become [`Token::Markup`] only when the
/// character before or after them is a boundary (stream edges count), and
/// never inside a URL. A `\n` outside a URL becomes [`Token::Newline`] and
/// is not retained in any text token.
pub fn scan(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_url = false;

    for i in 0..chars.len() {
        let (offset, current) = chars[i];

        if !in_url {
            in_url = is_url_start(&text[offset..]);
        }

        // URLs have a narrower boundary set than markup, so while one is
        // being matched the delimiter rules are suspended entirely.
        if in_url {
            buf.push(current);
            if is_url_boundary(chars.get(i + 1).map(|&(_, c)| c)) {
                flush_text(&mut tokens, &mut buf);
                in_url = false;
            }
            continue;
        }

        let prev = if i > 0 { Some(chars[i - 1].1) } else { None };
        let next = chars.get(i + 1).map(|&(_, c)| c);

        if current == '\n' {
            flush_text(&mut tokens, &mut buf);
            tokens.push(Token::Newline);
        } else if let Some(delimiter) = Delimiter::from_char(current)
            && (is_boundary(prev) || is_boundary(next))
        {
            flush_text(&mut tokens, &mut buf);
            tokens.push(Token::Markup(delimiter));
        } else {
            buf.push(current);
        }
    }

    flush_text(&mut tokens, &mut buf);

    log::trace!("Scanned {} bytes into {} tokens", text.len(), tokens.len());

    tokens
}
