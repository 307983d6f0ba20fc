//! Stack-based renderer: resolves delimiter pairs into nested HTML spans.
//!
//! Tokens are pushed onto a stack; when a delimiter of an already-open kind
//! arrives, the stack is popped back to the matching opener and everything
//! in between becomes a styled span. Unmatched delimiters degrade to their
//! literal characters, so malformed input never fails to render.

use std::fmt;

use crate::token::{Delimiter, Token};

/// CSS classes applied to rendered spans, one per delimiter kind.
///
/// Partial overrides use struct-update syntax:
///
/// ```rust
/// use markify::StyleSheet;
///
/// let styles = StyleSheet {
///     bold: "bbb".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// Class for `*bold*` spans.
    pub bold: String,
    /// Class for `_italic_` spans.
    pub italic: String,
    /// Class for `~strikethrough~` spans.
    pub strike: String,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            bold: "text-bold".to_string(),
            italic: "text-italic".to_string(),
            strike: "text-strike".to_string(),
        }
    }
}

impl StyleSheet {
    /// The class used for spans opened by `delimiter`.
    pub fn class_for(&self, delimiter: Delimiter) -> &str {
        match delimiter {
            Delimiter::Asterisk => &self.bold,
            Delimiter::Underscore => &self.italic,
            Delimiter::Tilde => &self.strike,
        }
    }
}

/// Errors raised for token streams that violate the scanner's emission
/// contract.
///
/// Streams produced by [`scan`](crate::scan) never trigger these; the
/// renderer raises them instead of silently corrupting output when its
/// bookkeeping and the stack disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A closing delimiter drained the whole stack without finding its
    /// opener.
    UnmatchedDelimiter(Delimiter),
    /// A newline token was found on the render stack. Newlines must flush
    /// the stack, never sit on it.
    NewlineOnStack,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedDelimiter(delimiter) => write!(
                f,
                "malformed token stream: no opening `{}` on the stack",
                delimiter.as_char()
            ),
            Self::NewlineOnStack => {
                write!(f, "malformed token stream: newline token on the stack")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Presence flags: which delimiter kinds currently have an unmatched opener
/// on the stack. Kept exactly in sync with the stack contents so closing a
/// pair does not require searching the stack.
#[derive(Debug, Default)]
struct OpenDelimiters([bool; 3]);

impl OpenDelimiters {
    fn contains(&self, delimiter: Delimiter) -> bool {
        self.0[delimiter.index()]
    }

    fn set(&mut self, delimiter: Delimiter, open: bool) {
        self.0[delimiter.index()] = open;
    }

    fn clear(&mut self) {
        self.0 = [false; 3];
    }
}

/// Render a token stream into HTML, wrapping matched delimiter pairs in
/// `<span>` elements.
///
/// `styles` selects the CSS classes; `None` uses [`StyleSheet::default`].
/// Span content is not HTML-escaped: raw HTML between delimiters passes
/// through verbatim.
///
/// An `Err` is only possible for hand-built token streams that break the
/// scanner's emission contract; see [`RenderError`].
pub fn render(tokens: &[Token], styles: Option<&StyleSheet>) -> Result<String, RenderError> {
    let default_styles;
    let styles = match styles {
        Some(styles) => styles,
        None => {
            default_styles = StyleSheet::default();
            &default_styles
        }
    };

    let mut stack: Vec<Token> = Vec::new();
    let mut open = OpenDelimiters::default();

    for token in tokens {
        match token {
            Token::Text(value) => stack.push(Token::Text(value.clone())),

            Token::Markup(delimiter) => {
                if open.contains(*delimiter) {
                    close_span(&mut stack, &mut open, *delimiter, styles)?;
                } else {
                    stack.push(Token::Markup(*delimiter));
                    open.set(*delimiter, true);
                }
            }

            // Markup never applies across a line break: flush the stack so
            // every delimiter still open here degrades to its literal
            // character.
            Token::Newline => {
                let mut line = consume_stack(&mut stack)?;
                line.push('\n');
                stack.push(Token::Text(line));
                open.clear();
            }
        }
    }

    consume_stack(&mut stack)
}

/// Pop the stack back to the opening `delimiter` and push the text in
/// between back as one styled span. Delimiters of other kinds passed over
/// on the way down degrade to literal characters inside the span.
fn close_span(
    stack: &mut Vec<Token>,
    open: &mut OpenDelimiters,
    delimiter: Delimiter,
    styles: &StyleSheet,
) -> Result<(), RenderError> {
    // Collected in pop order, i.e. reverse document order.
    let mut parts: Vec<String> = Vec::new();

    loop {
        let top = stack
            .pop()
            .ok_or(RenderError::UnmatchedDelimiter(delimiter))?;
        match top {
            Token::Text(value) => parts.push(value),

            Token::Markup(kind) if kind == delimiter => {
                if parts.is_empty() {
                    // The opener and closer were adjacent, e.g. the first
                    // two characters of `**hello`. Degrade to the doubled
                    // literal character instead of an empty span.
                    let c = delimiter.as_char();
                    stack.push(Token::Text(format!("{c}{c}")));
                } else {
                    log::debug!("Resolved {:?} span of {} parts", delimiter, parts.len());
                    let mut span = format!("<span class=\"{}\">", styles.class_for(delimiter));
                    for part in parts.iter().rev() {
                        span.push_str(part);
                    }
                    span.push_str("</span>");
                    stack.push(Token::Text(span));
                }
                open.set(delimiter, false);
                return Ok(());
            }

            Token::Markup(kind) => {
                parts.push(kind.as_char().to_string());
                open.set(kind, false);
            }

            Token::Newline => return Err(RenderError::NewlineOnStack),
        }
    }
}

/// Flush the stack into one literal string, bottom to top. Text entries
/// contribute their value; leftover markup entries contribute their single
/// literal character.
fn consume_stack(stack: &mut Vec<Token>) -> Result<String, RenderError> {
    let mut out = String::new();
    for token in stack.drain(..) {
        match token {
            Token::Text(value) => out.push_str(&value),
            Token::Markup(delimiter) => out.push(delimiter.as_char()),
            Token::Newline => return Err(RenderError::NewlineOnStack),
        }
    }
    Ok(out)
}
