//! Convert lightweight inline markup into styled HTML spans.
//!
//! `*bold*`, `_italic_`, and `~strikethrough~` runs become `<span>`
//! elements; ordinary punctuation, URLs, and malformed or unmatched
//! delimiters pass through untouched as literal text.
//!
//! The pipeline has two stages: [`scan`] classifies characters into tokens
//! under word-boundary and URL-avoidance rules, and [`render`] resolves
//! delimiter pairs into (possibly nested) spans with an explicit stack.
//! [`markify`] chains the two.
//!
//! ```rust
//! use markify::markify;
//!
//! let html = markify("a *b* c", None);
//! assert_eq!(html, "a <span class=\"text-bold\">b</span> c");
//! ```

pub mod renderer;
pub mod scanner;
pub mod token;

pub use renderer::RenderError;
pub use renderer::StyleSheet;
pub use renderer::render;
pub use scanner::scan;
pub use token::Delimiter;
pub use token::Token;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Convert `text` with inline markup to HTML.
///
/// Equivalent to `render(&scan(text), styles)`. Passing `None` for `styles`
/// uses the default class mapping (`text-bold`, `text-italic`,
/// `text-strike`).
///
/// # Examples
///
/// ```rust
/// use markify::{StyleSheet, markify};
///
/// assert_eq!(
///     markify("*a _b_ c*", None),
///     "<span class=\"text-bold\">a <span class=\"text-italic\">b</span> c</span>"
/// );
///
/// let styles = StyleSheet {
///     bold: "bbb".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(markify("*x*", Some(&styles)), "<span class=\"bbb\">x</span>");
/// ```
pub fn markify(text: &str, styles: Option<&StyleSheet>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    match render(&scan(text), styles) {
        Ok(html) => html,
        // scan upholds the renderer's token stream contract
        Err(err) => unreachable!("scanner produced a malformed token stream: {err}"),
    }
}
