#![doc = include_str!("../README.md")]
//!
//! ## API Guide
//!
//! Most applications only need [`sanitize`]:
//!
//! ```
//! use tagsieve::{sanitize, SanitizerConfig};
//!
//! let config = SanitizerConfig::default()
//!     .with_allowed_tags(["p", "b"])
//!     .with_allowed_attributes(["id"]);
//! let clean = sanitize(r#"<p id="x" onclick="go()">hi <script>bad()</script></p>"#, &config);
//! assert_eq!(clean, r#"<p id="x">hi </p>"#);
//! ```
//!
//! The lower-level pieces are public for callers that want to drive a pass
//! themselves or inspect it:
//!
//! - [`Sanitizer`] - stateful filter with an explicit [`Sanitizer::reset`]
//! - [`Tokenizer`] - iterator over [`Token`]s of one input
//! - [`Attributes`] - parser for a raw attribute list
//! - [`IllegalStack`] - the suppression stack
//!
//! Sanitizing never fails. Markup the grammar does not recognise is passed
//! through as text, unknown attribute syntax is dropped, and mismatched
//! nesting is resolved by popping one suppression level per close tag.

use thiserror::Error;

pub mod config;
pub mod markup;

#[cfg(test)]
mod tests;

pub use config::{NameSet, SanitizerConfig};
pub use markup::{
    Attribute, Attributes, IllegalStack, Sanitizer, SanitizerState, Token, TokenKind, Tokenizer,
};

/// Errors raised while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid tag name `{0}`: expected ASCII letters, digits or `_`")]
    InvalidTagName(String),
    #[error("invalid attribute name `{0}`: expected ASCII letters, digits, `_`, `-` or `:`")]
    InvalidAttributeName(String),
}

/// Sanitizes `markup` in a single fresh pass.
///
/// # Examples
///
/// ```
/// use tagsieve::{sanitize, SanitizerConfig};
///
/// assert_eq!(sanitize("<BR>", &SanitizerConfig::allow_all()), "<br />");
/// ```
pub fn sanitize(markup: &str, config: &SanitizerConfig) -> String {
    let mut sanitizer = Sanitizer::new(config.clone());
    sanitizer.sanitize(markup);
    sanitizer.into_result()
}

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
