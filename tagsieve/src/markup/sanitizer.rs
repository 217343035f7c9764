use core::fmt;

use tracing::{debug, trace};

use super::attributes::Attributes;
use super::elements::is_self_closing;
use super::stack::IllegalStack;
use super::tokenizer::{Token, Tokenizer};
use crate::config::SanitizerConfig;

/// Whether a [`Sanitizer`] is currently writing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizerState {
    /// No disallowed ancestor is open; allowed tokens are written out.
    Active,
    /// A disallowed tag is open; everything is dropped until enough close
    /// tags have been seen.
    Suppressing,
}

impl fmt::Display for SanitizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizerState::Active => write!(f, "Active"),
            SanitizerState::Suppressing => write!(f, "Suppressing"),
        }
    }
}

/// Whitelist filter over the token stream.
///
/// Output accumulates across calls to [`sanitize`](Self::sanitize) until
/// [`reset`](Self::reset) is called.
///
/// ```
/// use tagsieve::{Sanitizer, SanitizerConfig};
///
/// let config = SanitizerConfig::default().with_allowed_tags(["p"]);
/// let mut sanitizer = Sanitizer::new(config);
/// sanitizer.sanitize("<p>hi</p><script>bad</script>");
/// assert_eq!(sanitizer.result(), "<p>hi</p>");
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer {
    config: SanitizerConfig,
    output: String,
    illegal: IllegalStack,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl Sanitizer {
    pub fn new(config: SanitizerConfig) -> Self {
        // Tag names are compared lowercased, so the whitelist is too.
        let config = SanitizerConfig {
            allowed_tags: config.allowed_tags.map(|tags| tags.lowercased()),
            allowed_attributes: config.allowed_attributes,
        };
        Sanitizer {
            config,
            output: String::new(),
            illegal: IllegalStack::new(),
        }
    }

    pub fn allow_all() -> Self {
        Self::new(SanitizerConfig::allow_all())
    }

    /// Tokenizes `markup` and appends the allowed parts to the output.
    pub fn sanitize(&mut self, markup: &str) {
        let mut tokens = 0usize;
        for token in Tokenizer::new(markup) {
            tokens += 1;
            self.handle(token);
        }
        debug!(
            input_len = markup.len(),
            output_len = self.output.len(),
            tokens,
            depth = self.illegal.len(),
            "sanitize pass complete"
        );
    }

    /// Applies one token to the output and the suppression stack.
    pub fn handle(&mut self, token: Token<'_>) {
        match token {
            Token::OpenTag {
                name, attributes, ..
            } => self.on_open(name, &attributes),
            Token::CloseTag { name, .. } => self.on_close(&name),
            // Comments go out as written, delimiters included.
            Token::Comment { raw, .. } => self.on_text(raw),
            Token::Text(text) => self.on_text(text),
        }
    }

    fn on_open(&mut self, name: String, attributes: &Attributes) {
        if !self.config.is_allowed_tag(&name) {
            if !is_self_closing(&name) {
                trace!(tag = %name, depth = self.illegal.len() + 1, "suppressing");
                self.illegal.push(name);
            }
            return;
        }

        if !self.illegal.is_empty() {
            return;
        }

        self.output.push('<');
        self.output.push_str(&name);
        match &self.config.allowed_attributes {
            Some(allowed) => attributes.retain_allowed(allowed).write_to(&mut self.output),
            None => attributes.write_to(&mut self.output),
        }
        if is_self_closing(&name) {
            self.output.push_str(" /");
        }
        self.output.push('>');
    }

    fn on_close(&mut self, name: &str) {
        if let Some(popped) = self.illegal.pop() {
            trace!(tag = %popped, closed_by = %name, depth = self.illegal.len(), "unwinding");
            return;
        }

        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push('>');
    }

    fn on_text(&mut self, text: &str) {
        if self.illegal.is_empty() {
            self.output.push_str(text);
        }
    }

    /// The output accumulated so far.
    pub fn result(&self) -> &str {
        &self.output
    }

    pub fn into_result(self) -> String {
        self.output
    }

    /// Clears the output and the suppression stack, keeping the config.
    pub fn reset(&mut self) {
        self.output.clear();
        self.illegal.clear();
    }

    pub fn suppression_depth(&self) -> usize {
        self.illegal.len()
    }

    pub fn is_suppressing(&self) -> bool {
        !self.illegal.is_empty()
    }

    pub fn state(&self) -> SanitizerState {
        if self.is_suppressing() {
            SanitizerState::Suppressing
        } else {
            SanitizerState::Active
        }
    }

    pub fn illegal_stack(&self) -> &IllegalStack {
        &self.illegal
    }
}
