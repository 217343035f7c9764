pub use self::attributes::{Attribute, Attributes};
pub use self::elements::{is_boolean_attribute, is_self_closing, BOOLEAN_ATTRIBUTES, SELF_CLOSING_TAGS};
pub use self::sanitizer::{Sanitizer, SanitizerState};
pub use self::stack::IllegalStack;
pub use self::tokenizer::{Token, TokenKind, Tokenizer};

mod attributes;
mod elements;
mod sanitizer;
mod stack;
pub(crate) mod tokenizer;
