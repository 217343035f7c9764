use core::fmt;

use smallvec::SmallVec;

/// Names of the disallowed tags whose subtrees are currently being dropped.
///
/// `pop` removes the most recent entry whatever tag is being closed; the
/// stack only counts nesting depth, it never matches names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IllegalStack {
    entries: SmallVec<[String; 8]>,
}

impl IllegalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: String) {
        self.entries.push(name);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently pushed name.
    pub fn top(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Oldest name still on the stack.
    pub fn bottom(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for IllegalStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for name in &self.entries {
            write!(f, "{} ", name)?;
        }
        write!(f, "]")
    }
}
