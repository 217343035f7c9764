use smallvec::SmallVec;

use super::elements::is_boolean_attribute;
use super::tokenizer::{is_attr_name_byte, scan_bytes, value_after};
use crate::config::NameSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Ordered attribute map. A repeated name keeps its first position and takes
/// the last value given to it. A later occurrence without a value leaves the
/// earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: SmallVec<[Attribute; 4]>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw attribute list captured after a tag name.
    ///
    /// Each match is a name (`[A-Za-z0-9_:-]+`) optionally followed by
    /// `=` and a double-quoted, single-quoted or bare value. Anything else
    /// is skipped. Names without a value get an empty one, and boolean
    /// attributes always take their own name as value.
    ///
    /// ```
    /// use tagsieve::Attributes;
    ///
    /// let attrs = Attributes::parse(r#" id="a" class='b c' disabled=no"#);
    /// assert_eq!(attrs.get("class"), Some("b c"));
    /// assert_eq!(attrs.get("disabled"), Some("disabled"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut attrs = Self::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if !is_attr_name_byte(bytes[pos]) {
                pos += 1;
                continue;
            }

            let name_end = scan_bytes(bytes, pos, is_attr_name_byte);
            let name = &raw[pos..name_end];
            let span = value_after(raw, name_end);
            pos = span.as_ref().map_or(name_end, |span| span.end);

            if is_boolean_attribute(name) {
                attrs.insert(name, name);
            } else if let Some(span) = span {
                attrs.insert(name, span.value);
            } else if attrs.get(name).is_none() {
                attrs.insert(name, "");
            }
        }

        attrs
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        match self.items.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => self.items.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Attribute> {
        self.items.iter()
    }

    /// Builds a new map holding only the attributes named in `allowed`, in
    /// their original order.
    pub fn retain_allowed(&self, allowed: &NameSet) -> Attributes {
        Attributes {
            items: self
                .items
                .iter()
                .filter(|attr| allowed.contains(&attr.name))
                .cloned()
                .collect(),
        }
    }

    /// Appends ` name="value"` for every attribute. Values are written as-is.
    pub fn write_to(&self, out: &mut String) {
        for attr in &self.items {
            out.push(' ');
            out.push_str(&attr.name);
            out.push_str("=\"");
            out.push_str(&attr.value);
            out.push('"');
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
