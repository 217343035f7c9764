//! Whitelist configuration.
//!
//! A [`SanitizerConfig`] holds two independent, optional [`NameSet`]s: one for
//! tag names and one for attribute names. `None` means "allow everything in
//! this category", while `Some(NameSet::new())` allows nothing.

use std::collections::btree_set;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::markup::tokenizer::{is_attr_name_byte, is_word_byte};
use crate::Error;

/// A closed set of permitted names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NameSet {
    names: BTreeSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.names.iter()
    }

    /// Returns a copy of this set with every name lowercased.
    pub fn lowercased(&self) -> Self {
        self.names.iter().map(|name| name.to_lowercase()).collect()
    }

    /// Parses a comma- or whitespace-separated list of tag names.
    ///
    /// Tag names must be non-empty runs of ASCII letters, digits or `_`;
    /// they are lowercased on the way in.
    ///
    /// ```
    /// use tagsieve::NameSet;
    ///
    /// let tags = NameSet::parse_tags("p, DIV b").unwrap();
    /// assert!(tags.contains("div"));
    /// assert_eq!(tags.len(), 3);
    /// ```
    pub fn parse_tags(list: &str) -> Result<Self, Error> {
        let mut set = Self::new();
        for name in split_list(list) {
            if !name.bytes().all(is_word_byte) {
                return Err(Error::InvalidTagName(name.to_string()));
            }
            let _ = set.insert(name.to_lowercase());
        }
        Ok(set)
    }

    /// Parses a comma- or whitespace-separated list of attribute names.
    ///
    /// Attribute names keep their case and may contain `-` and `:` in
    /// addition to word characters.
    pub fn parse_attributes(list: &str) -> Result<Self, Error> {
        let mut set = Self::new();
        for name in split_list(list) {
            if !name.bytes().all(is_attr_name_byte) {
                return Err(Error::InvalidAttributeName(name.to_string()));
            }
            let _ = set.insert(name);
        }
        Ok(set)
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|name| !name.is_empty())
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NameSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tag and attribute whitelists for a [`Sanitizer`](crate::Sanitizer).
///
/// The default configuration allows every tag and every attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SanitizerConfig {
    /// Permitted tag names, or `None` to permit all tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_tags: Option<NameSet>,
    /// Permitted attribute names, or `None` to permit all attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_attributes: Option<NameSet>,
}

impl SanitizerConfig {
    /// A configuration that lets every tag and attribute through.
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn with_allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_allowed_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Returns `true` if `name` passes the tag whitelist. `name` is expected
    /// to be lowercased already.
    pub fn is_allowed_tag(&self, name: &str) -> bool {
        self.allowed_tags
            .as_ref()
            .map_or(true, |tags| tags.contains(name))
    }

    pub fn is_allowed_attribute(&self, name: &str) -> bool {
        self.allowed_attributes
            .as_ref()
            .map_or(true, |attributes| attributes.contains(name))
    }
}
