//! Ordered document type for parsed key-value text.
//!
//! This module provides [`Document`], a wrapper around [`IndexMap`] that
//! maintains encounter order for pairs. Order matters here: serialization
//! must emit pairs in the order the parser first saw their keys, so a plain
//! `HashMap` is not an option.
//!
//! ## Why IndexMap?
//!
//! The crate uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: pairs serialize in a consistent order
//! - **Encounter order**: iteration follows the order keys first appeared
//! - **Stable overwrite**: re-inserting a key replaces its value but keeps
//!   the slot where the key was first seen
//!
//! ## Examples
//!
//! ```rust
//! use kvline::Document;
//!
//! let mut doc = Document::new();
//! doc.insert("name".to_string(), "Alice".to_string());
//! doc.insert("role".to_string(), "admin".to_string());
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.get("name"), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An ordered collection of key-value pairs parsed from one input line.
///
/// This is a thin wrapper around [`IndexMap`] with string keys and values.
/// Keys are unique; inserting an existing key overwrites its value while
/// keeping the original position among the other keys.
///
/// A `Document` is constructed fresh by [`parse`](crate::parse) and is
/// never mutated by [`serialize`](crate::serialize).
///
/// # Examples
///
/// ```rust
/// use kvline::Document;
///
/// let mut doc = Document::new();
/// doc.insert("first".to_string(), "1".to_string());
/// doc.insert("second".to_string(), "2".to_string());
/// doc.insert("first".to_string(), "updated".to_string());
///
/// // Overwrite keeps the original slot
/// let keys: Vec<_> = doc.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(doc.get("first"), Some("updated"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, String>);

impl Document {
    /// Creates an empty `Document`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::Document;
    ///
    /// let doc = Document::new();
    /// assert!(doc.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Creates an empty `Document` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(IndexMap::with_capacity(capacity))
    }

    /// Inserts a pair into the document.
    ///
    /// If the document already contained this key, the old value is
    /// returned and the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::Document;
    ///
    /// let mut doc = Document::new();
    /// assert!(doc.insert("key".to_string(), "a".to_string()).is_none());
    /// assert_eq!(doc.insert("key".to_string(), "b".to_string()), Some("a".to_string()));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the value for a key, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvline::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.insert("key".to_string(), "value".to_string());
    /// assert_eq!(doc.get("key"), Some("value"));
    /// assert_eq!(doc.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the document contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of pairs in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in encounter order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in encounter order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the pairs, in encounter order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl fmt::Display for Document {
    /// Renders the document in its wire form without validating keys.
    ///
    /// Use [`serialize`](crate::serialize) when the output must be
    /// guaranteed to re-parse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: \"{}\"", key, crate::ser::escape_value(value))?;
        }
        Ok(())
    }
}

impl From<HashMap<String, String>> for Document {
    fn from(map: HashMap<String, String>) -> Self {
        Document(map.into_iter().collect())
    }
}

impl From<IndexMap<String, String>> for Document {
    fn from(map: IndexMap<String, String>) -> Self {
        Document(map)
    }
}

impl From<Document> for IndexMap<String, String> {
    fn from(doc: Document) -> Self {
        doc.0
    }
}

impl IntoIterator for Document {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for Document {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut doc = Document::new();
        doc.insert("a".to_string(), "1".to_string());
        doc.insert("b".to_string(), "2".to_string());
        doc.insert("a".to_string(), "3".to_string());

        let pairs: Vec<_> = doc.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_display_matches_wire_form() {
        let mut doc = Document::new();
        doc.insert("key".to_string(), "fo \" bar".to_string());
        assert_eq!(doc.to_string(), r#"key: "fo \" bar""#);
    }

    #[test]
    fn test_from_iterator_order() {
        let doc: Document = vec![
            ("z".to_string(), "1".to_string()),
            ("a".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
