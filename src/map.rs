//! Ordered map type for decoded properties.
//!
//! This module provides [`PropertiesMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order. `.properties` files are ordered documents, so
//! storing a map and loading it back should keep the pairs in the same order.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: pairs serialize in a consistent order
//! - **Last-wins semantics**: a duplicate key overwrites the value while
//!   keeping the key's original position, like the Java `Properties` table
//! - **Iteration order**: the writer consumes pairs in insertion order
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::PropertiesMap;
//!
//! let mut map = PropertiesMap::new();
//! map.insert("host".to_string(), "localhost".to_string());
//! map.insert("port".to_string(), "8080".to_string());
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("host"), Some("localhost"));
//! ```

use crate::reader::PropertySink;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered map of property keys to values.
///
/// This is the default sink for the reader and the default source for the
/// writer; any type implementing [`PropertySink`] or yielding `(key, value)`
/// pairs works in its place.
///
/// # Examples
///
/// ```rust
/// use javaprops::PropertiesMap;
///
/// let mut map = PropertiesMap::new();
/// map.insert("first".to_string(), "1".to_string());
/// map.insert("second".to_string(), "2".to_string());
///
/// let keys: Vec<_> = map.keys().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertiesMap(IndexMap<String, String>);

impl PropertiesMap {
    /// Creates an empty `PropertiesMap`.
    #[must_use]
    pub fn new() -> Self {
        PropertiesMap(IndexMap::new())
    }

    /// Creates an empty `PropertiesMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropertiesMap(IndexMap::with_capacity(capacity))
    }

    /// Returns the number of pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a pair, returning the previous value if the key was present.
    ///
    /// A duplicate key keeps its original position (last-wins on the value).
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Removes `key`, preserving the order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

impl PropertySink for PropertiesMap {
    fn set(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl FromIterator<(String, String)> for PropertiesMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        PropertiesMap(iter.into_iter().collect())
    }
}

impl Extend<(String, String)> for PropertiesMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PropertiesMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertiesMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for PropertiesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertiesMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = PropertiesMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PropertiesMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
