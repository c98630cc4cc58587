//! Ordered algorithm-name to hex-digest mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Checksums keyed by canonical algorithm name, in insertion order.
///
/// Inserting a name that is already present replaces its value in place,
/// so the key keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumMap {
    entries: Vec<(String, String)>,
}

impl ChecksumMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding exactly one entry.
    pub fn single(name: impl Into<String>, hex: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(name, hex);
        map
    }

    pub fn insert(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        let name = name.into();
        let hex = hex.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = hex,
            None => self.entries.push((name, hex)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ChecksumMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for ChecksumMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
