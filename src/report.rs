//! The check report.
//!
//! Maps each selector to whether it matched at least one element. Keys keep
//! the order in which they were first inserted; inserting an existing key
//! replaces its value in place, so the last duplicate in a checks list wins.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

/// Indentation used for the printed report.
const INDENT: &[u8] = b"    ";

/// Selector → presence mapping produced by evaluating a checks list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    entries: Vec<(String, bool)>,
}

impl CheckReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `selector`, overwriting any earlier outcome.
    pub fn insert(&mut self, selector: impl Into<String>, present: bool) {
        let selector = selector.into();
        match self.entries.iter_mut().find(|(key, _)| *key == selector) {
            Some((_, value)) => *value = present,
            None => self.entries.push((selector, present)),
        }
    }

    /// Outcome recorded for `selector`, if it was checked.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(_, present)| *present)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(selector, present)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(key, present)| (key.as_str(), *present))
    }

    /// Number of selectors that matched.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|(_, present)| *present).count()
    }

    /// Number of selectors that did not match.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.len() - self.passed()
    }

    /// Render as a JSON object indented by four spaces.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, present) in &self.entries {
            map.serialize_entry(selector, present)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for CheckReport {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut report = Self::new();
        for (selector, present) in iter {
            report.insert(selector, present);
        }
        report
    }
}
