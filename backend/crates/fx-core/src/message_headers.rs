use serde::{Deserialize, Serialize};

/// Header values are arbitrary JSON values; the channel never interprets them.
pub type HeaderValue = serde_json::Value;

/// Ordered header map. Keys are unique and case-sensitive, iteration follows
/// first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageHeaders {
    entries: Vec<(String, HeaderValue)>,
}

impl MessageHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a header value by exact name
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Get a header value as a string slice, if it is a JSON string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(HeaderValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Insert or replace. A replaced header keeps its original position.
    pub(crate) fn insert(&mut self, name: String, value: HeaderValue) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }
}
