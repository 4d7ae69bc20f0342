//! Shared mutable run state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The mutable string-keyed state threaded through every step of a run.
///
/// Steps are the only readers and writers; the runner passes it along
/// without inspecting or constraining its contents. Seeded by the caller at
/// build time (or empty), dropped with the runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineState {
    data: HashMap<String, serde_json::Value>,
}

impl PipelineState {
    /// Creates empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Gets a value as a string slice, if it is a JSON string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(serde_json::Value::as_str)
    }

    /// Inserts a value, returning the previous one if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Removes a value.
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Checks whether a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the state holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the state, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, serde_json::Value> {
        self.data
    }
}

impl From<HashMap<String, serde_json::Value>> for PipelineState {
    fn from(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut state = PipelineState::new();
        assert!(state.is_empty());

        state.insert("username", "ada");
        state.insert("attempts", 3);

        assert_eq!(state.get_str("username"), Some("ada"));
        assert_eq!(state.get("attempts"), Some(&serde_json::json!(3)));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut state = PipelineState::new();
        state.insert("page", 1);

        let previous = state.insert("page", 2);

        assert_eq!(previous, Some(serde_json::json!(1)));
        assert_eq!(state.get("page"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_from_map_seed() {
        let mut seed = HashMap::new();
        seed.insert("target".to_string(), serde_json::json!("https://example.com"));

        let state = PipelineState::from(seed);

        assert_eq!(state.get_str("target"), Some("https://example.com"));
    }

    #[test]
    fn test_remove() {
        let mut state = PipelineState::new();
        state.insert("token", "abc");

        assert_eq!(state.remove("token"), Some(serde_json::json!("abc")));
        assert!(!state.contains_key("token"));
        assert_eq!(state.remove("token"), None);
    }
}
