pub mod errors;

pub use errors::{EmorError, EmorErrorCategory, EmorResult};

use indexmap::IndexMap;

/// Ordered mapping from parameter key to the values collected under it.
///
/// Iteration follows first-insertion order. Committing a key that is already
/// present replaces its values but keeps its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterTable {
    entries: IndexMap<String, Vec<f64>>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `values` under `key`, returning the sequence it replaced.
    pub fn commit(&mut self, key: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        self.entries.insert(key.into(), values)
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn value_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
