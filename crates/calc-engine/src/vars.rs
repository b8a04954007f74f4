//! The host-owned variable store.
//!
//! The store lives with the UI collaborator; the engine only reads it
//! through [`VariableProvider`] during evaluation and never retains it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::eval::VariableProvider;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableStore {
    values: HashMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableProvider for VariableStore {
    fn value(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stores_and_recalls_values() {
        let mut store = VariableStore::new();
        assert!(store.is_empty());

        store.set("M", 7.0);
        assert_eq!(store.get("M"), Some(7.0));
        assert_eq!(store.value("M"), Some(7.0));

        assert_eq!(store.remove("M"), Some(7.0));
        assert_eq!(store.get("M"), None);
    }
}
