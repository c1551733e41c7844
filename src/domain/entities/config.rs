//! Persisted settings document
//!
//! A flat mapping of string keys to YAML values stored at
//! `.crules/config.yaml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

/// Key naming the template set `deploy` and `add` fall back to
pub const TEMPLATE_NAME_KEY: &str = "template_name";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: BTreeMap<String, Value>,
}

impl Config {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value of `key` when it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn template_name(&self) -> Option<&str> {
        self.get_str(TEMPLATE_NAME_KEY)
    }

    /// Usable by deploy-from-config: `template_name` is present.
    pub fn is_valid(&self) -> bool {
        self.contains_key(TEMPLATE_NAME_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
