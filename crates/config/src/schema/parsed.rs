//! The typed result of a successful schema parse.

use indexmap::IndexMap;
use serde::Serialize;

use super::value::Value;

/// Converted values keyed by unprefixed variable name, in registration order.
///
/// A name maps to `None` when its variable was optional, unset, and had no
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedConfig {
    values: IndexMap<String, Option<Value>>,
}

impl ParsedConfig {
    pub(crate) fn insert(&mut self, name: &str, value: Option<Value>) {
        self.values.insert(name.to_string(), value);
    }

    /// The value for `name`, or `None` if it is unknown or has no value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(Option::as_ref)
    }

    /// Whether `name` was produced by the parse, even without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn get_map(&self, name: &str) -> Option<&IndexMap<String, String>> {
        self.get(name).and_then(Value::as_map)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
