//! Typed values produced by schema conversion.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::constants::{ITEM_SEPARATOR, PAIR_SEPARATOR};

/// The declared type of a variable. Selects the conversion applied to its raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VarKind {
    #[default]
    String,
    Bool,
    Int,
    Float,
    List,
    Map,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VarKind::String => "string",
            VarKind::Bool => "bool",
            VarKind::Int => "int",
            VarKind::Float => "float",
            VarKind::List => "list",
            VarKind::Map => "map",
        };
        f.write_str(name)
    }
}

/// A converted variable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<String>),
    Map(IndexMap<String, String>),
}

impl Value {
    pub fn kind(&self) -> VarKind {
        match self {
            Value::String(_) => VarKind::String,
            Value::Bool(_) => VarKind::Bool,
            Value::Int(_) => VarKind::Int,
            Value::Float(_) => VarKind::Float,
            Value::List(_) => VarKind::List,
            Value::Map(_) => VarKind::Map,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Equality that treats `Int` and `Float` as one numeric domain, so `1` matches `1.0`.
    pub(crate) fn loosely_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(i), Value::Float(x)) | (Value::Float(x), Value::Int(i)) => *i as f64 == *x,
            _ => self == other,
        }
    }

    /// Debug-style rendering used in error messages (strings are quoted).
    pub(crate) fn repr(&self) -> String {
        match self {
            Value::String(s) => format!("{s:?}"),
            Value::Bool(b) => format!("{b:?}"),
            Value::Int(i) => format!("{i:?}"),
            Value::Float(x) => format!("{x:?}"),
            Value::List(items) => format!("{items:?}"),
            Value::Map(pairs) => format!("{pairs:?}"),
        }
    }
}

/// Renders the value in the raw form it would take in an environment variable.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::List(items) => f.write_str(&items.join(&ITEM_SEPARATOR.to_string())),
            Value::Map(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{k}{PAIR_SEPARATOR}{v}"))
                    .collect();
                f.write_str(&rendered.join(&ITEM_SEPARATOR.to_string()))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<IndexMap<String, String>> for Value {
    fn from(value: IndexMap<String, String>) -> Self {
        Value::Map(value)
    }
}
