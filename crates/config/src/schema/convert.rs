//! Raw string to typed value conversion, one pure function per `VarKind`.
//!
//! Invariants:
//! - Bool, list, map, and string conversion never fail.
//! - Numeric conversion ignores surrounding whitespace and fails on anything
//!   else that does not parse.

use indexmap::IndexMap;
use thiserror::Error;

use super::value::{Value, VarKind};
use crate::constants::{ITEM_SEPARATOR, PAIR_SEPARATOR, TRUTHY_LITERALS};

/// A raw value that does not parse as its declared kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("invalid literal for int: '{0}'")]
    InvalidInt(String),

    #[error("could not convert string to float: '{0}'")]
    InvalidFloat(String),
}

impl VarKind {
    /// Convert `raw` into a value of this kind.
    pub fn convert(self, raw: &str) -> Result<Value, ConvertError> {
        match self {
            VarKind::String => Ok(Value::String(raw.to_string())),
            VarKind::Bool => Ok(Value::Bool(to_bool(raw))),
            VarKind::Int => to_int(raw).map(Value::Int),
            VarKind::Float => to_float(raw).map(Value::Float),
            VarKind::List => Ok(Value::List(to_list(raw))),
            VarKind::Map => Ok(Value::Map(to_map(raw))),
        }
    }
}

fn to_bool(raw: &str) -> bool {
    TRUTHY_LITERALS
        .iter()
        .any(|literal| raw.eq_ignore_ascii_case(literal))
}

fn to_int(raw: &str) -> Result<i64, ConvertError> {
    raw.trim()
        .parse()
        .map_err(|_| ConvertError::InvalidInt(raw.to_string()))
}

fn to_float(raw: &str) -> Result<f64, ConvertError> {
    raw.trim()
        .parse()
        .map_err(|_| ConvertError::InvalidFloat(raw.to_string()))
}

fn to_list(raw: &str) -> Vec<String> {
    raw.split(ITEM_SEPARATOR)
        .map(|item| item.trim().to_string())
        .collect()
}

fn to_map(raw: &str) -> IndexMap<String, String> {
    raw.split(ITEM_SEPARATOR)
        .filter_map(|pair| pair.split_once(PAIR_SEPARATOR))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}
