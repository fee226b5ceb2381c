//! Environment configuration loading and validation.
//!
//! This crate loads `.env`-style variable files into the process environment
//! and converts environment variables into typed, validated settings.
//!
//! - [`DotEnv`] reads `KEY=VALUE` files with quoting and `$NAME`/`${NAME}`
//!   interpolation, and writes them back.
//! - [`EnvParser`] holds a schema of [`VarSpec`] declarations and produces a
//!   [`ParsedConfig`] or a [`ValidationError`] listing every failure.
//! - [`EnvManager`] combines both with `require` and `dump` helpers.
//!
//! All components operate on an [`Environment`]; [`ProcessEnv`] is the real
//! process environment and [`MemoryEnv`] an in-memory stand-in.

pub mod constants;
mod dotenv;
mod env;
mod error;
mod manager;
mod schema;

use indexmap::IndexMap;
use std::path::Path;

pub use dotenv::DotEnv;
pub use env::{Environment, MemoryEnv, ProcessEnv};
pub use error::{EnvError, ValidationError};
pub use manager::EnvManager;
pub use schema::{ConvertError, EnvParser, ParsedConfig, Validator, Value, VarKind, VarSpec};

/// Load the variable file at `path` into the process environment.
///
/// Existing variables are only replaced when `override_existing` is true.
pub fn load_dotenv(
    path: impl AsRef<Path>,
    override_existing: bool,
) -> Result<IndexMap<String, String>, EnvError> {
    DotEnv::new(path.as_ref()).load(ProcessEnv, override_existing)
}

/// Read a variable from the process environment.
pub fn get(name: &str) -> Option<String> {
    ProcessEnv.var(name)
}

/// Read several variables from the process environment, failing if any are unset.
pub fn require<S: AsRef<str>>(names: &[S]) -> Result<IndexMap<String, String>, EnvError> {
    EnvManager::new().require(names)
}
