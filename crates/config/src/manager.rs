//! Facade combining variable file loading, schema parsing, and direct lookups.
//!
//! Responsibilities:
//! - Own one `DotEnv`, one `EnvParser`, and the `Environment` they operate on.
//! - Offer `require` and `dump` for ad-hoc reads of the live environment.
//!
//! Does NOT handle:
//! - Line parsing or interpolation (see `dotenv/`).
//! - Type conversion (see `schema/`).
//!
//! Invariants / Assumptions:
//! - `get`, `set`, `require`, and `dump` bypass the loader and parser caches.
//! - `require` reports every missing name at once.
//! - `dump` patterns are anchored at the start of the key only.

use indexmap::IndexMap;
use regex::Regex;
use std::path::PathBuf;

use crate::dotenv::DotEnv;
use crate::env::{Environment, ProcessEnv};
use crate::error::{EnvError, ValidationError};
use crate::schema::{EnvParser, ParsedConfig, VarSpec};

/// Entry point for loading, validating, and querying environment configuration.
#[derive(Debug, Default)]
pub struct EnvManager<E: Environment = ProcessEnv> {
    env: E,
    dotenv: DotEnv,
    parser: EnvParser,
}

impl EnvManager<ProcessEnv> {
    /// Create a manager over the process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl<E: Environment> EnvManager<E> {
    /// Create a manager over an arbitrary environment.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            dotenv: DotEnv::default(),
            parser: EnvParser::new(),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    pub fn dotenv(&self) -> &DotEnv {
        &self.dotenv
    }

    pub fn parser(&self) -> &EnvParser {
        &self.parser
    }

    /// Load the variable file at `path` into the environment.
    ///
    /// See [`DotEnv::load`] for merge and override rules.
    pub fn load_dotenv(
        &mut self,
        path: impl Into<PathBuf>,
        override_existing: bool,
    ) -> Result<IndexMap<String, String>, EnvError> {
        self.dotenv.set_path(path);
        self.dotenv.load(&mut self.env, override_existing)
    }

    /// Declare an expected variable.
    pub fn define(&mut self, spec: VarSpec) -> &mut Self {
        self.parser.add(spec);
        self
    }

    /// Set the prefix for variables declared from now on.
    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        self.parser.set_prefix(prefix);
        self
    }

    /// Validate the environment against every declared variable.
    pub fn parse(&mut self) -> Result<ParsedConfig, ValidationError> {
        self.parser.parse_from(&self.env)
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.env.var(name)
    }

    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.env.set_var(name, value);
    }

    /// Read every name from the environment, failing if any are unset.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::MissingVars` naming all unset variables.
    pub fn require<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<IndexMap<String, String>, EnvError> {
        let mut found = IndexMap::new();
        let mut missing = Vec::new();

        for name in names {
            let name: &str = name.as_ref();
            match self.env.var(name) {
                Some(value) => {
                    found.insert(name.to_string(), value);
                }
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(EnvError::MissingVars(missing));
        }
        Ok(found)
    }

    /// Every environment entry, optionally limited to keys whose start matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::InvalidPattern` if `pattern` is not a valid regex.
    pub fn dump(&self, pattern: Option<&str>) -> Result<IndexMap<String, String>, EnvError> {
        let regex = pattern
            .map(|p| Regex::new(&format!("^(?:{p})")))
            .transpose()?;

        Ok(self
            .env
            .vars()
            .into_iter()
            .filter(|(key, _)| regex.as_ref().is_none_or(|re| re.is_match(key)))
            .collect())
    }
}
