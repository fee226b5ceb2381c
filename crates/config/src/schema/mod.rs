//! Typed schema of expected environment variables.
//!
//! Responsibilities:
//! - Register `VarSpec` declarations under an optional uppercase prefix.
//! - Convert an environment into a `ParsedConfig`, checking required, choice,
//!   and validator constraints.
//! - Cache the last successful result for later lookups.
//!
//! Does NOT handle:
//! - Reading variable files (see `dotenv/`).
//! - Writing to the environment; parsing is read-only.
//!
//! Invariants:
//! - Specs are keyed by full name; re-adding a full name replaces the spec in place.
//! - Every spec is checked before failing; all failures are reported together.
//! - A failed parse leaves the cached result untouched.
//! - Failure messages never include the offending raw value for choice and
//!   validator checks.

mod convert;
mod parsed;
mod spec;
mod value;

pub use convert::ConvertError;
pub use parsed::ParsedConfig;
pub use spec::{Validator, VarSpec};
pub use value::{Value, VarKind};

use indexmap::IndexMap;

use crate::env::{Environment, ProcessEnv};
use crate::error::ValidationError;

/// Registry of variable specs and the result of the last successful parse.
#[derive(Debug, Default)]
pub struct EnvParser {
    specs: IndexMap<String, VarSpec>,
    values: ParsedConfig,
    prefix: String,
}

impl EnvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spec` under the current prefix.
    pub fn add(&mut self, spec: VarSpec) -> &mut Self {
        let spec = spec.with_prefix(&self.prefix);
        self.specs.insert(spec.full_name(), spec);
        self
    }

    /// Set the prefix applied to specs added from now on. Stored uppercased.
    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefix = prefix.to_uppercase();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registered specs in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &VarSpec> {
        self.specs.values()
    }

    /// The last successful parse result; empty before the first one.
    pub fn values(&self) -> &ParsedConfig {
        &self.values
    }

    /// Look up a value from the last successful parse by unprefixed name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Parse the process environment.
    pub fn parse(&mut self) -> Result<ParsedConfig, ValidationError> {
        self.parse_from(&ProcessEnv)
    }

    /// Parse `env` against every registered spec.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every failing spec if any fail.
    pub fn parse_from<E: Environment + ?Sized>(
        &mut self,
        env: &E,
    ) -> Result<ParsedConfig, ValidationError> {
        let mut result = ParsedConfig::default();
        let mut errors = Vec::new();

        for (full_name, spec) in &self.specs {
            let Some(raw) = env.var(full_name) else {
                if spec.is_required() {
                    errors.push(format!("{full_name} is required"));
                } else {
                    result.insert(spec.name(), spec.default_value().cloned());
                }
                continue;
            };

            let value = match spec.kind().convert(&raw) {
                Ok(value) => value,
                Err(e) => {
                    errors.push(format!("{full_name}: {e}"));
                    continue;
                }
            };

            if !spec.accepts(&value) {
                errors.push(format!(
                    "{full_name} must be one of {}",
                    spec.choices_repr()
                ));
                continue;
            }

            if !spec.validates(&value) {
                errors.push(format!("{full_name} failed validation"));
                continue;
            }

            result.insert(spec.name(), Some(value));
        }

        if !errors.is_empty() {
            tracing::debug!(
                specs = self.specs.len(),
                failures = errors.len(),
                "Environment validation failed"
            );
            return Err(ValidationError::new(errors));
        }

        tracing::debug!(specs = self.specs.len(), "Environment validated");
        self.values = result.clone();
        Ok(result)
    }
}
