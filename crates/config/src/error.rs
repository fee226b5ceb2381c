//! Error types for loading and validating environment configuration.
//!
//! Responsibilities:
//! - Define the aggregate `ValidationError` returned by schema parsing.
//! - Define `EnvError` for file I/O, missing required variables, and bad patterns.
//!
//! Does NOT handle:
//! - Per-kind conversion failures (see `schema/convert.rs`); those are folded
//!   into `ValidationError` and never surface on their own.
//!
//! Invariants:
//! - A `ValidationError` always carries at least one message.
//! - File errors carry the offending path but never file contents.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{VALIDATION_JOINER, VALIDATION_SUBJECT};

/// Every failure found during one `parse` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {}: {}", VALIDATION_SUBJECT, .errors.join(VALIDATION_JOINER))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// Individual failure messages, in spec registration order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Errors that can occur while loading, saving, or querying the environment.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Missing required env vars: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    #[error("Failed to read env file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write env file at {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid variable name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
