//! Variable file (`.env`) loading and saving.
//!
//! Responsibilities:
//! - Read `KEY=VALUE` files into an ordered mapping, with quoting and interpolation.
//! - Propagate loaded entries into an `Environment`, honoring the override flag.
//! - Write the mapping back to disk.
//!
//! Does NOT handle:
//! - Typed conversion or validation (see `schema/`).
//! - Multi-line values, `export` prefixes, or trailing comments.
//!
//! Invariants / Assumptions:
//! - A missing file loads as an empty mapping, never an error.
//! - Loading only adds or overwrites entries; it never removes any.
//! - Interpolation sees the environment first, then entries accumulated so far.
//! - Log output never includes raw line contents or values.

mod interpolate;
mod parse;

use indexmap::IndexMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_DOTENV_PATH, SAVE_TEMP_SUFFIX};
use crate::env::Environment;
use crate::error::EnvError;
use interpolate::interpolate;
use parse::{Line, parse_line, render_entry, split_lines};

/// A variable file and the entries loaded from or assigned into it.
#[derive(Debug, Clone)]
pub struct DotEnv {
    path: PathBuf,
    vars: IndexMap<String, String>,
}

impl Default for DotEnv {
    fn default() -> Self {
        Self::new(DEFAULT_DOTENV_PATH)
    }
}

impl DotEnv {
    /// Create a loader for the file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            vars: IndexMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the loader at another file. Already loaded entries are kept.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Entries accumulated by `load` and `set`, in first-seen order.
    pub fn vars(&self) -> &IndexMap<String, String> {
        &self.vars
    }

    /// Load the file into this loader and into `env`.
    ///
    /// Existing environment values are only replaced when `override_existing`
    /// is true. Returns every entry accumulated so far, including those from
    /// earlier loads. A missing file returns an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::FileRead` if the file exists but cannot be read.
    pub fn load<E: Environment>(
        &mut self,
        mut env: E,
        override_existing: bool,
    ) -> Result<IndexMap<String, String>, EnvError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No env file found; nothing loaded");
                return Ok(IndexMap::new());
            }
            Err(source) => {
                return Err(EnvError::FileRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut loaded = 0usize;
        let mut skipped = 0usize;

        for (idx, raw) in split_lines(&content).enumerate() {
            let (key, value) = match parse_line(raw) {
                Line::Blank | Line::Comment => continue,
                Line::Malformed => {
                    tracing::trace!(line = idx + 1, "Skipping malformed env file line");
                    skipped += 1;
                    continue;
                }
                Line::Entry { key, value } => (key, value),
            };

            let value = interpolate(value, |name| {
                env.var(name).or_else(|| self.vars.get(name).cloned())
            });

            if override_existing || env.var(key).is_none() {
                env.set_var(key, &value);
            }
            self.vars.insert(key.to_string(), value);
            loaded += 1;
        }

        tracing::debug!(
            path = %self.path.display(),
            loaded,
            skipped,
            override_existing,
            "Loaded env file"
        );

        Ok(self.vars.clone())
    }

    /// Look up `key` in the loaded entries, then in `env`.
    pub fn get<E: Environment + ?Sized>(&self, env: &E, key: &str) -> Option<String> {
        self.vars.get(key).cloned().or_else(|| env.var(key))
    }

    /// Like `get`, falling back to `default`.
    pub fn get_or<E: Environment + ?Sized>(&self, env: &E, key: &str, default: &str) -> String {
        self.get(env, key).unwrap_or_else(|| default.to_string())
    }

    /// Record `key` in this loader and write it to `env` unconditionally.
    pub fn set<E: Environment>(&mut self, mut env: E, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
        env.set_var(key, value);
    }

    /// Write all entries to the loader's file, one `KEY=VALUE` line each.
    ///
    /// The file is written next to its final location and renamed into place.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::FileWrite` if the file cannot be written or renamed.
    pub fn save(&self) -> Result<(), EnvError> {
        let mut content = self
            .vars
            .iter()
            .map(|(key, value)| render_entry(key, value))
            .collect::<Vec<_>>()
            .join("\n");
        content.push('\n');

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(SAVE_TEMP_SUFFIX);
        let temp_path = PathBuf::from(temp_path);

        let write_err = |source: std::io::Error| EnvError::FileWrite {
            path: self.path.clone(),
            source,
        };
        std::fs::write(&temp_path, content).map_err(write_err)?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(write_err(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            entries = self.vars.len(),
            "Env file saved"
        );

        Ok(())
    }
}
