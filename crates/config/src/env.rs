//! Environment abstraction for reading and writing variables.
//!
//! Responsibilities:
//! - Define the `Environment` trait every component reads and writes through.
//! - Provide `ProcessEnv`, backed by the real process environment.
//! - Provide `MemoryEnv`, an insertion-ordered in-memory environment.
//!
//! Does NOT handle:
//! - Parsing variable files (see `dotenv/`).
//! - Type conversion of values (see `schema/`).
//!
//! Invariants / Assumptions:
//! - The process environment is global mutable state; callers must not mutate
//!   it from several threads at once.
//! - `ProcessEnv` never panics on keys or values the OS cannot store; such
//!   writes are skipped and logged.

use indexmap::IndexMap;

/// A mutable key/value environment.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set_var(&mut self, key: &str, value: &str);

    /// Returns every entry in the environment's natural iteration order.
    fn vars(&self) -> Vec<(String, String)>;
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&mut self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

/// The environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Check whether the OS environment can hold this pair.
    ///
    /// `std::env::set_var` panics on an empty key, a key containing `=`, or
    /// a NUL byte anywhere.
    fn is_storable(key: &str, value: &str) -> bool {
        !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var(key).ok()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        if !Self::is_storable(key, value) {
            tracing::warn!(key = %key, "Skipping variable the process environment cannot hold");
            return;
        }
        // SAFETY: the crate is single-threaded by contract; see the module docs.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// An insertion-ordered environment held in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: IndexMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.shift_remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
