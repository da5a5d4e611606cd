// crates/typed-env/src/source.rs
// ============================================================================
// Module: Environment Sources
// Description: Key-value lookup primitive behind every accessor.
// Purpose: Decouple accessors from process-global environment state.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`EnvSource`] is the single lookup primitive. [`ProcessEnv`] reads the
//! live process environment on every call; [`MapEnv`] is an in-memory map
//! for deterministic lookups, so tests never have to mutate process state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

// ============================================================================
// SECTION: Source Trait
// ============================================================================

/// Read-only string-to-string lookup.
///
/// # Invariants
/// - `lookup` has no side effects and performs no caching.
/// - `None` means absent; an empty string is a present value.
pub trait EnvSource: Send + Sync {
    /// Returns the raw value for `name`, or `None` when it is not set.
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Arc<S> {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

// ============================================================================
// SECTION: Process Environment
// ============================================================================

/// Live process environment.
///
/// Values that are not valid Unicode are converted lossily, so presence is
/// preserved and typed parsing fails normally on the replacement characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // Names the platform cannot store are never set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(name).map(|raw| raw.to_string_lossy().into_owned())
    }
}

// ============================================================================
// SECTION: In-Memory Environment
// ============================================================================

/// In-memory environment backed by an ordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    /// Variable values keyed by name.
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Returns the environment with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }

    /// Unsets `name`, returning the previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Returns the number of variables set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true when no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for MapEnv {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars,
        }
    }
}
