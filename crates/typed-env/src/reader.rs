// crates/typed-env/src/reader.rs
// ============================================================================
// Module: Environment Reader
// Description: Mandatory and default accessors over an injectable source.
// Purpose: Resolve a variable, apply the fallback rule, then parse it.
// Dependencies: time, tracing
// ============================================================================

//! ## Overview
//! [`EnvReader`] binds the accessors to one [`EnvSource`]. Mandatory
//! accessors fail with [`EnvError::Missing`] when the variable is absent;
//! default accessors substitute the caller's string and parse it exactly like
//! an environment value, so a malformed default fails with
//! [`EnvError::Parse`] naming the variable.
//!
//! Diagnostics are emitted as `tracing` events under the `typed_env` target.
//! Events carry variable names and kinds, never values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;

use crate::error::EnvError;
use crate::parse::EnvValue;
use crate::source::EnvSource;
use crate::source::ProcessEnv;

// ============================================================================
// SECTION: Reader
// ============================================================================

/// Typed accessors over an environment source.
///
/// # Invariants
/// - Every call performs a fresh lookup; nothing is cached.
/// - Only an absent variable triggers the default; an empty value is used as-is.
#[derive(Debug, Clone, Default)]
pub struct EnvReader<S = ProcessEnv> {
    /// Backing lookup.
    source: S,
}

impl EnvReader<ProcessEnv> {
    /// Creates a reader over the live process environment.
    #[must_use]
    pub const fn process() -> Self {
        Self {
            source: ProcessEnv,
        }
    }
}

impl<S: EnvSource> EnvReader<S> {
    /// Creates a reader over `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
        }
    }

    /// Returns the backing source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the raw value of `name`, or `None` when it is not set.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<String> {
        self.source.lookup(name)
    }

    /// Returns the raw value of a mandatory variable.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] when `name` is not set.
    pub fn mandatory(&self, name: &str) -> Result<String, EnvError> {
        self.source.lookup(name).ok_or_else(|| {
            tracing::debug!(
                target: "typed_env",
                variable = name,
                "mandatory environment variable not set"
            );
            EnvError::missing(name)
        })
    }

    /// Returns the raw value of `name`, or `default` when it is not set.
    #[must_use]
    pub fn or_default(&self, name: &str, default: &str) -> String {
        self.source.lookup(name).unwrap_or_else(|| {
            tracing::trace!(
                target: "typed_env",
                variable = name,
                "environment variable not set; using default"
            );
            default.to_string()
        })
    }

    /// Parses a mandatory variable as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] when `name` is not set and
    /// [`EnvError::Parse`] when its value is not a valid `T`.
    pub fn mandatory_as<T: EnvValue>(&self, name: &str) -> Result<T, EnvError> {
        let raw = self.mandatory(name)?;
        parse_resolved(name, &raw)
    }

    /// Parses `name` as `T`, parsing `default` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] when the resolved string is not a valid `T`.
    pub fn default_as<T: EnvValue>(&self, name: &str, default: &str) -> Result<T, EnvError> {
        let raw = self.or_default(name, default);
        parse_resolved(name, &raw)
    }

    /// Parses a mandatory base-10 integer.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
    pub fn mandatory_int(&self, name: &str) -> Result<i64, EnvError> {
        self.mandatory_as(name)
    }

    /// Parses a base-10 integer with a string default.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] when the resolved string is invalid.
    pub fn default_int(&self, name: &str, default: &str) -> Result<i64, EnvError> {
        self.default_as(name, default)
    }

    /// Parses a mandatory canonical boolean.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
    pub fn mandatory_bool(&self, name: &str) -> Result<bool, EnvError> {
        self.mandatory_as(name)
    }

    /// Parses a canonical boolean with a string default.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] when the resolved string is invalid.
    pub fn default_bool(&self, name: &str, default: &str) -> Result<bool, EnvError> {
        self.default_as(name, default)
    }

    /// Parses a mandatory 32-bit float.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
    pub fn mandatory_float32(&self, name: &str) -> Result<f32, EnvError> {
        self.mandatory_as(name)
    }

    /// Parses a 32-bit float with a string default.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] when the resolved string is invalid.
    pub fn default_float32(&self, name: &str, default: &str) -> Result<f32, EnvError> {
        self.default_as(name, default)
    }

    /// Parses a mandatory 64-bit float.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
    pub fn mandatory_float64(&self, name: &str) -> Result<f64, EnvError> {
        self.mandatory_as(name)
    }

    /// Parses a 64-bit float with a string default.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] when the resolved string is invalid.
    pub fn default_float64(&self, name: &str, default: &str) -> Result<f64, EnvError> {
        self.default_as(name, default)
    }

    /// Parses a mandatory duration such as `10s` or `1h30m`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
    pub fn mandatory_duration(&self, name: &str) -> Result<Duration, EnvError> {
        self.mandatory_as(name)
    }

    /// Parses a duration with a string default.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] when the resolved string is invalid.
    pub fn default_duration(&self, name: &str, default: &str) -> Result<Duration, EnvError> {
        self.default_as(name, default)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a resolved string, attaching the variable name on failure.
fn parse_resolved<T: EnvValue>(name: &str, raw: &str) -> Result<T, EnvError> {
    T::parse_env(raw).map_err(|reason| {
        tracing::debug!(
            target: "typed_env",
            variable = name,
            kind = T::KIND.as_str(),
            "environment variable failed to parse"
        );
        EnvError::parse(name, raw, T::KIND, reason)
    })
}
