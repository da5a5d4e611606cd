// crates/typed-env/src/lib.rs
// ============================================================================
// Module: Typed Env
// Description: Typed accessors for environment variables.
// Purpose: Read variables as strings, integers, floats, booleans and durations.
// Dependencies: thiserror, time, tracing
// ============================================================================

//! ## Overview
//! `typed-env` reads environment variables and parses them into typed values.
//! Each type has a mandatory accessor, which fails when the variable is not
//! set, and a default accessor, which parses a caller-supplied string instead.
//! Failures are returned as [`EnvError`]; nothing in this crate panics or
//! aborts the process.
//!
//! The free functions below read the live process environment. Use
//! [`EnvReader`] with a [`MapEnv`] (or any [`EnvSource`]) to resolve against
//! an injected source instead.
//!
//! ```
//! use typed_env::EnvReader;
//! use typed_env::MapEnv;
//!
//! let env = EnvReader::new(MapEnv::new().with("WORKERS", "8"));
//! assert_eq!(env.mandatory_int("WORKERS"), Ok(8));
//! assert_eq!(env.default_duration("TIMEOUT", "2h"), Ok(typed_env::Duration::hours(2)));
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod duration;
pub mod error;
pub mod parse;
pub mod reader;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use duration::parse_duration;
pub use error::EnvError;
pub use error::ValueKind;
pub use parse::EnvValue;
pub use parse::parse_bool;
pub use parse::parse_int;
pub use reader::EnvReader;
pub use source::EnvSource;
pub use source::MapEnv;
pub use source::ProcessEnv;
pub use time::Duration;

// ============================================================================
// SECTION: Process Environment Accessors
// ============================================================================

/// Returns the raw value of `name` from the process environment.
#[must_use]
pub fn lookup(name: &str) -> Option<String> {
    EnvReader::process().lookup(name)
}

/// Returns a mandatory process environment variable.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] when `name` is not set.
pub fn get_mandatory_env(name: &str) -> Result<String, EnvError> {
    EnvReader::process().mandatory(name)
}

/// Returns a process environment variable, or `default` when it is not set.
#[must_use]
pub fn get_default_env(name: &str, default: &str) -> String {
    EnvReader::process().or_default(name, default)
}

/// Parses a mandatory process environment variable as an integer.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
pub fn get_mandatory_int(name: &str) -> Result<i64, EnvError> {
    EnvReader::process().mandatory_int(name)
}

/// Parses a process environment variable as an integer with a string default.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] when the resolved string is invalid.
pub fn get_default_int(name: &str, default: &str) -> Result<i64, EnvError> {
    EnvReader::process().default_int(name, default)
}

/// Parses a mandatory process environment variable as a boolean.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
pub fn get_mandatory_bool(name: &str) -> Result<bool, EnvError> {
    EnvReader::process().mandatory_bool(name)
}

/// Parses a process environment variable as a boolean with a string default.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] when the resolved string is invalid.
pub fn get_default_bool(name: &str, default: &str) -> Result<bool, EnvError> {
    EnvReader::process().default_bool(name, default)
}

/// Parses a mandatory process environment variable as an `f32`.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
pub fn get_mandatory_float32(name: &str) -> Result<f32, EnvError> {
    EnvReader::process().mandatory_float32(name)
}

/// Parses a process environment variable as an `f32` with a string default.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] when the resolved string is invalid.
pub fn get_default_float32(name: &str, default: &str) -> Result<f32, EnvError> {
    EnvReader::process().default_float32(name, default)
}

/// Parses a mandatory process environment variable as an `f64`.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
pub fn get_mandatory_float64(name: &str) -> Result<f64, EnvError> {
    EnvReader::process().mandatory_float64(name)
}

/// Parses a process environment variable as an `f64` with a string default.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] when the resolved string is invalid.
pub fn get_default_float64(name: &str, default: &str) -> Result<f64, EnvError> {
    EnvReader::process().default_float64(name, default)
}

/// Parses a mandatory process environment variable as a duration.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] or [`EnvError::Parse`].
pub fn get_mandatory_duration(name: &str) -> Result<Duration, EnvError> {
    EnvReader::process().mandatory_duration(name)
}

/// Parses a process environment variable as a duration with a string default.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] when the resolved string is invalid.
pub fn get_default_duration(name: &str, default: &str) -> Result<Duration, EnvError> {
    EnvReader::process().default_duration(name, default)
}
