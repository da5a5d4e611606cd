// crates/typed-env/src/error.rs
// ============================================================================
// Module: Typed Env Errors
// Description: Error type for environment lookups and typed parsing.
// Purpose: Report missing mandatory variables and unparsable values.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every accessor returns [`EnvError`] on failure. There are exactly two
//! kinds: a mandatory variable that is not set, and a resolved value (from
//! the environment or from a supplied default) that does not parse as the
//! requested type. Malformed defaults are reported the same way as malformed
//! environment values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

// ============================================================================
// SECTION: Value Kinds
// ============================================================================

/// Target type of a typed environment lookup.
///
/// # Invariants
/// - Labels returned by [`ValueKind::as_str`] are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Raw string value.
    Str,
    /// Signed base-10 integer.
    Int,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Canonical boolean token.
    Bool,
    /// Signed duration with unit suffixes.
    Duration,
}

impl ValueKind {
    /// Returns the stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "int",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Environment lookup or parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A mandatory variable is not set.
    #[error("environment variable {name} is mandatory but not set")]
    Missing {
        /// Variable name.
        name: String,
    },
    /// The resolved value does not parse as the requested type.
    #[error("environment variable {name}='{value}' is not a valid {kind}: {reason}")]
    Parse {
        /// Variable name.
        name: String,
        /// Raw string that failed to parse.
        value: String,
        /// Requested type.
        kind: ValueKind,
        /// Parser detail.
        reason: String,
    },
}

impl EnvError {
    /// Builds a missing-variable error.
    #[must_use]
    pub fn missing(name: &str) -> Self {
        Self::Missing {
            name: name.to_string(),
        }
    }

    /// Builds a parse error.
    #[must_use]
    pub fn parse(name: &str, value: &str, kind: ValueKind, reason: impl Into<String>) -> Self {
        Self::Parse {
            name: name.to_string(),
            value: value.to_string(),
            kind,
            reason: reason.into(),
        }
    }

    /// Returns the variable name the error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Missing {
                name,
            }
            | Self::Parse {
                name, ..
            } => name,
        }
    }

    /// Returns true when the error is a missing mandatory variable.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Returns the requested type for parse errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Missing { .. } => None,
            Self::Parse {
                kind, ..
            } => Some(*kind),
        }
    }
}
