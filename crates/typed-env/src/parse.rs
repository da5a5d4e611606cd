// crates/typed-env/src/parse.rs
// ============================================================================
// Module: Value Parsing
// Description: Text parsers for each supported value type.
// Purpose: Define exactly which strings each typed accessor accepts.
// Dependencies: time
// ============================================================================

//! ## Overview
//! [`EnvValue`] ties a Rust type to its [`ValueKind`] and its parser. All
//! parsers consume the full string with no trimming; a parser never accepts
//! a prefix of its input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use time::Duration;

use crate::duration::parse_duration;
use crate::error::ValueKind;

// ============================================================================
// SECTION: Value Trait
// ============================================================================

/// A type that can be parsed from a raw environment string.
pub trait EnvValue: Sized {
    /// Kind reported in parse errors.
    const KIND: ValueKind;

    /// Parses the full raw string.
    ///
    /// # Errors
    ///
    /// Returns the parser's reason when `raw` is not a valid value.
    fn parse_env(raw: &str) -> Result<Self, String>;
}

impl EnvValue for String {
    const KIND: ValueKind = ValueKind::Str;

    fn parse_env(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl EnvValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn parse_env(raw: &str) -> Result<Self, String> {
        parse_int(raw)
    }
}

impl EnvValue for f32 {
    const KIND: ValueKind = ValueKind::Float32;

    fn parse_env(raw: &str) -> Result<Self, String> {
        parse_float(raw)
    }
}

impl EnvValue for f64 {
    const KIND: ValueKind = ValueKind::Float64;

    fn parse_env(raw: &str) -> Result<Self, String> {
        parse_float(raw)
    }
}

impl EnvValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn parse_env(raw: &str) -> Result<Self, String> {
        parse_bool(raw)
    }
}

impl EnvValue for Duration {
    const KIND: ValueKind = ValueKind::Duration;

    fn parse_env(raw: &str) -> Result<Self, String> {
        parse_duration(raw)
    }
}

// ============================================================================
// SECTION: Parsers
// ============================================================================

/// Parses a base-10 signed integer.
///
/// # Errors
///
/// Returns a reason when `raw` is empty, has non-digit characters, or does
/// not fit in `i64`.
pub fn parse_int(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>().map_err(|err| err.to_string())
}

/// Parses a floating-point value at the width of `F`.
///
/// Finite literals that overflow the target width are rejected; explicit
/// infinity literals are accepted.
///
/// # Errors
///
/// Returns a reason when `raw` is not a float literal or is out of range.
pub(crate) fn parse_float<F>(raw: &str) -> Result<F, String>
where
    F: FromStr<Err = std::num::ParseFloatError> + FloatBits,
{
    let value = raw.parse::<F>().map_err(|err| err.to_string())?;
    if value.is_infinite_value() && !is_infinity_literal(raw) {
        return Err("value out of range".to_string());
    }
    Ok(value)
}

/// Parses a canonical boolean token.
///
/// # Errors
///
/// Returns a reason for any string outside the twelve canonical tokens.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err("expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False"
            .to_string()),
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Infinity check shared by `f32` and `f64`.
pub(crate) trait FloatBits: Copy {
    /// Returns true for positive or negative infinity.
    fn is_infinite_value(self) -> bool;
}

impl FloatBits for f32 {
    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }
}

impl FloatBits for f64 {
    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }
}

/// Returns true when `raw` spells infinity rather than overflowing to it.
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
