// crates/typed-env/src/duration.rs
// ============================================================================
// Module: Duration Parsing
// Description: Parser for signed, unit-suffixed duration strings.
// Purpose: Turn values like `1h30m`, `-1.5h` or `300ms` into durations.
// Dependencies: time
// ============================================================================

//! ## Overview
//! Grammar: an optional `+`/`-` sign followed by one or more groups of
//! `<decimal magnitude><unit>`. Units are `ns`, `us` (`µs`, `μs`), `ms`, `s`,
//! `m` and `h`. The bare string `0` is zero. Totals are accumulated in
//! unsigned nanoseconds and must fit a signed 64-bit nanosecond count.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest magnitude in nanoseconds (reached only by negative totals).
const NANOS_LIMIT: u64 = 1 << 63;

/// Fraction digits beyond this scale are ignored.
const MAX_FRACTION_SCALE: u64 = 10_000_000_000_000_000_000;

/// Unit suffixes and their size in nanoseconds.
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{00b5}s", 1_000),
    ("\u{03bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Parses a duration string.
///
/// # Errors
///
/// Returns a reason string when the input is empty, a group lacks a
/// magnitude or unit, a unit is unknown, or the total overflows.
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    let (negative, mut rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (nanos, remaining) = parse_group(rest)?;
        total = total
            .checked_add(nanos)
            .filter(|sum| *sum <= NANOS_LIMIT)
            .ok_or_else(|| "duration out of range".to_string())?;
        rest = remaining;
    }

    let nanos = if negative {
        if total == NANOS_LIMIT { i64::MIN } else { -to_signed(total)? }
    } else {
        to_signed(total)?
    };
    Ok(Duration::nanoseconds(nanos))
}

/// Parses one `<magnitude><unit>` group, returning its nanoseconds and the
/// unconsumed input.
fn parse_group(input: &str) -> Result<(u64, &str), String> {
    let (whole, has_whole, rest) = leading_int(input)?;
    let (fraction, scale, has_fraction, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let (fraction, scale, digits, rest) = leading_fraction(after_dot);
            (fraction, scale, digits > 0, rest)
        }
        None => (0, 1, false, rest),
    };
    if !has_whole && !has_fraction {
        return Err("missing numeric magnitude".to_string());
    }

    let unit_end = rest.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(rest.len());
    let (unit_text, rest) = rest.split_at(unit_end);
    if unit_text.is_empty() {
        return Err("missing unit".to_string());
    }
    let unit = UNITS
        .iter()
        .find(|(suffix, _)| *suffix == unit_text)
        .map(|(_, nanos)| *nanos)
        .ok_or_else(|| format!("unknown unit '{unit_text}'"))?;

    let mut nanos = whole
        .checked_mul(unit)
        .filter(|value| *value <= NANOS_LIMIT)
        .ok_or_else(|| "duration out of range".to_string())?;
    if fraction > 0 {
        let part = u128::from(fraction) * u128::from(unit) / u128::from(scale);
        nanos = u64::try_from(part)
            .ok()
            .and_then(|part| nanos.checked_add(part))
            .filter(|value| *value <= NANOS_LIMIT)
            .ok_or_else(|| "duration out of range".to_string())?;
    }
    Ok((nanos, rest))
}

/// Consumes leading ASCII digits as an integer.
fn leading_int(input: &str) -> Result<(u64, bool, &str), String> {
    let end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    let (digits, rest) = input.split_at(end);
    let mut value: u64 = 0;
    for digit in digits.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|scaled| scaled.checked_add(u64::from(digit - b'0')))
            .filter(|value| *value <= NANOS_LIMIT)
            .ok_or_else(|| "duration out of range".to_string())?;
    }
    Ok((value, !digits.is_empty(), rest))
}

/// Consumes leading ASCII digits as a fraction.
///
/// Returns the numerator, its power-of-ten scale, the digit count and the
/// unconsumed input.
fn leading_fraction(input: &str) -> (u64, u64, usize, &str) {
    let end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    let (digits, rest) = input.split_at(end);
    let mut fraction: u64 = 0;
    let mut scale: u64 = 1;
    for digit in digits.bytes() {
        if scale >= MAX_FRACTION_SCALE {
            break;
        }
        fraction = fraction * 10 + u64::from(digit - b'0');
        scale *= 10;
    }
    (fraction, scale, digits.len(), rest)
}

/// Converts an in-range nanosecond total to a signed count.
fn to_signed(total: u64) -> Result<i64, String> {
    i64::try_from(total).map_err(|_| "duration out of range".to_string())
}
