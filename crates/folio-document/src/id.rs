//! Folio Id Normalization
//!
//! Ids arriving from a URL are always strings while ids authored in the
//! document are often numbers. Tokens are normalized into a number when they
//! are syntactically numeric, then compared against the item's raw `id`
//! field with a type-sensitive equality.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::types::Value;

// =============================================================================
// Normalization
// =============================================================================

/// Normalize a raw id token.
///
/// Numbers pass through unchanged. Strings whose trimmed form is a complete
/// numeric literal become that number. Everything else is returned as-is.
pub fn normalize_id(raw: &Value) -> Value {
    match raw {
        Value::String(s) => parse_numeric(s).unwrap_or_else(|| raw.clone()),
        other => other.clone(),
    }
}

/// Normalize an id token taken from a path segment or query string.
pub fn normalize_id_str(raw: &str) -> Value {
    parse_numeric(raw).unwrap_or_else(|| Value::String(raw.to_string()))
}

/// Type-sensitive id equality: number against number by value, string
/// against string by content. Any other pairing is unequal.
pub fn ids_equal(wanted: &Value, candidate: &Value) -> bool {
    match (wanted, candidate) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (a, b) if a.is_number() && b.is_number() => a.as_f64() == b.as_f64(),
        _ => false,
    }
}

// =============================================================================
// Numeric Literal Parsing
// =============================================================================

fn parse_numeric(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(Value::Float(f64::INFINITY)),
        "-Infinity" => return Some(Value::Float(f64::NEG_INFINITY)),
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return Some(value);
    }

    if !is_decimal_literal(trimmed) {
        return None;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::Int(n));
    }
    trimmed.parse::<f64>().ok().map(number_from_f64)
}

/// `0x`, `0o` and `0b` literals. Unsigned only.
fn parse_prefixed_integer(s: &str) -> Option<Value> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut acc = 0f64;
    for c in s[2..].chars() {
        acc = acc * radix as f64 + c.to_digit(radix)? as f64;
    }
    Some(number_from_f64(acc))
}

/// Optional sign, digits with optional fraction, optional exponent. At least
/// one mantissa digit is required.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Integral values within `i64` range become `Int`, the rest stay `Float`.
fn number_from_f64(f: f64) -> Value {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if f.is_finite() && f.fract() == 0.0 && f >= -I64_BOUND && f < I64_BOUND {
        Value::Int(f as i64)
    } else {
        Value::Float(f)
    }
}

// =============================================================================
// Tests
// =============================================================================
