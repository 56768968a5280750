//! Number text conversion.
//!
//! Numbers render in the shortest round-tripping form, switching to exponent
//! notation outside `[1e-6, 1e21)`, and numeric literals parse with the usual
//! dynamic-language rules: surrounding whitespace is ignored, an empty string
//! is zero, and `0x`/`0o`/`0b` prefixes select a radix.

/// Largest integer `n` such that `n` and `n + 1` are exactly representable.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Formats a number the way string conversion renders it.
///
/// Both zeros render as `"0"`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.23456e2".
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        let zeros = usize::try_from(point - k).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exp = point - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        if digits.len() == 1 {
            format!("{digits}e{exp_sign}{}", exp.abs())
        } else {
            format!("{}.{}e{exp_sign}{}", &digits[..1], &digits[1..], exp.abs())
        }
    };
    format!("{sign}{body}")
}

/// Parses a numeric literal.
///
/// Returns `None` for malformed text. Signed radix literals (`-0x1`) are
/// malformed; `Infinity` may carry a sign.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if s.len() > 2 && s.get(..2).is_some_and(|head| head.eq_ignore_ascii_case(prefix)) {
            return parse_radix(&s[2..], radix);
        }
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !is_decimal_literal(unsigned) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Parses unsigned digits in the given radix, accumulating in floating point so
/// that arbitrarily long literals degrade the same way a double would.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let mut value = 0.0f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(d);
    }
    Some(value)
}

/// `digits [. digits] [(e|E) [+|-] digits]` with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    i == bytes.len()
}

/// Deep-equality comparison of two numbers: NaN equals NaN, +0 and -0 differ.
#[must_use]
pub fn same_number(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/// Hash bits consistent with [`same_number`].
#[must_use]
pub fn number_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

/// Returns true if `n` is finite and has no fractional part.
#[must_use]
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.trunc() == n
}
