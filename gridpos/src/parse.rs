//! Parsing of hand-entered degree-minute positions.
//!
//! Accepted forms (one component per call):
//!
//! ```text
//! Degree-minute with hemisphere:   47-32.23N    122-14.33W
//! Decimal with hemisphere:         37.69250150N -121.78913700W
//! Plain decimal:                   47.5
//! ```
//!
//! A `-` between degrees and minutes is a separator, a `-` at the start is a sign.

use crate::error::{GridposError, Result};
use crate::format::{format_decimal, Rounding};

const DECIMAL_DIGITS: u32 = 5;

/// Converts a degree-minute string into decimal degrees text.
///
/// A trailing hemisphere letter (`N`, `S`, `E`, `W`) is dropped first when the string has a
/// leading sign or no `-` at all. If the rest is already a decimal number it is returned
/// as is, so `"33.5S"` gives `"33.5"`: decimal input is expected to carry its own sign.
///
/// Otherwise the text is split into degrees and minutes at the `-`, combined, negated for
/// the southern and western hemispheres and rendered with 5 decimal digits rounded towards
/// positive infinity. Minutes that are absent or unparsable count as zero.
///
/// Empty input gives an empty string.
///
/// ```
/// use gridpos::parse::degree_minutes_to_decimal;
///
/// assert_eq!(degree_minutes_to_decimal("47-32.23N").unwrap(), "47.53717");
/// assert_eq!(degree_minutes_to_decimal("-121.78913700W").unwrap(), "-121.78913700");
/// ```
pub fn degree_minutes_to_decimal(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    let trailing = split_hemisphere(input);
    let mut remainder = input;
    let mut hemisphere = None;
    if let Some((body, letter)) = trailing {
        if input.starts_with('-') || !input.contains('-') {
            remainder = body;
            hemisphere = Some(letter);
        }
    }

    if let Ok(value) = remainder.trim().parse::<f64>() {
        if value.is_finite() {
            return Ok(remainder.trim().to_string());
        }
    }

    let (body, hemisphere) = match split_hemisphere(remainder) {
        Some((body, letter)) => (body, letter),
        None => match hemisphere {
            Some(letter) => (remainder, letter),
            None => {
                return Err(GridposError::Format(format!(
                    "{input:?} has no hemisphere letter"
                )))
            }
        },
    };

    let (signed, body) = match body.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, body),
    };

    let mut parts = body.splitn(2, '-');
    let degrees: f64 = parts
        .next()
        .and_then(|degrees| degrees.trim().parse().ok())
        .filter(|degrees: &f64| degrees.is_finite())
        .ok_or_else(|| GridposError::Format(format!("{input:?} has no degrees")))?;
    let minutes: f64 = parts
        .next()
        .and_then(|minutes| minutes.trim().parse().ok())
        .filter(|minutes: &f64| minutes.is_finite())
        .unwrap_or(0.0);

    let magnitude = degrees.abs() + minutes / 60.0;
    let value = if signed || matches!(hemisphere, 'S' | 'W') {
        -magnitude
    } else {
        magnitude
    };

    Ok(format_decimal(value, DECIMAL_DIGITS, Rounding::Ceiling))
}

/// Splits off a trailing hemisphere letter, returned in uppercase.
fn split_hemisphere(text: &str) -> Option<(&str, char)> {
    let last = text.chars().last()?.to_ascii_uppercase();
    matches!(last, 'N' | 'S' | 'E' | 'W').then(|| (&text[..text.len() - 1], last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn degree_minutes() {
        assert_eq!(degree_minutes_to_decimal("47-32.23N").unwrap(), "47.53717");
        assert_eq!(degree_minutes_to_decimal("122-14.33W").unwrap(), "-122.23883");
        assert_eq!(degree_minutes_to_decimal("47-32.23S").unwrap(), "-47.53716");
        assert_eq!(degree_minutes_to_decimal("47-30e").unwrap(), "47.50000");
    }

    #[test]
    fn decimal_passes_through() {
        assert_eq!(degree_minutes_to_decimal("37.69250150N").unwrap(), "37.69250150");
        assert_eq!(
            degree_minutes_to_decimal("-121.78913700W").unwrap(),
            "-121.78913700"
        );
        assert_eq!(degree_minutes_to_decimal(" 47.5 ").unwrap(), "47.5");
        assert_eq!(degree_minutes_to_decimal("33.5S").unwrap(), "33.5");
    }

    #[test]
    fn missing_minutes() {
        assert_eq!(degree_minutes_to_decimal("47-N").unwrap(), "47.00000");
        assert_eq!(degree_minutes_to_decimal("47-xxN").unwrap(), "47.00000");
    }

    #[test]
    fn signed_degree_minutes() {
        assert_eq!(degree_minutes_to_decimal("-47-32.23S").unwrap(), "-47.53716");
    }

    #[test]
    fn empty_input() {
        assert_eq!(degree_minutes_to_decimal("").unwrap(), "");
        assert_eq!(degree_minutes_to_decimal("   ").unwrap(), "");
    }

    #[test]
    fn malformed_input() {
        assert_matches!(
            degree_minutes_to_decimal("47-32"),
            Err(GridposError::Format(_))
        );
        assert_matches!(
            degree_minutes_to_decimal("abcN"),
            Err(GridposError::Format(_))
        );
    }
}
