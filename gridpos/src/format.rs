//! Fixed-precision decimal rendering of degree values.
//!
//! Rounding is done on the shortest decimal representation of the `f64` (the one `Display`
//! prints), so `47.60625` rendered with 4 digits is `47.6063` regardless of the binary value
//! being slightly below the midpoint.

use serde::{Deserialize, Serialize};

/// Number of decimal digits coordinates are rendered with unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 4;

/// Rounding rule applied to the discarded decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round to the nearest value, ties away from zero.
    HalfUp,
    /// Round towards positive infinity.
    Ceiling,
}

/// Rendering settings for [`Coordinate`](crate::geo::Coordinate) text.
///
/// The value is chosen once, when coordinates are constructed, and never changes
/// afterwards.
///
/// ```
/// use gridpos::format::CoordinateFormat;
/// use gridpos::geo::Coordinate;
///
/// let format = CoordinateFormat::new(2);
/// let coordinate = Coordinate::with_format(47.6062, -122.3321, &format);
/// assert_eq!(coordinate.lat_text(), Some("47.61"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateFormat {
    /// Number of decimal digits of latitude and longitude text.
    pub precision: u32,
}

impl CoordinateFormat {
    /// Creates a format with the given number of decimal digits.
    pub const fn new(precision: u32) -> Self {
        Self { precision }
    }
}

impl Default for CoordinateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// Renders `value` with exactly `digits` decimal digits.
///
/// Non-finite values are rendered the way `Display` renders them. A result that rounds to
/// zero never carries a minus sign.
pub fn format_decimal(value: f64, digits: u32, rounding: Rounding) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value.is_sign_negative();
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((&repr, ""));
    let digits = digits as usize;

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let dropped = frac_part.get(digits..).unwrap_or("");

    let round_up = match rounding {
        Rounding::HalfUp => dropped.bytes().next().is_some_and(|d| d >= b'5'),
        Rounding::Ceiling => !negative && dropped.bytes().any(|d| d != b'0'),
    };
    if round_up {
        increment(&mut kept);
    }

    let is_zero = kept.iter().all(|&d| d == b'0');
    let int_len = kept.len() - digits;

    let mut result = String::with_capacity(kept.len() + 2);
    if negative && !is_zero {
        result.push('-');
    }
    result.extend(kept[..int_len].iter().map(|&d| d as char));
    if digits > 0 {
        result.push('.');
        result.extend(kept[int_len..].iter().map(|&d| d as char));
    }

    result
}

fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }

    digits.insert(0, b'1');
}
