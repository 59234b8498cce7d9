//! Maidenhead grid locators (the 6-character form, e.g. `CN87vm`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{GridposError, Result};
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::traits::point::NewGeoPoint;

lazy_static! {
    static ref LOCATOR: Regex =
        Regex::new(r"(?i)^[A-R]{2}[0-9]{2}[A-X]{2}$").expect("Must be a valid locator pattern");
}

// Sizes of a subsquare in degrees.
const SUBSQUARE_LON: f64 = 5.0 / 60.0;
const SUBSQUARE_LAT: f64 = 2.5 / 60.0;

/// Returns true if `locator` is a 6-character Maidenhead locator (case-insensitive).
///
/// ```
/// use gridpos::grid::maidenhead::is_valid_maidenhead;
///
/// assert!(is_valid_maidenhead("CN87vm"));
/// assert!(!is_valid_maidenhead("CN8"));
/// ```
pub fn is_valid_maidenhead(locator: &str) -> bool {
    LOCATOR.is_match(locator)
}

/// Decodes a locator into the center of its cell.
pub fn decode(locator: &str) -> Result<GeoPoint2d> {
    if !is_valid_maidenhead(locator) {
        return Err(GridposError::Format(format!(
            "{locator:?} is not a 6-character Maidenhead locator"
        )));
    }

    let c: Vec<f64> = locator
        .to_ascii_uppercase()
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let base = if i == 2 || i == 3 { b'0' } else { b'A' };
            f64::from(b - base)
        })
        .collect();

    let lon = -180.0 + 20.0 * c[0] + 2.0 * c[2] + SUBSQUARE_LON * c[4] + SUBSQUARE_LON / 2.0;
    let lat = -90.0 + 10.0 * c[1] + c[3] + SUBSQUARE_LAT * c[5] + SUBSQUARE_LAT / 2.0;

    Ok(GeoPoint2d::latlon(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn validation() {
        assert!(is_valid_maidenhead("CN87vm"));
        assert!(is_valid_maidenhead("cn87VM"));
        assert!(is_valid_maidenhead("RR99XX"));
        assert!(is_valid_maidenhead("AA00AA"));
        assert!(!is_valid_maidenhead("CN8"));
        assert!(!is_valid_maidenhead("CN877X9"));
        assert!(!is_valid_maidenhead("CN87vm12"));
        assert!(!is_valid_maidenhead("SN87vm"));
        assert!(!is_valid_maidenhead("CN87vy"));
        assert!(!is_valid_maidenhead(" CN87vm"));
        assert!(!is_valid_maidenhead(""));
    }

    #[test]
    fn decodes_cell_center() {
        let point = decode("CN87vm").unwrap();
        assert_abs_diff_eq!(point.lat(), 47.520833333333336, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lon(), -122.20833333333333, epsilon = 1e-9);
    }

    #[test]
    fn corners_of_the_grid() {
        let point = decode("AA00AA").unwrap();
        assert_abs_diff_eq!(point.lat(), -90.0 + 1.25 / 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.lon(), -180.0 + 2.5 / 60.0, epsilon = 1e-12);

        let point = decode("rr99xx").unwrap();
        assert_abs_diff_eq!(point.lat(), 90.0 - 1.25 / 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lon(), 180.0 - 2.5 / 60.0, epsilon = 1e-9);
    }

    #[test]
    fn malformed_locator() {
        assert_matches!(decode("JO6"), Err(GridposError::Format(_)));
        assert_matches!(decode("ZZ99ZZ"), Err(GridposError::Format(_)));
    }
}
