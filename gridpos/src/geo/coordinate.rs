use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridposError, Result};
use crate::format::{format_decimal, CoordinateFormat, Rounding, DEFAULT_PRECISION};
use crate::geo::impls::projection::utm::{Utm, UtmCoord};
use crate::geo::normalize::{normalize_latitude, normalize_longitude};
use crate::geo::traits::point::GeoPoint;
use crate::grid::maidenhead;
use crate::grid::mgrs::Mgrs;
use crate::parse::degree_minutes_to_decimal;

/// Canonical latitude/longitude pair.
///
/// A coordinate keeps both the decimal text of each component and its parsed value.
/// Coordinates built from numbers are normalized (latitude into `[-90, 90]`, longitude into
/// `(-180, 180]`) and rendered with the precision of their [`CoordinateFormat`]. Coordinates
/// built from text keep the text as given, so they may be invalid; use
/// [`Coordinate::is_valid`] before relying on them.
///
/// ```
/// use gridpos::geo::{Coordinate, GeoPoint};
///
/// let coordinate = Coordinate::new(95.0, 370.0);
/// assert_eq!(coordinate.lat(), 85.0);
/// assert_eq!(coordinate.lon_text(), Some("10.0000"));
/// assert!(coordinate.is_valid());
///
/// assert!(!Coordinate::from_text("999", "0").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CoordinateRepr", into = "CoordinateRepr")]
pub struct Coordinate {
    lat_text: Option<String>,
    lon_text: Option<String>,
    lat: f64,
    lon: f64,
    precision: u32,
}

impl Coordinate {
    /// Creates a coordinate from numeric degrees using the default format.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self::with_format(lat, lon, &CoordinateFormat::default())
    }

    /// Creates a coordinate from numeric degrees, rendering its text with the given format.
    pub fn with_format(lat: f64, lon: f64, format: &CoordinateFormat) -> Self {
        let lat = normalize_latitude(lat);
        let lon = normalize_longitude(lon);

        Self {
            lat_text: Some(format_decimal(lat, format.precision, Rounding::HalfUp)),
            lon_text: Some(format_decimal(lon, format.precision, Rounding::HalfUp)),
            lat,
            lon,
            precision: format.precision,
        }
    }

    /// Creates a coordinate from decimal-degree text.
    ///
    /// The text is kept as given (trimmed). Text that does not parse gives a coordinate
    /// with non-finite values that is not [valid](Self::is_valid).
    pub fn from_text(lat: &str, lon: &str) -> Self {
        Self::from_optional_text(Some(lat), Some(lon))
    }

    /// Same as [`Coordinate::from_text`], but either component may be absent.
    pub fn from_optional_text(lat: Option<&str>, lon: Option<&str>) -> Self {
        let lat_text = lat.map(|text| text.trim().to_string());
        let lon_text = lon.map(|text| text.trim().to_string());

        Self {
            lat: parse_component(lat_text.as_deref()),
            lon: parse_component(lon_text.as_deref()),
            lat_text,
            lon_text,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Coordinate with no latitude and longitude at all.
    pub fn invalid() -> Self {
        Self::from_optional_text(None, None)
    }

    /// Intersection of the equator and the prime meridian.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The North Pole.
    pub fn north_pole() -> Self {
        Self::new(90.0, 0.0)
    }

    /// The South Pole.
    pub fn south_pole() -> Self {
        Self::new(-90.0, 0.0)
    }

    /// Center of the cell of a 6-character Maidenhead locator.
    pub fn from_maidenhead(locator: &str) -> Result<Self> {
        let point = maidenhead::decode(locator)?;
        Ok(Self::new(point.lat(), point.lon()))
    }

    /// Creates a coordinate from degree-minute text such as `"47-32.23N"`, `"122-14.33W"`.
    ///
    /// See [`degree_minutes_to_decimal`] for the accepted forms. Empty input gives an empty,
    /// invalid component.
    pub fn from_degree_minutes(lat: &str, lon: &str) -> Result<Self> {
        let lat = degree_minutes_to_decimal(lat)?;
        let lon = degree_minutes_to_decimal(lon)?;
        Ok(Self::from_text(&lat, &lon))
    }

    /// South-west corner of the cell of an MGRS grid reference.
    pub fn from_mgrs(reference: &str) -> Result<Self> {
        let point = Mgrs::from_str(reference)?.to_point()?;
        Ok(Self::new(point.lat(), point.lon()))
    }

    /// Encodes the coordinate as an MGRS reference with `digits` (0 to 5) digits per axis.
    pub fn to_mgrs(&self, digits: u8) -> Result<Mgrs> {
        self.require_valid()?;
        Mgrs::from_point(self, digits)
    }

    /// Projects the coordinate into its UTM zone.
    pub fn to_utm(&self) -> Result<UtmCoord> {
        self.require_valid()?;
        Utm::default().forward(self.lat, self.lon)
    }

    /// Latitude text, if any.
    pub fn lat_text(&self) -> Option<&str> {
        self.lat_text.as_deref()
    }

    /// Longitude text, if any.
    pub fn lon_text(&self) -> Option<&str> {
        self.lon_text.as_deref()
    }

    /// Number of decimal digits the coordinate was rendered with.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Renders the coordinate as `"lat,lon"` with the given number of decimal digits,
    /// independent of the precision it was created with.
    pub fn formatted(&self, digits: u32) -> Option<String> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return None;
        }

        Some(format!(
            "{},{}",
            format_decimal(self.lat, digits, Rounding::HalfUp),
            format_decimal(self.lon, digits, Rounding::HalfUp)
        ))
    }

    /// Returns true if both components are present, numeric and within `[-90, 90]` and
    /// `[-180, 180]` respectively.
    ///
    /// Never fails; unparsable text is reported through the log.
    pub fn is_valid(&self) -> bool {
        let lat = checked_component("latitude", self.lat_text.as_deref());
        let lon = checked_component("longitude", self.lon_text.as_deref());

        match (lat, lon) {
            (Some(lat), Some(lon)) => lat.abs() <= 90.0 && lon.abs() <= 180.0,
            _ => false,
        }
    }

    /// Returns true if the coordinate is valid and neither component rounds to zero whole
    /// degrees.
    pub fn is_valid_not_zero(&self) -> bool {
        self.is_valid()
            && format_decimal(self.lat, 0, Rounding::HalfUp) != "0"
            && format_decimal(self.lon, 0, Rounding::HalfUp) != "0"
    }

    fn require_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GridposError::Range(format!("invalid coordinate ({self})")))
        }
    }
}

impl GeoPoint for Coordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{}",
            self.lat_text.as_deref().unwrap_or_default(),
            self.lon_text.as_deref().unwrap_or_default()
        )
    }
}

fn parse_component(text: Option<&str>) -> f64 {
    text.and_then(|text| text.parse().ok()).unwrap_or(f64::NAN)
}

fn checked_component(name: &str, text: Option<&str>) -> Option<f64> {
    let text = text.filter(|text| !text.is_empty())?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            log::warn!("{name} {text:?} is not a finite number ({value})");
            None
        }
        Err(err) => {
            log::warn!("{name} {text:?} is not a number: {err}");
            None
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CoordinateRepr {
    lat: Option<String>,
    lon: Option<String>,
    #[serde(default = "default_precision")]
    precision: u32,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl From<CoordinateRepr> for Coordinate {
    fn from(repr: CoordinateRepr) -> Self {
        Self {
            precision: repr.precision,
            ..Self::from_optional_text(repr.lat.as_deref(), repr.lon.as_deref())
        }
    }
}

impl From<Coordinate> for CoordinateRepr {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat_text,
            lon: coordinate.lon_text,
            precision: coordinate.precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn normalizes_numeric_input() {
        let coordinate = Coordinate::new(95.0, 370.0);
        assert_eq!(coordinate.lat(), 85.0);
        assert_eq!(coordinate.lon(), 10.0);
        assert_eq!(coordinate.lat_text(), Some("85.0000"));
        assert_eq!(coordinate.lon_text(), Some("10.0000"));
    }

    #[test]
    fn renders_half_up() {
        let coordinate = Coordinate::new(47.60625, -122.33215);
        assert_eq!(coordinate.to_string(), "47.6063,-122.3322");
        assert_eq!(coordinate.lat(), 47.60625);
    }

    #[test]
    fn configured_precision() {
        let format = CoordinateFormat::new(6);
        let coordinate = Coordinate::with_format(47.6062, -122.3321, &format);
        assert_eq!(coordinate.to_string(), "47.606200,-122.332100");
        assert_eq!(coordinate.precision(), 6);
        assert_eq!(
            coordinate.formatted(1),
            Some("47.6,-122.3".to_string())
        );
    }

    #[test]
    fn sentinels() {
        assert_eq!(Coordinate::origin().to_string(), "0.0000,0.0000");
        assert_eq!(Coordinate::north_pole().lat(), 90.0);
        assert_eq!(Coordinate::south_pole().lat(), -90.0);
        assert!(Coordinate::north_pole().is_valid());
        assert!(!Coordinate::invalid().is_valid());
        assert_eq!(Coordinate::invalid().lat_text(), None);
        assert_eq!(Coordinate::invalid().formatted(4), None);
    }

    #[test]
    fn validity() {
        assert!(Coordinate::from_text("47.6062", "-122.3321").is_valid());
        assert!(Coordinate::from_text(" 90 ", "-180").is_valid());
        assert!(!Coordinate::from_text("999", "0").is_valid());
        assert!(!Coordinate::from_text("0", "180.5").is_valid());
        assert!(!Coordinate::from_text("abc", "0").is_valid());
        assert!(!Coordinate::from_text("", "0").is_valid());
        assert!(!Coordinate::from_text("NaN", "0").is_valid());
        assert!(!Coordinate::from_optional_text(Some("10"), None).is_valid());
    }

    #[test]
    fn validity_not_zero() {
        assert!(Coordinate::origin().is_valid());
        assert!(!Coordinate::origin().is_valid_not_zero());
        assert!(!Coordinate::new(0.3, -0.4).is_valid_not_zero());
        assert!(!Coordinate::new(47.0, 0.2).is_valid_not_zero());
        assert!(Coordinate::new(0.6, -0.5).is_valid_not_zero());
        assert!(Coordinate::new(47.6062, -122.3321).is_valid_not_zero());
        assert!(!Coordinate::from_text("999", "10").is_valid_not_zero());
    }

    #[test]
    fn maidenhead() {
        let coordinate = Coordinate::from_maidenhead("CN87vm").unwrap();
        assert_eq!(coordinate.to_string(), "47.5208,-122.2083");
        assert_matches!(
            Coordinate::from_maidenhead("CN8"),
            Err(GridposError::Format(_))
        );
    }

    #[test]
    fn degree_minutes() {
        let coordinate = Coordinate::from_degree_minutes("47-32.23N", "122-14.33W").unwrap();
        assert_eq!(coordinate.lat_text(), Some("47.53717"));
        assert_eq!(coordinate.lon_text(), Some("-122.23883"));
        assert!(coordinate.is_valid());

        let empty = Coordinate::from_degree_minutes("", "").unwrap();
        assert!(!empty.is_valid());
    }

    #[test]
    fn mgrs_round_trip() {
        let coordinate = Coordinate::new(47.6062, -122.3321);
        let mgrs = coordinate.to_mgrs(5).unwrap();
        assert_eq!(mgrs.to_string(), "10TET5020072748");

        let decoded = Coordinate::from_mgrs("10TET5020072748").unwrap();
        assert_abs_diff_eq!(coordinate.distance_meters(&decoded), 0.0, epsilon = 1.5);
    }

    #[test]
    fn invalid_coordinate_cannot_be_projected() {
        assert_matches!(
            Coordinate::invalid().to_utm(),
            Err(GridposError::Range(_))
        );
        assert_matches!(
            Coordinate::from_text("999", "0").to_mgrs(5),
            Err(GridposError::Range(_))
        );
        assert_matches!(
            Coordinate::north_pole().to_utm(),
            Err(GridposError::UnsupportedRegion(_))
        );
    }

    #[test]
    fn serde_keeps_text() {
        let coordinate = Coordinate::new(47.6062, -122.3321);
        let json = serde_json::to_string(&coordinate).unwrap();
        assert_eq!(
            json,
            r#"{"lat":"47.6062","lon":"-122.3321","precision":4}"#
        );

        let restored: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lat_text(), Some("47.6062"));
        assert_eq!(restored.lat(), 47.6062);

        let invalid: Coordinate = serde_json::from_str(r#"{"lat":null,"lon":null}"#).unwrap();
        assert!(!invalid.is_valid());
    }
}
