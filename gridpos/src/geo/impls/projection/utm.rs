//! Universal Transverse Mercator projection on the WGS84 ellipsoid.
//!
//! Forward and inverse transforms use the classic series expansions (meridian arc to the
//! 6th power of eccentricity, easting/northing to the 5th/6th power of the longitude term,
//! footpoint latitude with four correction terms). The series are exact arithmetic that
//! must not be simplified: round trips rely on every term.
//!
//! Polar regions (UPS) and the Norway/Svalbard zone exceptions are not supported.

use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::{GridposError, Result};
use crate::geo::datum::Datum;
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::normalize::normalize_longitude;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Scale factor on the central meridian.
pub const SCALE_FACTOR: f64 = 0.9996;
/// Easting of the central meridian.
pub const FALSE_EASTING: f64 = 500_000.0;
/// Northing added in the southern hemisphere to keep northings positive.
pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;
/// Southernmost latitude covered by UTM.
pub const MIN_LATITUDE: f64 = -80.0;
/// Northernmost latitude covered by UTM.
pub const MAX_LATITUDE: f64 = 84.0;

/// Hemisphere of a UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// Latitude `>= 0`.
    North,
    /// Latitude `< 0`, northing includes [`FALSE_NORTHING_SOUTH`].
    South,
}

impl Hemisphere {
    /// `'N'` or `'S'`.
    pub fn as_char(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

/// Position in a UTM zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmCoord {
    zone: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
}

impl UtmCoord {
    /// Creates a UTM coordinate, checking that the zone is in `1..=60` and that easting and
    /// northing are finite.
    pub fn new(zone: u8, hemisphere: Hemisphere, easting: f64, northing: f64) -> Result<Self> {
        check_zone(zone)?;
        if !easting.is_finite() || !northing.is_finite() {
            return Err(GridposError::Range(format!(
                "easting {easting} and northing {northing} must be finite"
            )));
        }

        Ok(Self {
            zone,
            hemisphere,
            easting,
            northing,
        })
    }

    /// Zone number, `1..=60`.
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// Hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Easting in meters, including the false easting.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing in meters, including the false northing in the southern hemisphere.
    pub fn northing(&self) -> f64 {
        self.northing
    }
}

impl Display for UtmCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {:.3} {:.3}",
            self.zone,
            self.hemisphere.as_char(),
            self.easting,
            self.northing
        )
    }
}

/// UTM transform for a datum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Utm {
    datum: Datum,
}

impl Utm {
    /// Creates a transform for the given datum.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }

    /// Zone containing the longitude. Longitude 180 belongs to zone 60.
    pub fn zone_for(lon: f64) -> u8 {
        let lon = normalize_longitude(lon);
        let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
        zone.clamp(1, 60) as u8
    }

    /// Longitude of the central meridian of a zone.
    pub fn central_meridian(zone: u8) -> f64 {
        -183.0 + 6.0 * f64::from(zone)
    }

    /// Projects a point into the zone containing it.
    pub fn forward(&self, lat: f64, lon: f64) -> Result<UtmCoord> {
        if !lon.is_finite() {
            return Err(GridposError::Range(format!("longitude {lon} is not finite")));
        }

        self.forward_in_zone(lat, lon, Self::zone_for(lon))
    }

    /// Projects a point into the given zone, even if the point lies outside of it.
    pub fn forward_in_zone(&self, lat: f64, lon: f64, zone: u8) -> Result<UtmCoord> {
        check_zone(zone)?;
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(GridposError::UnsupportedRegion(format!(
                "latitude {lat} is outside of UTM coverage [{MIN_LATITUDE}, {MAX_LATITUDE}]"
            )));
        }
        if !lon.is_finite() {
            return Err(GridposError::Range(format!("longitude {lon} is not finite")));
        }

        let a = self.datum.semimajor();
        let e2 = self.datum.eccentricity_sq();
        let ep2 = self.datum.second_eccentricity_sq();

        let phi = lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let d_lon = normalize_longitude(lon - Self::central_meridian(zone));

        let n = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let big_a = d_lon.to_radians() * cos_phi;
        let m = self.meridian_arc(phi);

        let easting = SCALE_FACTOR
            * n
            * (big_a
                + (1.0 - t + c) * big_a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * big_a.powi(5) / 120.0)
            + FALSE_EASTING;

        let mut northing = SCALE_FACTOR
            * (m + n
                * tan_phi
                * (big_a * big_a / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * big_a.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * big_a.powi(6)
                        / 720.0));

        let hemisphere = if lat < 0.0 {
            northing += FALSE_NORTHING_SOUTH;
            Hemisphere::South
        } else {
            Hemisphere::North
        };

        Ok(UtmCoord {
            zone,
            hemisphere,
            easting,
            northing,
        })
    }

    /// Converts a UTM coordinate back into latitude and longitude.
    pub fn inverse(&self, utm: &UtmCoord) -> Result<GeoPoint2d> {
        check_zone(utm.zone)?;

        let a = self.datum.semimajor();
        let e2 = self.datum.eccentricity_sq();
        let ep2 = self.datum.second_eccentricity_sq();

        let x = utm.easting - FALSE_EASTING;
        let y = match utm.hemisphere {
            Hemisphere::North => utm.northing,
            Hemisphere::South => utm.northing - FALSE_NORTHING_SOUTH,
        };

        let m = y / SCALE_FACTOR;
        let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0));

        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
        let j1 = 3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0;
        let j2 = 21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0;
        let j3 = 151.0 * e1.powi(3) / 96.0;
        let j4 = 1097.0 * e1.powi(4) / 512.0;

        let fp = mu
            + j1 * (2.0 * mu).sin()
            + j2 * (4.0 * mu).sin()
            + j3 * (6.0 * mu).sin()
            + j4 * (8.0 * mu).sin();

        let (sin_fp, cos_fp) = fp.sin_cos();
        let tan_fp = fp.tan();
        let c1 = ep2 * cos_fp * cos_fp;
        let t1 = tan_fp * tan_fp;
        let r1 = a * (1.0 - e2) / (1.0 - e2 * sin_fp * sin_fp).powf(1.5);
        let n1 = a / (1.0 - e2 * sin_fp * sin_fp).sqrt();
        let d = x / (n1 * SCALE_FACTOR);

        let lat = fp
            - (n1 * tan_fp / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos_fp;

        Ok(GeoPoint2d::latlon(
            lat.to_degrees(),
            normalize_longitude(Self::central_meridian(utm.zone) + lon.to_degrees()),
        ))
    }

    /// Length of the meridian arc from the equator to latitude `phi` (radians).
    fn meridian_arc(&self, phi: f64) -> f64 {
        let a = self.datum.semimajor();
        let e2 = self.datum.eccentricity_sq();
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        a * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }
}

fn check_zone(zone: u8) -> Result<()> {
    if (1..=60).contains(&zone) {
        Ok(())
    } else {
        Err(GridposError::Range(format!("UTM zone {zone} is not in 1..=60")))
    }
}

/// [`Projection`] from any geographic point type into UTM coordinates.
#[derive(Debug, Clone, Copy)]
pub struct UtmProjection<In> {
    utm: Utm,
    phantom_in: PhantomData<In>,
}

impl<In> UtmProjection<In> {
    /// Creates a projection for the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            utm: Utm::new(datum),
            phantom_in: Default::default(),
        }
    }
}

impl<In> Default for UtmProjection<In> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint<f64>> Projection for UtmProjection<In> {
    type InPoint = In;
    type OutPoint = UtmCoord;

    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint> {
        self.utm.forward(input.lat(), input.lon())
    }

    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint> {
        let point = self.utm.inverse(input)?;
        Ok(In::latlon(point.lat(), point.lon()))
    }
}
