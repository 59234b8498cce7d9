use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// Raw geographic point in degrees.
///
/// No normalization or validation is applied; see [`Coordinate`](crate::geo::Coordinate) for
/// the canonical, validated representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another one.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

impl RelativeEq for GeoPoint2d {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lon.relative_eq(&other.lon, epsilon, max_relative)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use gridpos::geo::GeoPoint;
/// use gridpos::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <::gridpos::geo::GeoPoint2d as ::gridpos::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    #[test]
    fn tolerance_comparison() {
        let a = GeoPoint2d::latlon(47.6062, -122.3321);
        let b = GeoPoint2d::latlon(47.6062 + 1e-9, -122.3321 - 1e-9);
        assert_abs_diff_eq!(a, b, epsilon = 1e-8);
        assert_abs_diff_ne!(a, b, epsilon = 1e-10);
    }

    #[test]
    fn lonlat_order() {
        let point = GeoPoint2d::lonlat(10.0, 20.0);
        assert_eq!(point.lat(), 20.0);
        assert_eq!(point.lon(), 10.0);
    }
}
