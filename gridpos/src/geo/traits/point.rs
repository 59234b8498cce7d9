use crate::geo::great_circle;
use num_traits::Float;

/// Point on the surface of the Earth given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle (haversine) distance to `other` in meters.
    fn distance_meters(&self, other: &impl GeoPoint<Num = f64>) -> f64
    where
        Self: GeoPoint<Num = f64>,
    {
        great_circle::distance_meters(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Great-circle distance to `other` in whole statute miles.
    fn distance_miles(&self, other: &impl GeoPoint<Num = f64>) -> i64
    where
        Self: GeoPoint<Num = f64>,
    {
        great_circle::distance_miles(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Initial bearing towards `other` in degrees `[0, 360)`, not rounded.
    fn initial_bearing(&self, other: &impl GeoPoint<Num = f64>) -> f64
    where
        Self: GeoPoint<Num = f64>,
    {
        great_circle::initial_bearing(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Initial bearing towards `other` rounded to whole degrees.
    fn bearing_degrees(&self, other: &impl GeoPoint<Num = f64>) -> i32
    where
        Self: GeoPoint<Num = f64>,
    {
        great_circle::bearing(self.lat(), self.lon(), other.lat(), other.lon())
    }
}

/// Point type that can be constructed from latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
