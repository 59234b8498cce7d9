//! Great-circle geometry on a sphere of the Earth's mean radius.

use crate::format::CoordinateFormat;
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::normalize::{normalize_latitude, normalize_longitude};
use crate::geo::{Coordinate, GeoPoint, NewGeoPoint};

/// Mean Earth radius in meters used by all spherical computations.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_009.0;

const METERS_TO_MILES: f64 = 0.000621371;

/// Haversine distance between two points in meters.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_MEAN_RADIUS * c
}

/// Haversine distance between two points rounded to whole statute miles.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i64 {
    (distance_meters(lat1, lon1, lat2, lon2) * METERS_TO_MILES).round() as i64
}

/// Initial bearing from the first point towards the second in degrees, in `[0, 360)`.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Initial bearing rounded to whole degrees, in `0..360`.
///
/// Bearings that round up to 360 are reported as 0.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i32 {
    (initial_bearing(lat1, lon1, lat2, lon2).round() as i32).rem_euclid(360)
}

/// Arithmetic mean of latitudes and longitudes of the given coordinates.
///
/// This is a planar approximation and is only meaningful for points close to each other.
/// Points on opposite sides of the antimeridian average to a longitude near 0, not near 180.
///
/// Coordinates without numeric values (see [`Coordinate::invalid`]) are skipped. An empty
/// input gives [`Coordinate::origin`]; a single usable coordinate is returned unchanged.
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Coordinate {
    let usable: Vec<&Coordinate> = points
        .into_iter()
        .filter(|point| point.lat().is_finite() && point.lon().is_finite())
        .collect();

    match usable.as_slice() {
        [] => Coordinate::origin(),
        [single] => (*single).clone(),
        [first, ..] => {
            let count = usable.len() as f64;
            let lat = usable.iter().map(|p| p.lat()).sum::<f64>() / count;
            let lon = usable.iter().map(|p| p.lon()).sum::<f64>() / count;
            Coordinate::with_format(lat, lon, &CoordinateFormat::new(first.precision()))
        }
    }
}

/// Point reached by travelling `distance` meters from `start` along the great circle
/// with the given initial `bearing` (degrees clockwise from north).
///
/// Closed-form spherical solution, exact on the sphere used by [`distance_meters`].
pub fn destination(start: &impl GeoPoint<Num = f64>, bearing: f64, distance: f64) -> GeoPoint2d {
    let phi1 = start.lat_rad();
    let lambda1 = start.lon_rad();
    let theta = bearing.to_radians();
    let delta = distance / EARTH_MEAN_RADIUS;

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint2d::latlon(
        normalize_latitude(phi2.to_degrees()),
        normalize_longitude(lambda2.to_degrees()),
    )
}
