//! Synthetic points placed at a fixed distance around a center.
//!
//! Points are located by bisection over a step `t`: the trial point for an angle `θ`
//! (counter-clockwise from east) is `(lat + t·sin θ, lon + t·cos θ)`, and `t` is narrowed
//! until the great-circle distance back to the center matches the target. Treating degree
//! offsets as locally proportional to the step is only accurate up to sub-continental
//! distances. [`destination`](crate::geo::great_circle::destination) gives the exact
//! spherical solution where that matters.

use crate::error::{GridposError, Result};
use crate::geo::great_circle::{distance_meters, EARTH_MEAN_RADIUS};
use crate::geo::normalize::{normalize_latitude, normalize_longitude};
use crate::geo::traits::point::GeoPoint;
use crate::format::CoordinateFormat;
use crate::geo::Coordinate;

const MAX_ITERATIONS: usize = 1000;
const JITTER_TOLERANCE: f64 = 0.01;
const SUBDIVISION_TOLERANCE: f64 = 10.0;
// The subdivision search bound in degrees is the distance in meters divided by this. For
// distances above roughly 1800 km the bound exceeds a half turn and the search may settle
// on the wrong side of the globe.
const SUBDIVISION_BOUND_DIVISOR: f64 = 10_000.0;

/// Returns `count` points evenly spread on a circle of `distance` meters around `center`.
///
/// Point `i` lies at angle `360·i/count` degrees counter-clockwise from east. A single point
/// is the center itself.
///
/// ```
/// use gridpos::geo::{jitter, Coordinate, GeoPoint};
///
/// let points = jitter(4, &Coordinate::origin(), 10_000.0).unwrap();
/// assert_eq!(points.len(), 4);
/// assert!((points[0].distance_meters(&Coordinate::origin()) - 10_000.0).abs() < 1.0);
/// ```
pub fn jitter(count: usize, center: &Coordinate, distance: f64) -> Result<Vec<Coordinate>> {
    if count == 0 {
        return Err(GridposError::Range(
            "number of jitter points must be at least 1".to_string(),
        ));
    }
    check_arguments(center, distance)?;

    if count == 1 {
        return Ok(vec![center.clone()]);
    }

    let format = CoordinateFormat::new(center.precision());
    Ok((0..count)
        .map(|i| {
            let angle = 360.0 * i as f64 / count as f64;
            let (lat, lon) = locate(
                center,
                angle,
                distance,
                std::f64::consts::PI * EARTH_MEAN_RADIUS,
                JITTER_TOLERANCE,
            );
            Coordinate::with_format(lat, lon, &format)
        })
        .collect())
}

/// Angle (degrees counter-clockwise from east) of the `index`-th point of the layered binary
/// subdivision of the circle.
///
/// Indices 0 to 3 are the four cardinal directions (0°, 180°, 90°, 270°). Every following
/// layer doubles the number of points and places them halfway between the points of all
/// earlier layers, so any prefix of indices is spread around the whole circle.
///
/// ```
/// use gridpos::geo::subdivision_angle;
///
/// assert_eq!(subdivision_angle(2), 90.0);
/// assert_eq!(subdivision_angle(4), 45.0);
/// assert_eq!(subdivision_angle(8), 22.5);
/// ```
pub fn subdivision_angle(index: u64) -> f64 {
    const CARDINAL: [f64; 4] = [0.0, 180.0, 90.0, 270.0];
    if index < 4 {
        return CARDINAL[index as usize];
    }

    let mut start = 4u64;
    let mut count = 4u64;
    while index >= start + count {
        start += count;
        count *= 2;
    }

    let step = 360.0 / count as f64;
    let position = (index - start) as f64;
    step / 2.0 + position * step
}

/// Point number `index` of the layered binary subdivision (see [`subdivision_angle`]) at
/// `distance` meters from `center`.
///
/// The point is located to within 10 m. The search covers steps up to
/// `distance / 10000` degrees, which is too small a bound for very large distances: such
/// points may miss the target distance.
pub fn binary_angular_subdivision(
    index: u64,
    center: &Coordinate,
    distance: f64,
) -> Result<Coordinate> {
    check_arguments(center, distance)?;

    let (lat, lon) = locate(
        center,
        subdivision_angle(index),
        distance,
        distance / SUBDIVISION_BOUND_DIVISOR,
        SUBDIVISION_TOLERANCE,
    );

    Ok(Coordinate::with_format(
        lat,
        lon,
        &CoordinateFormat::new(center.precision()),
    ))
}

fn check_arguments(center: &Coordinate, distance: f64) -> Result<()> {
    if !(distance > 0.0 && distance.is_finite()) {
        return Err(GridposError::Range(format!(
            "distance must be positive, got {distance}"
        )));
    }
    if !center.lat().is_finite() || !center.lon().is_finite() {
        return Err(GridposError::Range(format!(
            "center ({center}) is not a valid coordinate"
        )));
    }

    Ok(())
}

/// Bisects the step `t` in `[0, upper]` until the trial point is `distance` meters from
/// `center`, within `tolerance`, or the iteration cap is hit.
fn locate(
    center: &Coordinate,
    angle: f64,
    distance: f64,
    upper: f64,
    tolerance: f64,
) -> (f64, f64) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let (mut lo, mut hi) = (0.0, upper);
    let mut trial = (center.lat(), center.lon());

    for iteration in 0..MAX_ITERATIONS {
        let t = (lo + hi) / 2.0;
        trial = (
            normalize_latitude(center.lat() + t * sin),
            normalize_longitude(center.lon() + t * cos),
        );

        let measured = distance_meters(center.lat(), center.lon(), trial.0, trial.1);
        if (measured - distance).abs() <= tolerance {
            log::debug!("Located point at {angle}° after {} iterations", iteration + 1);
            return trial;
        }

        if measured < distance {
            lo = t;
        } else {
            hi = t;
        }
    }

    log::debug!(
        "Search for point at {angle}°, {distance} m did not converge within {MAX_ITERATIONS} iterations"
    );
    trial
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn four_points_around_origin() {
        let origin = Coordinate::origin();
        let points = jitter(4, &origin, 10_000.0).unwrap();
        assert_eq!(points.len(), 4);

        let mut bearings: Vec<f64> = points
            .iter()
            .map(|point| {
                assert_abs_diff_eq!(point.distance_meters(&origin), 10_000.0, epsilon = 1.0);
                origin.initial_bearing(point)
            })
            .collect();
        bearings.sort_by(f64::total_cmp);
        for (bearing, expected) in bearings.iter().zip([0.0, 90.0, 180.0, 270.0]) {
            assert_abs_diff_eq!(*bearing, expected, epsilon = 0.01);
        }
    }

    #[test]
    fn first_point_is_east() {
        let center = Coordinate::new(47.6062, -122.3321);
        let points = jitter(7, &center, 10_000.0).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(center.bearing_degrees(&points[0]), 90);
        for point in &points {
            assert_abs_diff_eq!(point.distance_meters(&center), 10_000.0, epsilon = 0.011);
        }
    }

    #[test]
    fn keeps_center_precision() {
        let center = Coordinate::with_format(-33.8688, 151.2093, &CoordinateFormat::new(6));
        let points = jitter(3, &center, 500.0).unwrap();
        assert!(points.iter().all(|p| p.precision() == 6));
    }

    #[test]
    fn single_point_is_center() {
        let center = Coordinate::new(47.6062, -122.3321);
        assert_eq!(jitter(1, &center, 10_000.0).unwrap(), vec![center]);
    }

    #[test]
    fn rejects_bad_arguments() {
        let origin = Coordinate::origin();
        assert_matches!(jitter(0, &origin, 10.0), Err(GridposError::Range(_)));
        assert_matches!(jitter(4, &origin, 0.0), Err(GridposError::Range(_)));
        assert_matches!(jitter(4, &origin, -5.0), Err(GridposError::Range(_)));
        assert_matches!(jitter(4, &origin, f64::NAN), Err(GridposError::Range(_)));
        assert_matches!(
            jitter(4, &Coordinate::invalid(), 10.0),
            Err(GridposError::Range(_))
        );
        assert_matches!(
            binary_angular_subdivision(3, &origin, 0.0),
            Err(GridposError::Range(_))
        );
    }

    #[test]
    fn subdivision_layers() {
        let angles: Vec<f64> = (0..16).map(subdivision_angle).collect();
        assert_eq!(
            angles,
            vec![
                0.0, 180.0, 90.0, 270.0, // cardinal
                45.0, 135.0, 225.0, 315.0, // layer 1
                22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5, 337.5, // layer 2
            ]
        );
        assert_eq!(subdivision_angle(16), 11.25);
        assert_eq!(subdivision_angle(31), 348.75);
        assert_eq!(subdivision_angle(32), 5.625);
    }

    #[test]
    fn subdivision_points() {
        let center = Coordinate::new(47.6062, -122.3321);
        for index in 0..12 {
            let point = binary_angular_subdivision(index, &center, 10_000.0).unwrap();
            assert_abs_diff_eq!(point.distance_meters(&center), 10_000.0, epsilon = 10.0);
        }

        let north = binary_angular_subdivision(2, &center, 10_000.0).unwrap();
        assert_eq!(center.bearing_degrees(&north), 0);
        let west = binary_angular_subdivision(1, &center, 10_000.0).unwrap();
        assert_eq!(center.bearing_degrees(&west), 270);
    }
}
