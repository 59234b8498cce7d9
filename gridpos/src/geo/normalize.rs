//! Centered-modulus reduction of angles into their canonical ranges.

/// Reduces a longitude into `(-180, 180]`.
///
/// ```
/// use gridpos::geo::normalize_longitude;
///
/// assert_eq!(normalize_longitude(370.0), 10.0);
/// assert_eq!(normalize_longitude(-180.0), 180.0);
/// ```
pub fn normalize_longitude(lon: f64) -> f64 {
    // In-range values are returned untouched: the reduction below is not exact for them
    // (`-0.1` would come back as `-0.10000000000002274`).
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }

    let mut reduced = lon % 360.0;
    if reduced <= 0.0 {
        reduced += 360.0;
    }
    if reduced > 180.0 {
        reduced -= 360.0;
    }

    reduced
}

/// Reduces a latitude into `[-90, 90]`.
///
/// Values past a pole are reflected back (`95` becomes `85`), not wrapped.
///
/// ```
/// use gridpos::geo::normalize_latitude;
///
/// assert_eq!(normalize_latitude(95.0), 85.0);
/// ```
pub fn normalize_latitude(lat: f64) -> f64 {
    if (-90.0..=90.0).contains(&lat) {
        return lat;
    }

    let reduced = normalize_longitude(lat);
    if reduced < -90.0 {
        -180.0 - reduced
    } else if reduced > 90.0 {
        180.0 - reduced
    } else {
        reduced
    }
}
