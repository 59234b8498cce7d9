use serde::{Deserialize, Serialize};

/// Reference ellipsoid of a geodetic datum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates an ellipsoid from its equatorial radius (meters) and inverse flattening.
    pub const fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Equatorial radius in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening `1/f`.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening `f`.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// Square of the first eccentricity, `e² = f(2 - f)`.
    pub fn eccentricity_sq(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Square of the second eccentricity, `e'² = e² / (1 - e²)`.
    pub fn second_eccentricity_sq(&self) -> f64 {
        let e2 = self.eccentricity_sq();
        e2 / (1.0 - e2)
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
