use geo_types::{coord, Coord, CoordNum};
use num_traits::Float;

use crate::geo::{Coordinate, GeoPoint, NewGeoPoint};

impl<T: CoordNum + Float> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}

impl From<&Coordinate> for Coord<f64> {
    fn from(value: &Coordinate) -> Self {
        coord!(x: value.lon(), y: value.lat())
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate::new(value.y, value.x)
    }
}
