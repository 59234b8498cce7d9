use geo_types::{point, CoordNum, Point};
use num_traits::Float;

use crate::geo::{Coordinate, GeoPoint, NewGeoPoint};

impl<T: CoordNum + Float> GeoPoint for Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<&Coordinate> for Point<f64> {
    fn from(value: &Coordinate) -> Self {
        point!(x: value.lon(), y: value.lat())
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Coordinate::new(value.y(), value.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_foreign_points() {
        let seattle: Point<f64> = Point::latlon(47.6062, -122.3321);
        let portland = Coordinate::new(45.5152, -122.6784);
        assert_eq!(seattle.distance_miles(&portland), 145);
        assert_eq!(Point::<f64>::from(&portland).y(), 45.5152);
    }

    #[test]
    fn f32_points() {
        let p: Point<f32> = Point::lonlat(10.0, 20.0);
        assert_eq!(p.lat(), 20.0);
        assert_eq!(p.lon_rad(), 10.0f32.to_radians());
    }
}
