//! Geographic coordinates (latitude and longitude): the canonical [`Coordinate`] value, great-circle
//! geometry, synthetic point generation and the UTM projection (see [`Utm`]).

mod coordinate;
pub(crate) mod datum;
pub mod great_circle;
pub mod impls;
mod jitter;
pub(crate) mod normalize;
pub(crate) mod traits;

pub use coordinate::Coordinate;
pub use datum::Datum;
pub use great_circle::{centroid, destination, EARTH_MEAN_RADIUS};
pub use impls::point::GeoPoint2d;
pub use impls::projection::utm::{Hemisphere, Utm, UtmCoord, UtmProjection};
pub use jitter::{binary_angular_subdivision, jitter, subdivision_angle};
pub use normalize::{normalize_latitude, normalize_longitude};
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
