//! Canonical geographic coordinates and the conversions around them.
//!
//! * [`geo::Coordinate`] is a validated latitude/longitude pair with its decimal text.
//! * [`geo::great_circle`] measures distances and bearings on a spherical Earth.
//! * [`geo::jitter`] and [`geo::binary_angular_subdivision`] place synthetic points around a
//!   center.
//! * [`geo::Utm`] and [`grid::Mgrs`] convert to and from the WGS84 UTM and MGRS grids.
//! * [`grid::maidenhead`] decodes 6-character Maidenhead locators.
//! * [`parse`] reads hand-entered degree-minute positions.
//!
//! ```
//! use gridpos::geo::{Coordinate, GeoPoint};
//!
//! let seattle = Coordinate::new(47.6062, -122.3321);
//! let portland = Coordinate::new(45.5152, -122.6784);
//! assert_eq!(seattle.distance_miles(&portland), 145);
//! assert_eq!(seattle.to_mgrs(5).unwrap().to_string(), "10TET5020072748");
//! ```

pub mod error;
pub mod format;
pub mod geo;
pub mod grid;
pub mod parse;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use error::{GridposError, Result};
