//! Interoperability with the [`geo_types`] crate.
//!
//! `Coord` and `Point` store longitude in `x` and latitude in `y`.

mod coord;
mod point;
