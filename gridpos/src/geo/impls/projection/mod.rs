//! Implementations of [`Projection`](crate::geo::Projection).

pub mod utm;
