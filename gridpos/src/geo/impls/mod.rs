//! Implementations of the geographic point and projection traits.

pub mod point;
pub mod projection;
