use crate::error::Result;

/// Conversion between geographic points and projected coordinates.
///
/// Unlike purely numeric projections, the conversion may be undefined for part of the globe,
/// so both directions report why they failed.
pub trait Projection {
    /// Type of the input (geographic) point.
    type InPoint;
    /// Type of the projected point.
    type OutPoint;

    /// Projects a point.
    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint>;
    /// Converts a projected point back.
    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint>;
}
