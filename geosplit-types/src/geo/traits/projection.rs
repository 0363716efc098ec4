/// Conversion of points from one coordinate system into another one.
///
/// In this crate projections are used to go from geographic degrees into a local metric plane, where offsets given
/// in meters can be applied, and back.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the projected point.
    type OutPoint;

    /// Projects a point. Returns `None` if the point cannot be projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Projects a point back into the input coordinates. Returns `None` if the point cannot be unprojected.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
