//! Straight line segments between two geographic points and their intersections.
//!
//! All calculations here are planar: longitude is used as `x` coordinate and latitude as `y`.

use crate::geo::{GeoPoint, NewGeoPoint};
use crate::orient::Orientation;

/// Determinants with absolute value below this are treated as parallel lines.
pub const PARALLEL_EPSILON: f64 = 1e-7;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<'a, P: GeoPoint<Num = f64>> Segment<'a, P> {
    /// Returns true if the segments properly cross each other: the ends of each segment lie on the opposite sides
    /// of the other segment's line.
    ///
    /// Collinear segments and segments that only touch with an end point are not treated specially, so exact touches
    /// may be reported as not intersecting.
    pub fn intersects(&self, other: &Segment<P>) -> bool {
        let ccw = Orientation::is_counterclockwise;

        ccw(self.0, other.0, other.1) != ccw(self.1, other.0, other.1)
            && ccw(self.0, self.1, other.0) != ccw(self.0, self.1, other.1)
    }

    /// Solves the line equations of the two segments and returns the parameters `(t, u)` of the intersection
    /// point, where `t` is the position along `self` and `u` the position along `other` (`0` at the first point
    /// of the segment, `1` at the second one).
    ///
    /// Returns `None` if the lines are (nearly) parallel or if the intersection lies outside of either segment.
    pub fn intersection_params(&self, other: &Segment<P>) -> Option<(f64, f64)> {
        let (x1, y1) = (self.0.lon(), self.0.lat());
        let (x2, y2) = (self.1.lon(), self.1.lat());
        let (x3, y3) = (other.0.lon(), other.0.lat());
        let (x4, y4) = (other.1.lon(), other.1.lat());

        let det = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / det;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / det;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some((t, u))
        } else {
            None
        }
    }

    /// Returns the intersection point of the two segments, see [`Segment::intersection_params`].
    pub fn intersection<Out: NewGeoPoint<f64>>(&self, other: &Segment<P>) -> Option<Out> {
        let (t, _) = self.intersection_params(other)?;
        Some(self.point_at(t))
    }

    /// Returns the point at parameter `t` along the segment.
    pub fn point_at<Out: NewGeoPoint<f64>>(&self, t: f64) -> Out {
        Out::latlon(
            self.0.lat() + t * (self.1.lat() - self.0.lat()),
            self.0.lon() + t * (self.1.lon() - self.0.lon()),
        )
    }
}

/// Returns true if the segment `p1-p2` properly crosses the segment `p3-p4`. See [`Segment::intersects`].
pub fn segments_intersect<P: GeoPoint<Num = f64>>(p1: &P, p2: &P, p3: &P, p4: &P) -> bool {
    Segment(p1, p2).intersects(&Segment(p3, p4))
}

/// Returns the positions `(t, u)` of the intersection point along the segments `p1-p2` and `p3-p4`. See
/// [`Segment::intersection_params`].
pub fn line_intersection_params<P: GeoPoint<Num = f64>>(
    p1: &P,
    p2: &P,
    p3: &P,
    p4: &P,
) -> Option<(f64, f64)> {
    Segment(p1, p2).intersection_params(&Segment(p3, p4))
}

/// Returns the intersection point of the segments `p1-p2` and `p3-p4`. See [`Segment::intersection_params`].
pub fn line_intersection<P: NewGeoPoint<f64>>(p1: &P, p2: &P, p3: &P, p4: &P) -> Option<P> {
    Segment(p1, p2).intersection(&Segment(p3, p4))
}
