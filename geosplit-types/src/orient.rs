//! Orientation of point triplets on the lat/lon plane.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
///
/// Longitude is treated as the `x` axis and latitude as the `y` axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of the triplet `a -> b -> c`.
    ///
    /// There is no tolerance here: only exactly collinear points give [`Orientation::Collinear`].
    pub fn triplet<P: GeoPoint<Num = f64>>(a: &P, b: &P, c: &P) -> Self {
        let cross = (c.lat() - a.lat()) * (b.lon() - a.lon())
            - (b.lat() - a.lat()) * (c.lon() - a.lon());
        if cross > 0.0 {
            Self::Counterclockwise
        } else if cross < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }

    /// Shortcut for `Orientation::triplet(a, b, c) == Orientation::Counterclockwise`.
    pub fn is_counterclockwise<P: GeoPoint<Num = f64>>(a: &P, b: &P, c: &P) -> bool {
        Self::triplet(a, b, c) == Self::Counterclockwise
    }
}
