use geo_types::{Coord, CoordNum, LineString};

use crate::contour::Contour;

/// A closed `LineString` repeats its first point at the end. The repeated point is skipped, since [`Contour`] takes
/// care of the closing segment itself.
impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if Contour::is_closed(self) {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}
