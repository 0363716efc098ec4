//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - meaning that the first and the last points of the contour are not connected. A polyline drawn on
//!   the map is an open contour.
//! * **closed** - when the first and the last points of the contour are connected. A polygon drawn on the map is a
//!   closed contour.
//!
//! Both open and closed contours are represented by the [`Contour`] trait, but there is also a separate [`ClosedContour`]
//! trait for situations when only closed contour makes sense. All closed contours also implement the `Contour` trait
//! automatically.
//!
//! # Contour vs OGC LineString
//!
//! In the OGC Simple Feature Access standard, the corresponding geometry type is called a `LineString`. There is
//! an important difference between them though.
//!
//! `LineString` is considered to be closed when the first and the last points in the sequence are exactly same. `Contour`
//! does not have that requirement. Even more, it should not duplicate the first and the last points. `Contour` trait
//! deals with the last segment of closed contours with [`Contour::iter_points_closing`] and
//! [`Contour::iter_segments`] methods instead.

use crate::geo::{GeoPoint, NewGeoPoint, Projection};
use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Whether the contour is closed.
    ///
    /// A closed contour has a segment connecting the last and the first points.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour.
    ///
    /// Note, that the last point shall not be the same as the first one even for the closed contours. If you want to
    /// include the first point at the end of iterator for closed contours, use [`Contour::iter_points_closing`]
    /// instead.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end of the iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &Self::Point> {
        ContourPointsIterator::new(self.iter_points(), self.is_closed())
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points of the contour.
    ///
    /// Segment number `i` always starts at the point number `i`, so `.enumerate()` on this iterator gives segment
    /// indices.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(
            self.iter_points(),
            self.is_closed(),
        ))
    }

    /// Iterates over segments as if the contour was closed, regardless of [`Contour::is_closed`] value.
    fn iter_ring_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(self.iter_points(), true))
    }

    /// Project all the points of the contour with the given `projection`.
    fn project_points<Proj>(
        &self,
        projection: &Proj,
    ) -> Option<crate::impls::Contour<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = Self::Point> + ?Sized,
    {
        Some(crate::impls::Contour::new(
            self.iter_points()
                .map(|p| projection.project(p))
                .collect::<Option<Vec<Proj::OutPoint>>>()?,
            self.is_closed(),
        ))
    }
}

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the contour.
    ///
    /// Note, that the last point shall not be the same as the first one even for the closed contours. If you want to
    /// include the first point at the end of iterator for closed contours, use [`Contour::iter_points_closing`]
    /// instead.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}

/// Algorithms for contours in geographic coordinates. This trait is auto-implemented for all contours of
/// [`GeoPoint`]s.
pub trait GeoContour: Contour
where
    Self::Point: GeoPoint<Num = f64>,
{
    /// Returns true if the `point` lies inside the contour, using the even-odd (ray casting) rule.
    ///
    /// The contour is treated as a ring: the segment between the last and the first points is always taken into
    /// account. Points exactly on the boundary can be reported either way. For self-intersecting contours the
    /// result follows the even-odd interpretation rather than true containment.
    fn contains_point(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        let lat = point.lat();
        let lon = point.lon();
        let mut inside = false;

        for Segment(from, to) in self.iter_ring_segments() {
            if (from.lat() > lat) != (to.lat() > lat) {
                let crossing_lon =
                    (to.lon() - from.lon()) * (lat - from.lat()) / (to.lat() - from.lat()) + from.lon();
                if lon < crossing_lon {
                    inside = !inside;
                }
            }
        }

        inside
    }

    /// Arithmetic mean of the contour points (not area weighted). Returns `None` for an empty contour.
    fn centroid(&self) -> Option<Self::Point>
    where
        Self::Point: NewGeoPoint<f64>,
    {
        let (lat, lon, count) = self
            .iter_points()
            .fold((0.0, 0.0, 0usize), |(lat, lon, count), p| {
                (lat + p.lat(), lon + p.lon(), count + 1)
            });

        if count == 0 {
            return None;
        }

        let count = count as f64;
        Some(Self::Point::latlon(lat / count, lon / count))
    }

    /// Length of the contour in meters along great circles. For closed contours this is the perimeter, including
    /// the closing segment.
    fn length(&self) -> f64 {
        self.iter_segments()
            .map(|Segment(from, to)| from.distance(to))
            .sum()
    }
}

impl<T> GeoContour for T
where
    T: Contour,
    T::Point: GeoPoint<Num = f64>,
{
}

/// Iterator of contour points.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a P>,
}

impl<'a, P: 'a, Iter> ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if self.is_closed && self.first_point.is_none() {
            self.first_point = next;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: ContourPointsIterator<'a, P, Iter>,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: ContourPointsIterator<'a, P, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_point = self.points_iter.next()?;
        let prev_point = self.prev_point.replace(next_point);

        match prev_point {
            Some(prev) => Some(Segment(prev, next_point)),
            None => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::impls;
    use crate::latlon;

    fn square() -> impls::Contour<GeoPoint2d> {
        impls::Contour::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 10.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 0.0),
        ])
    }

    #[test]
    fn iter_points_closing() {
        let contour = impls::Contour::open(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]);
        assert_eq!(contour.iter_points_closing().count(), 2);
        assert_eq!(
            contour.iter_points_closing().last(),
            Some(&latlon!(1.0, 1.0))
        );

        let contour = impls::ClosedContour::new(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]);
        assert_eq!(contour.iter_points_closing().count(), 3);
        assert_eq!(
            contour.iter_points_closing().last(),
            Some(&latlon!(0.0, 0.0))
        );
    }

    #[test]
    fn iter_segments() {
        let contour = impls::Contour::open(vec![latlon!(0.0, 0.0)]);
        assert_eq!(contour.iter_segments().count(), 0);

        let contour = impls::Contour::open(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]);
        assert_eq!(contour.iter_segments().count(), 1);
        assert_eq!(
            contour.iter_segments().last(),
            Some(Segment(&latlon!(0.0, 0.0), &latlon!(1.0, 1.0)))
        );

        let contour = impls::ClosedContour::new(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]);
        assert_eq!(contour.iter_segments().count(), 2);
        assert_eq!(
            contour.iter_segments().last(),
            Some(Segment(&latlon!(1.0, 1.0), &latlon!(0.0, 0.0)))
        );
    }

    #[test]
    fn iter_ring_segments_of_open_contour() {
        let contour = impls::Contour::open(vec![
            latlon!(0.0, 0.0),
            latlon!(1.0, 1.0),
            latlon!(2.0, 0.0),
        ]);
        assert_eq!(contour.iter_segments().count(), 2);
        assert_eq!(contour.iter_ring_segments().count(), 3);
        assert_eq!(
            contour.iter_ring_segments().last(),
            Some(Segment(&latlon!(2.0, 0.0), &latlon!(0.0, 0.0)))
        );
    }

    #[test]
    fn contains_point() {
        let square = square();

        assert!(square.contains_point(&latlon!(5.0, 5.0)));
        assert!(square.contains_point(&latlon!(0.5, 9.5)));
        assert!(!square.contains_point(&latlon!(15.0, 15.0)));
        assert!(!square.contains_point(&latlon!(5.0, -1.0)));
        assert!(!square.contains_point(&latlon!(-1.0, 5.0)));
    }

    #[test]
    fn contains_point_on_boundary() {
        let square = square();

        // Half-open test: southern and western edges are inside, northern and eastern are outside.
        assert!(square.contains_point(&latlon!(0.0, 5.0)));
        assert!(square.contains_point(&latlon!(5.0, 0.0)));
        assert!(!square.contains_point(&latlon!(10.0, 5.0)));
        assert!(!square.contains_point(&latlon!(5.0, 10.0)));
    }

    #[test]
    fn contains_point_uses_closing_segment_of_open_contour() {
        let open = impls::Contour::open(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 10.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 0.0),
        ]);
        assert!(open.contains_point(&latlon!(5.0, 5.0)));
    }

    #[test]
    fn contains_point_even_odd_for_self_intersection() {
        // A bow tie: two triangles touching at (5, 5), one below and one above the crossing point.
        let bow_tie = impls::Contour::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 0.0),
            latlon!(0.0, 10.0),
        ]);

        assert!(bow_tie.contains_point(&latlon!(2.0, 5.0)));
        assert!(bow_tie.contains_point(&latlon!(8.0, 5.0)));
        assert!(!bow_tie.contains_point(&latlon!(5.0, 2.0)));
        assert!(!bow_tie.contains_point(&latlon!(5.0, 8.0)));
    }

    #[test]
    fn centroid() {
        assert_eq!(square().centroid(), Some(latlon!(5.0, 5.0)));

        let empty = impls::Contour::<GeoPoint2d>::open(vec![]);
        assert_eq!(empty.centroid(), None);
    }

    #[test]
    fn length_includes_closing_segment() {
        let points = vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 0.01),
            latlon!(0.01, 0.01),
        ];
        let open = impls::Contour::open(points.clone());
        let closed = impls::Contour::closed(points);

        let side = latlon!(0.0, 0.0).distance(&latlon!(0.0, 0.01));
        let diagonal = latlon!(0.01, 0.01).distance(&latlon!(0.0, 0.0));

        assert_abs_diff_eq!(open.length(), 2.0 * side, epsilon = 1e-3);
        assert_abs_diff_eq!(closed.length(), 2.0 * side + diagonal, epsilon = 1e-3);
        assert_abs_diff_eq!(side, 1111.95, epsilon = 0.01);
    }
}
