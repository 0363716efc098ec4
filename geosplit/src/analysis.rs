//! Overlap classification of drawn shapes.
//!
//! A shape is a [`Contour`] of geographic points: closed contours are polygons, open ones are polylines. How two
//! shapes are tested depends on their kinds:
//!
//! * **polygon and polygon** overlap if their boundaries cross at least twice, or if one of them lies completely
//!   inside the other;
//! * **polygon and polyline** overlap if the polyline passes through the polygon: both of its ends are outside and
//!   it crosses the boundary at least twice (see [`polyline_crosses_polygon`]);
//! * **polyline and polyline** overlap if they cross at least once.

use geosplit_types::geo::GeoPoint;
use geosplit_types::{impls, Contour, GeoContour, POINT_EPSILON};
use serde::{Deserialize, Serialize};

/// Counts pairs of segments of the two shapes that properly cross each other.
///
/// The segments of each shape are taken according to its own [`Contour::is_closed`] flag: a closed shape includes
/// the segment from its last point back to the first one, an open shape does not. Crossings are not
/// deduplicated, so a crossing exactly at a shared vertex can be counted twice or not at all.
pub fn count_intersections<P, A, B>(shape_a: &A, shape_b: &B) -> usize
where
    P: GeoPoint<Num = f64>,
    A: Contour<Point = P>,
    B: Contour<Point = P>,
{
    shape_a
        .iter_segments()
        .map(|a| {
            shape_b
                .iter_segments()
                .filter(|b| a.intersects(b))
                .count()
        })
        .sum()
}

/// Returns true if the polyline passes through the polygon: both end points of the polyline are outside of the
/// polygon and the polyline crosses the polygon boundary at least twice.
///
/// A polyline that starts or ends inside the polygon is not considered to cross it, even if it crosses the
/// boundary somewhere else.
pub fn polyline_crosses_polygon<P, L, G>(polyline: &L, polygon: &G) -> bool
where
    P: GeoPoint<Num = f64>,
    L: Contour<Point = P>,
    G: Contour<Point = P>,
{
    let mut points = polyline.iter_points();
    let (Some(first), Some(last)) = (points.next(), points.last()) else {
        return false;
    };

    let first_inside = polygon.contains_point(first);
    let last_inside = polygon.contains_point(last);
    log::debug!("Polyline ends inside polygon: first {first_inside}, last {last_inside}");

    if first_inside || last_inside {
        log::debug!("Polyline does not pass through the polygon");
        return false;
    }

    let count = count_intersections(polyline, polygon);
    log::debug!("Polyline crosses polygon boundary {count} times");

    count >= 2
}

/// Returns true if every point of `inner` lies inside `outer`.
///
/// Returns false for an `inner` shape without points.
fn all_points_inside<P, A, B>(inner: &A, outer: &B) -> bool
where
    P: GeoPoint<Num = f64>,
    A: Contour<Point = P>,
    B: Contour<Point = P>,
{
    let mut points = inner.iter_points().peekable();
    points.peek().is_some() && points.all(|p| outer.contains_point(p))
}

/// Returns true if the two shapes overlap. See module documentation for the rules.
pub fn shapes_overlap<P, A, B>(shape_a: &A, shape_b: &B) -> bool
where
    P: GeoPoint<Num = f64>,
    A: Contour<Point = P>,
    B: Contour<Point = P>,
{
    match (shape_a.is_closed(), shape_b.is_closed()) {
        (true, true) => {
            let count = count_intersections(shape_a, shape_b);
            log::debug!("Polygon boundaries cross {count} times");

            if count >= 2 {
                return true;
            }

            if all_points_inside(shape_a, shape_b) {
                log::debug!("First polygon lies inside the second one");
                return true;
            }

            if all_points_inside(shape_b, shape_a) {
                log::debug!("Second polygon lies inside the first one");
                return true;
            }

            false
        }
        (false, true) => polyline_crosses_polygon(shape_a, shape_b),
        (true, false) => polyline_crosses_polygon(shape_b, shape_a),
        (false, false) => {
            let count = count_intersections(shape_a, shape_b);
            log::debug!("Polylines cross {count} times");

            count >= 1
        }
    }
}

/// Removes points that coincide (within [`POINT_EPSILON`]) with an earlier point of the list.
///
/// The first occurrence of each point is kept, and the order of the points is preserved.
pub fn remove_duplicate_points<P>(points: &[P]) -> Vec<P>
where
    P: GeoPoint<Num = f64> + Clone,
{
    remove_duplicate_points_with_tolerance(points, POINT_EPSILON)
}

/// Same as [`remove_duplicate_points`] but with a custom tolerance in degrees.
pub fn remove_duplicate_points_with_tolerance<P>(points: &[P], tolerance: f64) -> Vec<P>
where
    P: GeoPoint<Num = f64> + Clone,
{
    let mut unique: Vec<P> = Vec::with_capacity(points.len());
    for point in points {
        if !unique.iter().any(|p| p.coincides_with(point, tolerance)) {
            unique.push(point.clone());
        }
    }

    unique
}

/// First pair of overlapping shapes found by [`find_overlapping_pair`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlappingPair<P> {
    /// Index of the first shape in the input list.
    pub index_a: usize,
    /// Index of the second shape in the input list.
    pub index_b: usize,
    /// The first shape of the pair.
    pub shape_a: impls::Contour<P>,
    /// The second shape of the pair.
    pub shape_b: impls::Contour<P>,
}

impl<P> OverlappingPair<P> {
    /// Whether the first shape is a polygon.
    pub fn closed_a(&self) -> bool {
        Contour::is_closed(&self.shape_a)
    }

    /// Whether the second shape is a polygon.
    pub fn closed_b(&self) -> bool {
        Contour::is_closed(&self.shape_b)
    }
}

/// Checks all pairs of shapes in the list order and returns the first pair that overlaps.
///
/// Shapes with less than 2 points are skipped. Returns `None` if there are less than two such shapes or no pair
/// overlaps.
pub fn find_overlapping_pair<P>(shapes: &[impls::Contour<P>]) -> Option<OverlappingPair<P>>
where
    P: GeoPoint<Num = f64> + Clone,
{
    let eligible: Vec<(usize, &impls::Contour<P>)> = shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| shape.len() >= 2)
        .collect();

    if eligible.len() < 2 {
        log::debug!("At least 2 shapes are required, got {}", eligible.len());
        return None;
    }

    for (i, &(index_a, shape_a)) in eligible.iter().enumerate() {
        for &(index_b, shape_b) in &eligible[i + 1..] {
            if shapes_overlap(shape_a, shape_b) {
                log::debug!("Shapes {index_a} and {index_b} overlap");
                return Some(OverlappingPair {
                    index_a,
                    index_b,
                    shape_a: shape_a.clone(),
                    shape_b: shape_b.clone(),
                });
            }
        }
    }

    log::debug!("No overlapping shapes found");
    None
}
