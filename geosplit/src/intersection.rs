//! Points where a polyline crosses the edges of a polygon.

use geosplit_types::geo::NewGeoPoint;
use geosplit_types::Contour;
use serde::{Deserialize, Serialize};

/// Point where a polyline segment crosses a polygon edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection<P> {
    /// The intersection point.
    pub point: P,
    /// Index of the polyline segment. Segment `i` joins polyline points `i` and `i + 1`.
    pub source_segment: usize,
    /// Index of the polygon edge. Edge `i` joins polygon points `i` and `(i + 1) mod n`.
    pub target_segment: usize,
    /// Position of the point along the polyline segment, from `0` (segment start) to `1` (segment end).
    pub source_param: f64,
    /// Position of the point along the polygon edge, from `0` (edge start) to `1` (edge end).
    pub target_param: f64,
}

impl<P> Intersection<P> {
    /// Position of the intersection along the whole polyline, as a fractional segment index.
    pub fn source_position(&self) -> f64 {
        self.source_segment as f64 + self.source_param
    }

    /// Position of the intersection along the whole polygon ring, as a fractional edge index.
    pub fn target_position(&self) -> f64 {
        self.target_segment as f64 + self.target_param
    }
}

/// Returns all intersection points between the segments of the `polyline` and the edges of the `polygon`.
///
/// Polyline segments are taken according to its closed flag (an open polyline has no closing segment), polygon
/// edges always include the closing one. The outer loop goes over the polyline segments and the inner loop over
/// the polygon edges, so the result is in that iteration order. Intersections are found with the line solver and
/// are not deduplicated: a polyline passing exactly through a polygon vertex produces a point for each of the two
/// edges sharing that vertex.
pub fn find_all_intersections<P, L, G>(polyline: &L, polygon: &G) -> Vec<Intersection<P>>
where
    P: NewGeoPoint<f64>,
    L: Contour<Point = P>,
    G: Contour<Point = P>,
{
    let mut intersections = vec![];
    for (source_segment, source) in polyline.iter_segments().enumerate() {
        for (target_segment, target) in polygon.iter_ring_segments().enumerate() {
            if let Some((source_param, target_param)) = source.intersection_params(&target) {
                intersections.push(Intersection {
                    point: source.point_at(source_param),
                    source_segment,
                    target_segment,
                    source_param,
                    target_param,
                });
            }
        }
    }

    intersections
}
