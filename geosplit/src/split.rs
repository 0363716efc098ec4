//! Splitting a polygon along a polyline that crosses it.
//!
//! The polyline crossings are paired in the order they appear along the polyline: an entry into the polygon and the
//! following exit form a *chord*. The polygon boundary is then walked as a ring of cut points, and every region is
//! traced by going forward along the boundary until the next cut point and jumping along the chord that starts
//! there. Each chord divides one region in two, so `k` chords produce `k + 1` regions.

use geosplit_types::geo::NewGeoPoint;
use geosplit_types::segment::Segment;
use geosplit_types::{impls, Contour, GeoContour, POINT_EPSILON};
use serde::{Deserialize, Serialize};

use crate::analysis::remove_duplicate_points;
use crate::intersection::{find_all_intersections, Intersection};

/// Regions a polygon is divided into by a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult<P> {
    /// Region containing the part of the boundary between the last and the first cut points (in boundary order).
    /// Starts with the first cut point, followed by the first chord.
    pub part_a: impls::Contour<P>,
    /// Region containing the part of the boundary between the first and the second cut points (in boundary order).
    pub part_b: impls::Contour<P>,
    /// Other regions, present only if the polyline crosses the polygon more than twice.
    pub extra_parts: Vec<impls::Contour<P>>,
    /// Points where the polyline crosses the polygon boundary, in the order along the polyline.
    pub intersection_points: Vec<P>,
}

impl<P> SplitResult<P> {
    /// Iterates over all regions, starting with `part_a` and `part_b`.
    pub fn parts(&self) -> impl Iterator<Item = &impls::Contour<P>> {
        [&self.part_a, &self.part_b]
            .into_iter()
            .chain(self.extra_parts.iter())
    }

    /// Number of regions.
    pub fn parts_count(&self) -> usize {
        2 + self.extra_parts.len()
    }

    /// Consumes the result and returns all the regions, starting with `part_a` and `part_b`.
    pub fn into_parts(self) -> Vec<impls::Contour<P>> {
        let mut parts = Vec::with_capacity(self.parts_count());
        parts.push(self.part_a);
        parts.push(self.part_b);
        parts.extend(self.extra_parts);
        parts
    }
}

/// Splits the `polygon` into regions along the `polyline`.
///
/// The polygon boundary always includes the closing edge. Returns `None` if the polyline crosses the polygon less
/// than twice, or if the regions cannot be traced (crossing chords of a self-intersecting polyline, cuts collapsing
/// into degenerate regions).
///
/// If the polyline starts inside the polygon, its first crossing is ignored, and if it ends inside, the last one
/// is. Crossings that coincide, like the two crossings reported for a polyline passing exactly through a polygon
/// vertex, are treated as one. Points where the polyline only touches the boundary without going to the other side
/// of it are not used as cuts.
pub fn split_by_polyline<P, G, L>(polygon: &G, polyline: &L) -> Option<SplitResult<P>>
where
    P: NewGeoPoint<f64> + Clone,
    G: Contour<Point = P>,
    L: Contour<Point = P>,
{
    let ring: Vec<&P> = polygon.iter_points().collect();
    let line: Vec<&P> = polyline.iter_points().collect();

    if ring.len() < 3 || line.len() < 2 {
        log::debug!(
            "Cannot split polygon of {} points with polyline of {} points",
            ring.len(),
            line.len()
        );
        return None;
    }

    let mut cuts = find_all_intersections(polyline, polygon);
    cuts.sort_by(|a, b| {
        a.source_segment
            .cmp(&b.source_segment)
            .then(a.source_param.total_cmp(&b.source_param))
    });
    cuts.dedup_by(|next, prev| next.point.coincides_with(&prev.point, POINT_EPSILON));

    let segments_count = polyline.iter_segments().count();
    let (mut cuts, starts_inside) = keep_side_changes(polygon, &line, segments_count, cuts);

    if !cuts.is_empty() && starts_inside {
        log::debug!("Polyline starts inside the polygon, ignoring the first crossing");
        cuts.remove(0);
    }

    let chords = cuts.len() / 2;
    if chords == 0 {
        log::debug!("Polyline crosses polygon {} times, cannot split", cuts.len());
        return None;
    }

    cuts.truncate(chords * 2);
    log::debug!("Splitting polygon with {chords} chords");

    let cut_ring = CutRing::new(ring, line, cuts);
    let faces = cut_ring.trace_faces()?;

    let mut parts = vec![];
    let mut part_a = None;
    for (index, face) in faces.into_iter().enumerate() {
        let mut points = face.points;
        if face.has_closing_arc {
            if index == 0 {
                log::warn!("Boundary around the first and the last cut points belongs to a single region");
                return None;
            }

            points.rotate_left(face.rotation);
        }

        let points = remove_duplicate_points(&points);
        if points.len() < 3 {
            log::warn!("Split produced a degenerate region of {} points", points.len());
            return None;
        }

        let contour = impls::Contour::closed(points);
        if face.has_closing_arc {
            part_a = Some(contour);
        } else {
            parts.push(contour);
        }
    }

    let part_a = part_a?;
    let mut parts = parts.into_iter();
    let part_b = parts.next()?;

    Some(SplitResult {
        part_a,
        part_b,
        extra_parts: parts.collect(),
        intersection_points: cut_ring.cuts.into_iter().map(|cut| cut.point).collect(),
    })
}

/// Drops the cuts where the polyline only touches the boundary and stays on the same side of it.
///
/// `cuts` must be sorted along the polyline. The polyline pieces between consecutive cuts do not cross the boundary,
/// so the side of each piece is checked at its middle. Returns the remaining cuts and whether the polyline starts
/// inside the polygon.
fn keep_side_changes<P, G>(
    polygon: &G,
    line: &[&P],
    segments_count: usize,
    cuts: Vec<Intersection<P>>,
) -> (Vec<Intersection<P>>, bool)
where
    P: NewGeoPoint<f64>,
    G: Contour<Point = P>,
{
    let mut bounds = Vec::with_capacity(cuts.len() + 2);
    bounds.push(0.0);
    bounds.extend(cuts.iter().map(Intersection::source_position));
    bounds.push(segments_count as f64);

    let inside: Vec<bool> = bounds
        .windows(2)
        .map(|piece| {
            let middle: P = line_point_at(line, segments_count, (piece[0] + piece[1]) / 2.0);
            polygon.contains_point(&middle)
        })
        .collect();

    let kept: Vec<Intersection<P>> = cuts
        .into_iter()
        .enumerate()
        .filter_map(|(index, cut)| {
            if inside[index] != inside[index + 1] {
                Some(cut)
            } else {
                log::debug!(
                    "Polyline touches the polygon boundary at segment {} without crossing it",
                    cut.source_segment
                );
                None
            }
        })
        .collect();

    (kept, inside[0])
}

/// Point at a fractional segment index along the polyline.
fn line_point_at<P: NewGeoPoint<f64>>(line: &[&P], segments_count: usize, position: f64) -> P {
    let segment = (position.max(0.0).floor() as usize).min(segments_count.saturating_sub(1));
    let t = position - segment as f64;

    Segment(line[segment], line[(segment + 1) % line.len()]).point_at(t)
}

/// Closed path around one of the split regions, before duplicate removal.
struct Face<P> {
    points: Vec<P>,
    has_closing_arc: bool,
    /// Index of the first cut point in `points`, valid if `has_closing_arc` is set.
    rotation: usize,
}

/// Polygon boundary with cut points on it.
///
/// Cut `2 * i` is the entry of the chord `i` and cut `2 * i + 1` is its exit, so the other end of the chord
/// starting at cut `c` is cut `c ^ 1`. Arc `r` is the part of the boundary from the cut `order[r]` to the cut
/// `order[r + 1]`, the last arc wraps around to the cut `order[0]`.
struct CutRing<'a, P> {
    ring: Vec<&'a P>,
    line: Vec<&'a P>,
    cuts: Vec<Intersection<P>>,
    order: Vec<usize>,
    position: Vec<usize>,
}

impl<'a, P: NewGeoPoint<f64> + Clone> CutRing<'a, P> {
    fn new(ring: Vec<&'a P>, line: Vec<&'a P>, cuts: Vec<Intersection<P>>) -> Self {
        let mut order: Vec<usize> = (0..cuts.len()).collect();
        order.sort_by(|&a, &b| {
            cuts[a]
                .target_segment
                .cmp(&cuts[b].target_segment)
                .then(cuts[a].target_param.total_cmp(&cuts[b].target_param))
        });

        let mut position = vec![0; cuts.len()];
        for (index, &cut) in order.iter().enumerate() {
            position[cut] = index;
        }

        Self {
            ring,
            line,
            cuts,
            order,
            position,
        }
    }

    fn arcs_count(&self) -> usize {
        self.order.len()
    }

    /// Polygon vertices strictly inside the arc `r`.
    fn arc_vertices(&self, r: usize) -> impl Iterator<Item = &P> + '_ {
        let n = self.ring.len();
        let m = self.arcs_count();
        let from_edge = self.cuts[self.order[r]].target_segment;
        let to_edge = self.cuts[self.order[(r + 1) % m]].target_segment;

        let count = if r == m - 1 {
            n - from_edge + to_edge
        } else {
            to_edge - from_edge
        };

        (0..count).map(move |i| self.ring[(from_edge + 1 + i) % n])
    }

    /// Polyline vertices of the chord going from the cut `from` to its other end.
    fn chord_vertices(&self, from: usize) -> Vec<&P> {
        let entry = from & !1;
        let exit = entry + 1;
        let n = self.line.len();

        let mut vertices: Vec<&P> = (self.cuts[entry].source_segment + 1
            ..=self.cuts[exit].source_segment)
            .map(|i| self.line[i % n])
            .collect();

        if from == exit {
            vertices.reverse();
        }

        vertices
    }

    fn trace_faces(&self) -> Option<Vec<Face<P>>> {
        let mut visited = vec![false; self.arcs_count()];
        let mut faces = vec![];
        for start in 0..self.arcs_count() {
            if !visited[start] {
                faces.push(self.trace_face(start, &mut visited)?);
            }
        }

        Some(faces)
    }

    fn trace_face(&self, start: usize, visited: &mut [bool]) -> Option<Face<P>> {
        let m = self.arcs_count();
        let mut face = Face {
            points: vec![],
            has_closing_arc: false,
            rotation: 0,
        };

        let mut r = start;
        for _ in 0..m {
            if visited[r] {
                log::warn!("Boundary arc {r} belongs to two split regions, polyline chords cross each other");
                return None;
            }
            visited[r] = true;

            let from = self.order[r];
            let to = self.order[(r + 1) % m];

            face.points.push(self.cuts[from].point.clone());
            face.points.extend(self.arc_vertices(r).cloned());

            if r == m - 1 {
                face.has_closing_arc = true;
                face.rotation = face.points.len();
            }

            face.points.push(self.cuts[to].point.clone());
            face.points
                .extend(self.chord_vertices(to).into_iter().cloned());

            r = self.position[to ^ 1];
            if r == start {
                return Some(face);
            }
        }

        log::warn!("Split region starting at arc {start} does not close");
        None
    }
}
