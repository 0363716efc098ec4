//! Moving shapes by distances given in meters.
//!
//! Offsets are converted into degrees with the [`LocalEquirectangular`] projection, which is accurate enough for
//! shapes spanning a few kilometers.

use geosplit_types::geo::impls::projection::LocalEquirectangular;
use geosplit_types::geo::{GeoPoint, NewGeoPoint, Projection};
use geosplit_types::{impls, Contour, GeoContour, POINT_EPSILON};
use nalgebra::Vector2;

/// Moves all the points east by `offset_meters` (west for negative values).
///
/// The meters are converted to degrees of longitude at the average latitude of the points, so all the points move
/// by the same number of degrees. Returns `None` for an empty list or if the conversion is not possible (points
/// around a pole).
pub fn shift_right<P>(points: &[P], offset_meters: f64) -> Option<Vec<P>>
where
    P: NewGeoPoint<f64>,
{
    let projection = LocalEquirectangular::around(points)?;
    let offset = Vector2::new(offset_meters, 0.0);

    points
        .iter()
        .map(|point| projection.unproject(&(projection.project(point)? + offset)))
        .collect()
}

/// Same as [`shift_right`], but keeps the closed flag of the contour.
pub fn shift_contour_right<P>(
    contour: &impls::Contour<P>,
    offset_meters: f64,
) -> Option<impls::Contour<P>>
where
    P: NewGeoPoint<f64>,
{
    Some(impls::Contour::new(
        shift_right(contour.points(), offset_meters)?,
        contour.is_closed(),
    ))
}

/// Moves two shapes apart along the line between their centroids, each by half of the `gap_meters`.
///
/// Centroids are arithmetic means of the shape points. Shape `a` moves away from `b` and `b` away from `a`. The
/// direction is taken in degrees and the distance is converted into degrees at the average latitude of the
/// centroids. A zero gap returns the shapes unchanged.
///
/// Returns `None` if either shape is empty, if the centroids coincide, or if the conversion is not possible.
pub fn separate<P>(
    a: &impls::Contour<P>,
    b: &impls::Contour<P>,
    gap_meters: f64,
) -> Option<(impls::Contour<P>, impls::Contour<P>)>
where
    P: NewGeoPoint<f64> + Clone,
{
    let mut separated = separate_all(&[a.clone(), b.clone()], gap_meters)?.into_iter();
    Some((separated.next()?, separated.next()?))
}

/// Moves every shape away from the common center by half of the `gap_meters`.
///
/// The common center is the average of the shape centroids, and each shape moves along the line from the center to
/// its own centroid. For two shapes this is the same as [`separate`].
pub fn separate_all<P>(
    parts: &[impls::Contour<P>],
    gap_meters: f64,
) -> Option<Vec<impls::Contour<P>>>
where
    P: NewGeoPoint<f64> + Clone,
{
    if gap_meters == 0.0 {
        return Some(parts.to_vec());
    }

    let centroids = parts
        .iter()
        .map(|part| part.centroid())
        .collect::<Option<Vec<P>>>()?;
    let center = impls::Contour::open(centroids.clone()).centroid()?;
    let projection = LocalEquirectangular::around(&centroids)?;
    let half_gap = gap_meters / 2.0;

    parts
        .iter()
        .zip(&centroids)
        .map(|(part, centroid)| {
            let direction = Vector2::new(
                centroid.lon() - center.lon(),
                centroid.lat() - center.lat(),
            );
            let norm = direction.norm();
            if norm < POINT_EPSILON {
                log::warn!("Cannot separate shapes with coinciding centroids");
                return None;
            }

            translate(part, &projection, direction / norm * half_gap)
        })
        .collect()
}

fn translate<P>(
    contour: &impls::Contour<P>,
    projection: &LocalEquirectangular<P>,
    offset: Vector2<f64>,
) -> Option<impls::Contour<P>>
where
    P: NewGeoPoint<f64>,
{
    let mut projected = contour.project_points(projection)?;
    for point in projected.iter_mut() {
        *point += offset;
    }

    projected.unproject_points(projection)
}
