use std::marker::PhantomData;

use nalgebra::Point2;

use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Approximate length of one degree of latitude in meters.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Planar equirectangular approximation around a reference latitude.
///
/// Projected coordinates are meters: `x` grows to the east, `y` to the north. One degree of latitude is
/// [`METERS_PER_DEGREE`] long, one degree of longitude is `METERS_PER_DEGREE * cos(reference_lat)`. The distortion
/// is acceptable for shapes spanning a few kilometers. Close to the poles a degree of longitude collapses to zero
/// length and the projection refuses to unproject.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocalEquirectangular<P> {
    meters_per_degree_lat: f64,
    meters_per_degree_lon: f64,
    phantom: PhantomData<P>,
}

impl<P> LocalEquirectangular<P> {
    /// Creates a new projection around the given latitude (in degrees).
    pub fn new(reference_lat: f64) -> Self {
        Self {
            meters_per_degree_lat: METERS_PER_DEGREE,
            meters_per_degree_lon: METERS_PER_DEGREE * reference_lat.to_radians().cos(),
            phantom: PhantomData,
        }
    }

    /// Creates a projection around the average latitude of the given points. Returns `None` if there are no points.
    pub fn around<'a>(points: impl IntoIterator<Item = &'a P>) -> Option<Self>
    where
        P: GeoPoint<Num = f64> + 'a,
    {
        let (sum, count) = points
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), p| (sum + p.lat(), count + 1));

        if count == 0 {
            return None;
        }

        Some(Self::new(sum / count as f64))
    }

    /// Length of one degree of latitude in meters.
    pub fn meters_per_degree_lat(&self) -> f64 {
        self.meters_per_degree_lat
    }

    /// Length of one degree of longitude in meters at the reference latitude.
    pub fn meters_per_degree_lon(&self) -> f64 {
        self.meters_per_degree_lon
    }
}

impl<P: NewGeoPoint<f64>> Projection for LocalEquirectangular<P> {
    type InPoint = P;
    type OutPoint = Point2<f64>;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = input.lon() * self.meters_per_degree_lon;
        let y = input.lat() * self.meters_per_degree_lat;

        if x.is_finite() && y.is_finite() {
            Some(Point2::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        if self.meters_per_degree_lon.abs() < METERS_PER_DEGREE * f64::EPSILON {
            return None;
        }

        let lon = input.x / self.meters_per_degree_lon;
        let lat = input.y / self.meters_per_degree_lat;

        if lat.is_finite() && lon.is_finite() {
            Some(P::latlon(lat, lon))
        } else {
            None
        }
    }
}
