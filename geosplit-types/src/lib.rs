//! Geometry types and primitive algorithms used by the `geosplit` crate.
//!
//! All geometries here live in geographic coordinates (latitude and longitude in degrees, see
//! [`GeoPoint`](geo::GeoPoint)). Shapes are represented by [`Contour`] - a sequence of points that
//! can be either *open* (a polyline) or *closed* (a polygon ring). The crate provides:
//!
//! * segment orientation and intersection math ([`segment`], [`orient`]),
//! * containment, centroid and length of contours ([`GeoContour`]),
//! * a local equirectangular [`Projection`](geo::Projection) to convert offsets in meters into
//!   degrees,
//! * conversions from `geo-types` and `geojson` geometries (behind the features of the same names).

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod contour;
pub use contour::{ClosedContour, Contour, GeoContour};

pub mod error;
pub mod geo;
pub mod impls;
pub mod orient;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

/// Two points closer than this value (in degrees, on both axes) are considered to be the same
/// point. This is about 1 cm at the equator.
pub const POINT_EPSILON: f64 = 1e-7;
