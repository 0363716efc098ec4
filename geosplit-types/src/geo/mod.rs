//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion of metric offsets
//! into geographic ones (see [`Projection`]).

pub mod impls;
mod traits;

pub use traits::point::{GeoPoint, NewGeoPoint, EARTH_MEAN_RADIUS};
pub use traits::projection::Projection;
