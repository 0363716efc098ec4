//! Implementations of the [`Projection`](crate::geo::Projection) trait.

mod equirectangular;

pub use equirectangular::{LocalEquirectangular, METERS_PER_DEGREE};
