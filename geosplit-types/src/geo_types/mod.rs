//! Trait implementations for the `geo-types` crate geometries.

mod coord;
mod linestring;
mod point;
