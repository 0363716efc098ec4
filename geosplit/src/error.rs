//! Error types used by the crate.

use geosplit_types::error::GeoSplitTypesError;
use thiserror::Error;

/// GeoSplit error type.
#[derive(Debug, Error)]
pub enum GeoSplitError {
    /// Less than two shapes with at least two points are available.
    #[error("at least 2 shapes are required, found {0}")]
    NotEnoughShapes(usize),
    /// No pair of shapes overlaps.
    #[error("no overlapping shapes found")]
    NoOverlap,
    /// The overlapping shapes are not a polygon and a polyline.
    #[error("cannot split {0}")]
    UnsupportedPair(&'static str),
    /// The polygon could not be split by the polyline.
    #[error("failed to split the polygon")]
    SplitFailed,
    /// Separated or shifted coordinates could not be calculated.
    #[error("failed to move the split parts")]
    TransformFailed,
    /// Invalid pipeline configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// Invalid input geometry.
    #[error(transparent)]
    Types(#[from] GeoSplitTypesError),
    /// Error parsing GeoJSON data.
    #[cfg(feature = "geojson")]
    #[error("failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    /// Error reading or writing JSON data.
    #[cfg(feature = "geojson")]
    #[error("failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Error reading/writing data to the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
}
