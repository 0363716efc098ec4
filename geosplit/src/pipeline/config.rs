use serde::{Deserialize, Serialize};

use crate::style::ShapeStyle;

/// Default gap between the split parts in meters.
pub const DEFAULT_GAP_METERS: f64 = 100.0;
/// Default shift of the parts when the polygon is listed before the polyline.
pub const DEFAULT_POLYGON_FIRST_SHIFT_METERS: f64 = 3000.0;
/// Default shift of the parts when the polyline is listed before the polygon.
pub const DEFAULT_POLYLINE_FIRST_SHIFT_METERS: f64 = 5000.0;

/// Parameters of the [`SplitPipeline`](super::SplitPipeline).
///
/// All fields have defaults, so a partial JSON document can be deserialized:
///
/// ```
/// use geosplit::pipeline::PipelineConfig;
///
/// let config: PipelineConfig = serde_json::from_str(r#"{"gap_meters": 50.0}"#)?;
/// assert_eq!(config.gap_meters, 50.0);
/// assert_eq!(config.polygon_first_shift_meters, 3000.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Distance between the split parts after separation.
    pub gap_meters: f64,
    /// Distance the parts are moved east when the polygon comes first in the pair.
    pub polygon_first_shift_meters: f64,
    /// Distance the parts are moved east when the polyline comes first in the pair.
    pub polyline_first_shift_meters: f64,
    /// Points of a split part closer than this (in degrees) are merged.
    pub duplicate_tolerance: f64,
    /// Styles of the added parts. Part `i` gets style `i mod len`.
    pub part_styles: Vec<ShapeStyle>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gap_meters: DEFAULT_GAP_METERS,
            polygon_first_shift_meters: DEFAULT_POLYGON_FIRST_SHIFT_METERS,
            polyline_first_shift_meters: DEFAULT_POLYLINE_FIRST_SHIFT_METERS,
            duplicate_tolerance: geosplit_types::POINT_EPSILON,
            part_styles: vec![ShapeStyle::GREEN, ShapeStyle::BLUE],
        }
    }
}
