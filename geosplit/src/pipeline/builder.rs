use super::{PipelineConfig, SplitPipeline};
use crate::error::GeoSplitError;
use crate::style::ShapeStyle;

/// Constructor for a [`SplitPipeline`].
///
/// ```
/// use geosplit::pipeline::SplitPipelineBuilder;
///
/// let pipeline = SplitPipelineBuilder::new()
///     .with_gap(50.0)
///     .with_polygon_first_shift(1000.0)
///     .build()?;
/// assert_eq!(pipeline.config().gap_meters, 50.0);
/// # Ok::<(), geosplit::error::GeoSplitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SplitPipelineBuilder {
    config: PipelineConfig,
}

impl SplitPipelineBuilder {
    /// Initializes a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes a builder with the given configuration, for example one loaded from a file.
    pub fn from_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Sets the distance between the split parts.
    pub fn with_gap(mut self, meters: f64) -> Self {
        self.config.gap_meters = meters;
        self
    }

    /// Sets the distance the parts are moved east when the polygon comes first in the overlapping pair.
    pub fn with_polygon_first_shift(mut self, meters: f64) -> Self {
        self.config.polygon_first_shift_meters = meters;
        self
    }

    /// Sets the distance the parts are moved east when the polyline comes first in the overlapping pair.
    pub fn with_polyline_first_shift(mut self, meters: f64) -> Self {
        self.config.polyline_first_shift_meters = meters;
        self
    }

    /// Sets the tolerance (in degrees) used to merge points of the split parts.
    pub fn with_duplicate_tolerance(mut self, degrees: f64) -> Self {
        self.config.duplicate_tolerance = degrees;
        self
    }

    /// Sets the styles of the added parts. The styles are repeated if there are more parts than styles.
    pub fn with_part_styles(mut self, styles: impl IntoIterator<Item = ShapeStyle>) -> Self {
        self.config.part_styles = styles.into_iter().collect();
        self
    }

    /// Validates the configuration and creates the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`GeoSplitError::Configuration`] if any distance is negative or not finite, or if no part styles
    /// are given.
    pub fn build(self) -> Result<SplitPipeline, GeoSplitError> {
        let config = self.config;

        check_distance("gap_meters", config.gap_meters)?;
        check_distance(
            "polygon_first_shift_meters",
            config.polygon_first_shift_meters,
        )?;
        check_distance(
            "polyline_first_shift_meters",
            config.polyline_first_shift_meters,
        )?;
        check_distance("duplicate_tolerance", config.duplicate_tolerance)?;

        if config.part_styles.is_empty() {
            return Err(GeoSplitError::Configuration(
                "at least one part style is required".to_string(),
            ));
        }

        for style in &config.part_styles {
            check_distance("line_width", style.line_width)?;
        }

        Ok(SplitPipeline { config })
    }
}

fn check_distance(name: &str, value: f64) -> Result<(), GeoSplitError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeoSplitError::Configuration(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}
