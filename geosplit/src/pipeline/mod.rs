//! The "check overlapping shapes" action.
//!
//! [`SplitPipeline::run`] takes the shapes from the [`Overlays`], finds the first overlapping pair and, if the pair
//! is a polygon and a polyline, splits the polygon by the polyline. The parts are then moved apart, shifted to the
//! east so that they do not cover the original shapes, and added back to the overlays.

use geosplit_types::geo::NewGeoPoint;
use geosplit_types::impls::Contour;

use crate::analysis::{find_overlapping_pair, remove_duplicate_points_with_tolerance};
use crate::error::GeoSplitError;
use crate::overlay::Overlays;
use crate::split::split_by_polyline;
use crate::style::ShapeStyle;
use crate::transform::{separate_all, shift_contour_right};

mod builder;
mod config;
mod report;

pub use builder::SplitPipelineBuilder;
pub use config::{
    PipelineConfig, DEFAULT_GAP_METERS, DEFAULT_POLYGON_FIRST_SHIFT_METERS,
    DEFAULT_POLYLINE_FIRST_SHIFT_METERS,
};
pub use report::SplitReport;

/// Detects overlapping shapes and splits a polygon crossed by a polyline.
///
/// Use [`SplitPipelineBuilder`] to create an instance.
#[derive(Debug, Clone)]
pub struct SplitPipeline {
    config: PipelineConfig,
}

impl SplitPipeline {
    /// Configuration of the pipeline.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline over the shapes of the `overlays` and adds the split parts to them.
    ///
    /// # Errors
    ///
    /// * [`GeoSplitError::NotEnoughShapes`] if less than two shapes have at least two points,
    /// * [`GeoSplitError::NoOverlap`] if no pair of shapes overlaps,
    /// * [`GeoSplitError::UnsupportedPair`] if the first overlapping pair is not a polygon and a polyline,
    /// * [`GeoSplitError::SplitFailed`] if the polygon cannot be split,
    /// * [`GeoSplitError::TransformFailed`] if the parts cannot be moved.
    ///
    /// The overlays are not modified if an error is returned.
    pub fn run<O>(&self, overlays: &mut O) -> Result<SplitReport, GeoSplitError>
    where
        O: Overlays,
        O::Point: NewGeoPoint<f64> + Clone,
    {
        let (indices, shapes): (Vec<usize>, Vec<Contour<O::Point>>) = overlays
            .list()
            .into_iter()
            .enumerate()
            .filter(|(_, shape)| shape.len() >= 2)
            .unzip();

        if shapes.len() < 2 {
            log::info!("At least 2 shapes are required, found {}", shapes.len());
            return Err(GeoSplitError::NotEnoughShapes(shapes.len()));
        }

        let pair = find_overlapping_pair(&shapes).ok_or(GeoSplitError::NoOverlap)?;
        let index_a = indices[pair.index_a];
        let index_b = indices[pair.index_b];
        log::info!("Shapes {index_a} and {index_b} overlap");

        let (polygon_index, polyline_index, split, shift_meters) =
            match (pair.closed_a(), pair.closed_b()) {
                (true, false) => (
                    index_a,
                    index_b,
                    split_by_polyline(&pair.shape_a, &pair.shape_b),
                    self.config.polygon_first_shift_meters,
                ),
                (false, true) => (
                    index_b,
                    index_a,
                    split_by_polyline(&pair.shape_b, &pair.shape_a),
                    self.config.polyline_first_shift_meters,
                ),
                (true, true) => return Err(GeoSplitError::UnsupportedPair("two polygons")),
                (false, false) => return Err(GeoSplitError::UnsupportedPair("two polylines")),
            };

        let split = split.ok_or(GeoSplitError::SplitFailed)?;
        log::info!(
            "Polygon {polygon_index} is split into {} parts with {} intersection points",
            split.parts_count(),
            split.intersection_points.len()
        );

        let parts: Vec<Contour<O::Point>> = split
            .parts()
            .map(|part| {
                Contour::closed(remove_duplicate_points_with_tolerance(
                    part.points(),
                    self.config.duplicate_tolerance,
                ))
            })
            .collect();

        let moved = separate_all(&parts, self.config.gap_meters)
            .and_then(|separated| {
                separated
                    .iter()
                    .map(|part| shift_contour_right(part, shift_meters))
                    .collect::<Option<Vec<_>>>()
            })
            .ok_or(GeoSplitError::TransformFailed)?;

        let report = SplitReport {
            polygon_index,
            polyline_index,
            part_points: moved.iter().map(|part| part.len()).collect(),
            intersection_count: split.intersection_points.len(),
            gap_meters: self.config.gap_meters,
            shift_meters,
        };

        for (index, part) in moved.into_iter().enumerate() {
            overlays.add_polygon(part, self.part_style(index));
        }

        log::debug!("Split parts are added to the overlays");
        Ok(report)
    }

    fn part_style(&self, index: usize) -> &ShapeStyle {
        let styles = &self.config.part_styles;
        &styles[index % styles.len()]
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geosplit_types::geo::impls::GeoPoint2d;
    use geosplit_types::geo::GeoPoint;
    use geosplit_types::latlon;

    use super::*;
    use crate::overlay::MemoryOverlays;

    fn square() -> Contour<GeoPoint2d> {
        Contour::closed(vec![
            latlon!(13.70, 100.50),
            latlon!(13.70, 100.52),
            latlon!(13.72, 100.52),
            latlon!(13.72, 100.50),
        ])
    }

    fn cut() -> Contour<GeoPoint2d> {
        Contour::open(vec![latlon!(13.69, 100.51), latlon!(13.73, 100.51)])
    }

    #[test]
    fn polygon_first() {
        let mut overlays = MemoryOverlays::new([square(), cut()]);
        let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

        let report = pipeline.run(&mut overlays).expect("split");
        assert_eq!((report.polygon_index, report.polyline_index), (0, 1));
        assert_eq!(report.part_points, vec![4, 4]);
        assert_eq!(report.intersection_count, 2);
        assert_eq!(report.shift_meters, 3000.0);

        let added: Vec<_> = overlays.added().collect();
        assert_eq!(added.len(), 2);
        assert_eq!(added[0].style, Some(ShapeStyle::GREEN));
        assert_eq!(added[1].style, Some(ShapeStyle::BLUE));

        // Both parts are moved east of the original polygon.
        for shape in added {
            assert!(shape.contour.iter().all(|p| p.lon() > 100.52));
        }
    }

    #[test]
    fn polyline_first() {
        let mut overlays = MemoryOverlays::new([cut(), square()]);
        let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

        let report = pipeline.run(&mut overlays).expect("split");
        assert_eq!((report.polygon_index, report.polyline_index), (1, 0));
        assert_eq!(report.shift_meters, 5000.0);
    }

    #[test]
    fn styles_repeat() {
        let mut overlays = MemoryOverlays::new([
            square(),
            Contour::open(vec![
                latlon!(13.69, 100.505),
                latlon!(13.73, 100.505),
                latlon!(13.73, 100.517),
                latlon!(13.69, 100.517),
            ]),
        ]);
        let pipeline = SplitPipelineBuilder::new()
            .with_part_styles([ShapeStyle::GREEN])
            .build()
            .expect("valid config");

        let report = pipeline.run(&mut overlays).expect("split");
        assert_eq!(report.parts_count(), 3);
        assert!(overlays
            .added()
            .all(|shape| shape.style == Some(ShapeStyle::GREEN)));
    }

    #[test]
    fn errors_keep_overlays_unchanged() {
        let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

        let mut overlays = MemoryOverlays::new([square()]);
        assert_matches!(
            pipeline.run(&mut overlays),
            Err(GeoSplitError::NotEnoughShapes(1))
        );

        let mut overlays = MemoryOverlays::new([
            square(),
            Contour::open(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]),
        ]);
        assert_matches!(pipeline.run(&mut overlays), Err(GeoSplitError::NoOverlap));

        let inner = Contour::closed(vec![
            latlon!(13.705, 100.505),
            latlon!(13.705, 100.515),
            latlon!(13.715, 100.515),
        ]);
        let mut overlays = MemoryOverlays::new([square(), inner]);
        assert_matches!(
            pipeline.run(&mut overlays),
            Err(GeoSplitError::UnsupportedPair(_))
        );
        assert_eq!(overlays.len(), 2);
    }
}
