use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Summary of a successful [`SplitPipeline::run`](super::SplitPipeline::run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    /// Index of the polygon in the listed shapes.
    pub polygon_index: usize,
    /// Index of the polyline in the listed shapes.
    pub polyline_index: usize,
    /// Number of points in every added part.
    pub part_points: Vec<usize>,
    /// Number of points where the polyline crosses the polygon.
    pub intersection_count: usize,
    /// Distance between the parts.
    pub gap_meters: f64,
    /// Distance the parts were moved east.
    pub shift_meters: f64,
}

impl SplitReport {
    /// Number of added parts.
    pub fn parts_count(&self) -> usize {
        self.part_points.len()
    }
}

impl Display for SplitReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Polygon {} split by polyline {} into {} parts",
            self.polygon_index,
            self.polyline_index,
            self.parts_count()
        )?;
        for (index, points) in self.part_points.iter().enumerate() {
            writeln!(f, "Part {}: {points} points", index + 1)?;
        }
        writeln!(f, "Intersection points: {}", self.intersection_count)?;
        write!(
            f,
            "Gap: {} m, shifted right by {} m",
            self.gap_meters, self.shift_meters
        )
    }
}
