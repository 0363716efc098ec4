//! GeoSplit finds overlapping shapes drawn on a map and splits polygons by polylines crossing them.
//!
//! Shapes are [`Contour`](geosplit_types::impls::Contour)s of geographic points: closed contours are polygons and
//! open ones are polylines. All the calculations are planar in degrees, with distances in meters converted by a local
//! equirectangular approximation. This is accurate enough for shapes spanning a few kilometers.
//!
//! # Quick start
//!
//! ```
//! use geosplit::analysis::shapes_overlap;
//! use geosplit::split::split_by_polyline;
//! use geosplit::transform::separate;
//! use geosplit_types::impls::Contour;
//! use geosplit_types::latlon;
//!
//! let polygon = Contour::closed(vec![
//!     latlon!(13.70, 100.50),
//!     latlon!(13.70, 100.52),
//!     latlon!(13.72, 100.52),
//!     latlon!(13.72, 100.50),
//! ]);
//! let polyline = Contour::open(vec![latlon!(13.69, 100.51), latlon!(13.73, 100.51)]);
//!
//! assert!(shapes_overlap(&polygon, &polyline));
//!
//! let split = split_by_polyline(&polygon, &polyline).expect("polyline crosses the polygon");
//! let (west, east) = separate(&split.part_a, &split.part_b, 100.0).expect("parts have distinct centroids");
//! # assert_eq!(west.len(), 4);
//! # assert_eq!(east.len(), 4);
//! ```
//!
//! # Main components
//!
//! * [`analysis`] classifies pairs of shapes as overlapping or not and finds the first overlapping pair in a list,
//! * [`intersection`] enumerates points where a polyline crosses a polygon boundary,
//! * [`split`] divides a polygon into regions along a polyline,
//! * [`transform`] moves shapes by distances in meters,
//! * [`pipeline`] combines all of the above into the "check overlapping shapes" action working over
//!   [`Overlays`](overlay::Overlays) - the collection of shapes drawn on the map.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod analysis;
pub mod error;
pub mod intersection;
pub mod overlay;
pub mod pipeline;
pub mod split;
pub mod style;
pub mod transform;

pub use error::GeoSplitError;
pub use geosplit_types;
pub use pipeline::{SplitPipeline, SplitPipelineBuilder};
pub use style::{Color, ShapeStyle};
