//! Shapes drawn on top of the map.
//!
//! The map widget owning the shapes is outside of this crate. [`Overlays`] is the way the crate reads the drawn shapes
//! and hands the results back to the widget.

use geosplit_types::impls::Contour;
use serde::{Deserialize, Serialize};

use crate::style::ShapeStyle;

#[cfg(feature = "geojson")]
mod geojson;

#[cfg(feature = "geojson")]
pub use self::geojson::GeoJsonOverlays;

/// Collection of shapes drawn on the map.
pub trait Overlays {
    /// Type of the points of the shapes.
    type Point;

    /// Returns all the polygons (closed contours) and polylines (open contours) of the collection.
    fn list(&self) -> Vec<Contour<Self::Point>>;

    /// Adds a new polygon drawn with the given style.
    fn add_polygon(&mut self, contour: Contour<Self::Point>, style: &ShapeStyle);
}

/// Shape stored in [`MemoryOverlays`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayShape<P> {
    /// Points of the shape.
    pub contour: Contour<P>,
    /// Style of the shape, `None` for the shapes the collection was created with.
    pub style: Option<ShapeStyle>,
}

/// In-memory overlays collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryOverlays<P> {
    shapes: Vec<OverlayShape<P>>,
}

impl<P> MemoryOverlays<P> {
    /// Creates a new collection with the given shapes.
    pub fn new(shapes: impl IntoIterator<Item = Contour<P>>) -> Self {
        Self {
            shapes: shapes
                .into_iter()
                .map(|contour| OverlayShape {
                    contour,
                    style: None,
                })
                .collect(),
        }
    }

    /// All the shapes of the collection in the order they were added.
    pub fn shapes(&self) -> &[OverlayShape<P>] {
        &self.shapes
    }

    /// Shapes added with [`Overlays::add_polygon`].
    pub fn added(&self) -> impl Iterator<Item = &OverlayShape<P>> {
        self.shapes.iter().filter(|shape| shape.style.is_some())
    }

    /// Number of shapes in the collection.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if there are no shapes in the collection.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<P: Clone> Overlays for MemoryOverlays<P> {
    type Point = P;

    fn list(&self) -> Vec<Contour<P>> {
        self.shapes
            .iter()
            .map(|shape| shape.contour.clone())
            .collect()
    }

    fn add_polygon(&mut self, contour: Contour<P>, style: &ShapeStyle) {
        self.shapes.push(OverlayShape {
            contour: Contour::closed(contour.into_points()),
            style: Some(*style),
        });
    }
}
