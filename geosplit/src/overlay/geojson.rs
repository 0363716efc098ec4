use std::str::FromStr;

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue};
use geosplit_types::geo::impls::GeoPoint2d;
use geosplit_types::geojson::{contour_from_geometry, contour_to_geometry};
use geosplit_types::impls::Contour;

use super::Overlays;
use crate::error::GeoSplitError;
use crate::style::ShapeStyle;

/// Overlays stored as a GeoJSON feature collection.
///
/// `Polygon` features are read as closed shapes (only the outer ring is used) and `LineString` features as open
/// shapes. Features with other geometries are kept in the collection but are not listed. Added polygons are appended
/// as `Polygon` features with `lineColor`, `fillColor` and `lineWidth` properties.
#[derive(Debug, Clone)]
pub struct GeoJsonOverlays {
    collection: FeatureCollection,
}

impl GeoJsonOverlays {
    /// Creates overlays from the feature collection.
    pub fn new(collection: FeatureCollection) -> Self {
        Self { collection }
    }

    /// Reads the feature collection from a file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, GeoSplitError> {
        std::fs::read_to_string(path)?.parse()
    }

    /// The underlying feature collection.
    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// Consumes the overlays and returns the feature collection.
    pub fn into_collection(self) -> FeatureCollection {
        self.collection
    }

    /// Writes the feature collection as an indented GeoJSON string.
    pub fn to_string_pretty(&self) -> Result<String, GeoSplitError> {
        Ok(serde_json::to_string_pretty(&self.collection)?)
    }
}

impl FromStr for GeoJsonOverlays {
    type Err = GeoSplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let geojson = s.parse::<GeoJson>()?;
        Ok(Self::new(FeatureCollection::try_from(geojson)?))
    }
}

impl Overlays for GeoJsonOverlays {
    type Point = GeoPoint2d;

    fn list(&self) -> Vec<Contour<GeoPoint2d>> {
        self.collection
            .features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .filter_map(|geometry| match contour_from_geometry(geometry) {
                Ok(contour) => contour,
                Err(err) => {
                    log::warn!("Skipping invalid GeoJSON geometry: {err}");
                    None
                }
            })
            .collect()
    }

    fn add_polygon(&mut self, contour: Contour<GeoPoint2d>, style: &ShapeStyle) {
        let contour = Contour::closed(contour.into_points());

        let mut properties = JsonObject::new();
        properties.insert(
            "lineColor".to_string(),
            JsonValue::from(style.line_color.to_css()),
        );
        properties.insert(
            "fillColor".to_string(),
            JsonValue::from(style.fill_color.to_css()),
        );
        properties.insert("lineWidth".to_string(), JsonValue::from(style.line_width));

        self.collection.features.push(Feature {
            bbox: None,
            geometry: Some(contour_to_geometry(&contour)),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geojson::Value;
    use geosplit_types::latlon;
    use geosplit_types::Contour as _;

    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [1.0, 1.0] }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": [[5.0, -5.0], [5.0, 15.0]] }
            }
        ]
    }"#;

    #[test]
    fn list_shapes() {
        let overlays: GeoJsonOverlays = COLLECTION.parse().expect("valid GeoJSON");
        let shapes = overlays.list();

        assert_eq!(shapes.len(), 2);
        assert!(shapes[0].is_closed());
        assert_eq!(shapes[0].len(), 4);
        assert_eq!(shapes[0][1], latlon!(0.0, 10.0));
        assert!(!shapes[1].is_closed());
        assert_eq!(shapes[1][0], latlon!(-5.0, 5.0));
    }

    #[test]
    fn add_polygon_feature() {
        let mut overlays: GeoJsonOverlays = COLLECTION.parse().expect("valid GeoJSON");
        overlays.add_polygon(
            Contour::closed(vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(1.0, 1.0)]),
            &ShapeStyle::BLUE,
        );

        let feature = overlays.collection().features.last().expect("added feature");
        let properties = feature.properties.as_ref().expect("properties");
        assert_eq!(properties["fillColor"], "rgba(0, 150, 255, 0.2)");
        assert_eq!(properties["lineColor"], "rgba(0, 150, 255, 0.8)");
        assert_eq!(properties["lineWidth"], 3.0);

        let geometry = feature.geometry.as_ref().expect("geometry");
        assert_matches!(&geometry.value, Value::Polygon(rings) if rings[0].len() == 4);

        let json = overlays.to_string_pretty().expect("serializable");
        let restored: GeoJsonOverlays = json.parse().expect("valid GeoJSON");
        assert_eq!(restored.list().len(), 3);
    }

    #[test]
    fn invalid_input() {
        assert_matches!(
            "not json".parse::<GeoJsonOverlays>(),
            Err(GeoSplitError::GeoJson(_))
        );

        let point = r#"{"type": "Point", "coordinates": [1.0, 1.0]}"#;
        assert_matches!(
            point.parse::<GeoJsonOverlays>(),
            Err(GeoSplitError::GeoJson(_))
        );
    }

    #[test]
    fn missing_file() {
        assert_matches!(
            GeoJsonOverlays::from_file("does/not/exist.geojson"),
            Err(GeoSplitError::FsIo(_))
        );
    }
}
