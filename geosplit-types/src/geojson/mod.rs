//! Conversion between GeoJSON geometries and contours.
//!
//! GeoJSON polygons repeat the first position of a ring at its end, while [`Contour`](crate::Contour) stores every
//! point once. The conversions here take care of adding and dropping the repeated position.

use geojson::{LineStringType, Position, Value};

use crate::contour::Contour;
use crate::error::GeoSplitTypesError;
use crate::geo::impls::GeoPoint2d;
use crate::geo::{GeoPoint, NewGeoPoint};
use crate::impls;

mod point;

pub use point::GeoJsonPoint;

/// Converts a GeoJSON geometry into a contour.
///
/// * `LineString` becomes an open contour,
/// * `Polygon` becomes a closed contour made of its outer ring (holes are ignored),
/// * any other geometry type gives `Ok(None)`.
pub fn contour_from_geometry(
    geometry: &geojson::Geometry,
) -> Result<Option<impls::Contour<GeoPoint2d>>, GeoSplitTypesError> {
    match &geometry.value {
        Value::LineString(points) => Ok(Some(impls::Contour::open(convert_points(points)?))),
        Value::Polygon(rings) => {
            let Some(outer) = rings.first() else {
                return Err(GeoSplitTypesError::Conversion(
                    "polygon must contain at least one ring".to_string(),
                ));
            };

            let mut points = convert_points(outer)?;
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }

            Ok(Some(impls::Contour::closed(points)))
        }
        _ => Ok(None),
    }
}

/// Converts a contour into a GeoJSON geometry: closed contours become a `Polygon` with one ring, open ones a
/// `LineString`.
pub fn contour_to_geometry<P: GeoPoint<Num = f64>>(
    contour: &impl Contour<Point = P>,
) -> geojson::Geometry {
    let positions: LineStringType = contour
        .iter_points_closing()
        .map(|p| Position::from(GeoJsonPoint::latlon(p.lat(), p.lon())))
        .collect();

    if contour.is_closed() {
        geojson::Geometry::new(Value::Polygon(vec![positions]))
    } else {
        geojson::Geometry::new(Value::LineString(positions))
    }
}

fn convert_points(points: &LineStringType) -> Result<Vec<GeoPoint2d>, GeoSplitTypesError> {
    points
        .iter()
        .map(|p| GeoJsonPoint::try_from(p.clone()).map(|p| GeoPoint2d::from(&p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;

    #[test]
    fn polygon_drops_repeated_position() {
        let geometry = geojson::Geometry::new(Value::Polygon(vec![vec![
            vec![100.0, 13.0],
            vec![100.1, 13.0],
            vec![100.1, 13.1],
            vec![100.0, 13.0],
        ]]));

        let contour = contour_from_geometry(&geometry)
            .expect("valid geometry")
            .expect("supported type");
        assert!(contour.is_closed());
        assert_eq!(contour.len(), 3);
        assert_eq!(contour[0], latlon!(13.0, 100.0));
    }

    #[test]
    fn line_string_is_open() {
        let geometry = geojson::Geometry::new(Value::LineString(vec![
            vec![100.0, 13.0],
            vec![100.1, 13.1, 5.0],
        ]));

        let contour = contour_from_geometry(&geometry)
            .expect("valid geometry")
            .expect("supported type");
        assert!(!contour.is_closed());
        assert_eq!(contour[1], latlon!(13.1, 100.1));
    }

    #[test]
    fn unsupported_and_invalid_geometries() {
        let point = geojson::Geometry::new(Value::Point(vec![100.0, 13.0]));
        assert!(matches!(contour_from_geometry(&point), Ok(None)));

        let short = geojson::Geometry::new(Value::LineString(vec![vec![100.0], vec![100.1, 13.1]]));
        assert!(matches!(
            contour_from_geometry(&short),
            Err(GeoSplitTypesError::Conversion(_))
        ));

        let empty = geojson::Geometry::new(Value::Polygon(vec![]));
        assert!(contour_from_geometry(&empty).is_err());
    }

    #[test]
    fn closed_contour_to_polygon() {
        let contour = impls::Contour::closed(vec![
            latlon!(13.0, 100.0),
            latlon!(13.0, 100.1),
            latlon!(13.1, 100.1),
        ]);

        let geometry = contour_to_geometry(&contour);
        let Value::Polygon(rings) = &geometry.value else {
            panic!("expected polygon, got {:?}", geometry.value);
        };
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[0][0], rings[0][3]);
        assert_eq!(rings[0][1], vec![100.1, 13.0]);

        let restored = contour_from_geometry(&geometry)
            .expect("valid geometry")
            .expect("supported type");
        assert_eq!(restored, contour);
    }
}
