use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use geosplit::analysis::{find_overlapping_pair, remove_duplicate_points, shapes_overlap};
use geosplit::overlay::{MemoryOverlays, Overlays};
use geosplit::pipeline::SplitPipelineBuilder;
use geosplit::split::split_by_polyline;
use geosplit::transform::{separate, shift_contour_right};
use geosplit::{GeoSplitError, ShapeStyle};
use geosplit_types::geo::impls::projection::LocalEquirectangular;
use geosplit_types::geo::impls::GeoPoint2d;
use geosplit_types::geo::{GeoPoint, Projection};
use geosplit_types::impls::Contour;
use geosplit_types::{latlon, GeoContour};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn field() -> Contour<GeoPoint2d> {
    Contour::closed(vec![
        latlon!(13.700, 100.500),
        latlon!(13.700, 100.520),
        latlon!(13.712, 100.522),
        latlon!(13.721, 100.515),
        latlon!(13.719, 100.501),
    ])
}

fn road() -> Contour<GeoPoint2d> {
    Contour::open(vec![
        latlon!(13.695, 100.508),
        latlon!(13.704, 100.511),
        latlon!(13.713, 100.509),
        latlon!(13.726, 100.512),
    ])
}

#[test]
fn split_separate_and_shift() {
    init_logger();

    let field = field();
    let road = road();
    assert!(shapes_overlap(&field, &road));

    let split = split_by_polyline(&field, &road).expect("road crosses the field");
    assert_eq!(split.part_a.len(), 6);
    assert_eq!(split.part_b.len(), 7);

    // The road vertices inside the field belong to both parts.
    for vertex in &road[1..3] {
        assert!(split.part_a.contains(vertex));
        assert!(split.part_b.contains(vertex));
    }

    let gap = 100.0;
    let (a, b) = separate(&split.part_a, &split.part_b, gap).expect("separated");

    // Each part moves by half of the gap, in opposite directions.
    let projection = LocalEquirectangular::<GeoPoint2d>::around([
        &split.part_a.centroid().expect("not empty"),
        &split.part_b.centroid().expect("not empty"),
    ])
    .expect("not empty");
    let offset = |moved: &GeoPoint2d, original: &GeoPoint2d| {
        projection.project(moved).expect("finite") - projection.project(original).expect("finite")
    };

    let offset_a = offset(&a[0], &split.part_a[0]);
    let offset_b = offset(&b[0], &split.part_b[0]);
    assert_abs_diff_eq!(offset_a.norm(), gap / 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(offset_b.norm(), gap / 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(offset_a, -offset_b, epsilon = 1e-6);
    assert!(offset_b.x > 0.0, "part on the east side of the road moves east");

    let shifted = shift_contour_right(&a, 3000.0).expect("shifted");
    for (moved, original) in shifted.iter().zip(a.iter()) {
        assert_abs_diff_eq!(moved.lat(), original.lat(), epsilon = 1e-9);
        assert!(moved.lon() > original.lon());
    }
}

#[test]
fn pipeline_adds_styled_parts() {
    init_logger();

    let mut overlays = MemoryOverlays::new([field(), road()]);
    let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

    let report = pipeline.run(&mut overlays).expect("split");
    assert_eq!(report.part_points, vec![6, 7]);
    assert_eq!(report.intersection_count, 2);

    let listed = overlays.list();
    assert_eq!(listed.len(), 4);

    let styles: Vec<_> = overlays.added().map(|shape| shape.style).collect();
    assert_eq!(styles, vec![Some(ShapeStyle::GREEN), Some(ShapeStyle::BLUE)]);

    // The parts are moved east, so they do not overlap the original field anymore.
    assert!(!shapes_overlap(&listed[0], &listed[2]));
    assert!(!shapes_overlap(&listed[0], &listed[3]));
    assert!(!shapes_overlap(&listed[2], &listed[3]));
}

#[test]
fn running_twice_finds_the_same_pair() {
    init_logger();

    let mut overlays = MemoryOverlays::new([field(), road()]);
    let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

    let first = pipeline.run(&mut overlays).expect("split");
    let second = pipeline.run(&mut overlays).expect("split");
    assert_eq!(first, second);
    assert_eq!(overlays.len(), 6);
}

#[test]
fn short_shapes_are_not_counted() {
    init_logger();

    let mut overlays = MemoryOverlays::new([
        field(),
        Contour::open(vec![latlon!(13.71, 100.51)]),
        Contour::closed(vec![]),
    ]);
    let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

    assert_matches!(
        pipeline.run(&mut overlays),
        Err(GeoSplitError::NotEnoughShapes(1))
    );
}

#[test]
fn polyline_ending_inside_is_not_split() {
    init_logger();

    let dead_end = Contour::open(vec![latlon!(13.695, 100.508), latlon!(13.71, 100.51)]);
    let shapes = vec![field(), dead_end];
    assert!(find_overlapping_pair(&shapes).is_none());

    let mut overlays = MemoryOverlays::new(shapes);
    let pipeline = SplitPipelineBuilder::new().build().expect("valid config");
    assert_matches!(pipeline.run(&mut overlays), Err(GeoSplitError::NoOverlap));
}

#[test]
fn crossing_polylines_are_unsupported() {
    init_logger();

    let mut overlays = MemoryOverlays::new([
        Contour::open(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]),
        Contour::open(vec![latlon!(0.0, 1.0), latlon!(1.0, 0.0)]),
    ]);
    let pipeline = SplitPipelineBuilder::new().build().expect("valid config");

    assert_matches!(
        pipeline.run(&mut overlays),
        Err(GeoSplitError::UnsupportedPair("two polylines"))
    );
}

#[test]
fn split_parts_cover_the_polygon_points() {
    let field = field();
    let split = split_by_polyline(&field, &road()).expect("split");

    let all_points: Vec<GeoPoint2d> = split.parts().flat_map(|part| part.iter().copied()).collect();
    let unique = remove_duplicate_points(&all_points);

    // 5 polygon vertices, 2 cut points and 2 road vertices.
    assert_eq!(unique.len(), 9);
    for vertex in field.iter() {
        assert!(unique.contains(vertex));
    }
}
