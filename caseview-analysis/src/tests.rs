use std::time::SystemTime;

use geo::Coord;
use rstest::{fixture, rstest};

use caseview_core::{AoiKind, Circle, MapPoint, Polygon, Triangle};

use super::*;

fn c(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

fn point(id: &str, x: f64, y: f64) -> MapPoint {
    MapPoint::new(id, c(x, y), id, "msg-1")
}

fn triangle(id: &str, vertices: [Coord<f64>; 3]) -> Triangle {
    Triangle {
        id: id.into(),
        name: id.into(),
        vertices,
        user_id: "analyst".into(),
        color: "#4CBACB".into(),
        created_at: SystemTime::now(),
    }
}

fn circle(id: &str, center: Coord<f64>, radius_m: f64) -> Circle {
    Circle {
        id: id.into(),
        name: id.into(),
        center,
        radius_m,
        user_id: "analyst".into(),
        color: "#E74C3C".into(),
        created_at: SystemTime::now(),
    }
}

fn polygon(id: &str, vertices: Vec<Coord<f64>>) -> Polygon {
    Polygon {
        id: id.into(),
        name: id.into(),
        vertices,
        user_id: "analyst".into(),
        color: "#F39C12".into(),
        created_at: SystemTime::now(),
    }
}

#[fixture]
fn locations() -> Vec<MapPoint> {
    vec![
        point("loc-1", 0.5, 0.5),
        point("loc-2", 5.0, 5.0),
        point("loc-3", 0.1, 0.1),
    ]
}

#[rstest]
fn analyses_come_back_in_triangle_circle_polygon_order(locations: Vec<MapPoint>) {
    let triangles = vec![triangle(
        "triangle-1",
        [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)],
    )];
    let circles = vec![circle("circle-1", c(5.0, 5.0), 1_000.0)];
    let polygons = vec![polygon(
        "polygon-1",
        vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)],
    )];

    let analyses = analyze_all_aois(&triangles, &circles, &polygons, &locations);
    let ids: Vec<&str> = analyses.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["triangle-1", "circle-1", "polygon-1"]);
    let kinds: Vec<AoiKind> = analyses.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, [AoiKind::Triangle, AoiKind::Circle, AoiKind::Polygon]);
}

#[rstest]
fn per_aoi_counts_match_the_direct_predicates(locations: Vec<MapPoint>) {
    let triangles = vec![triangle(
        "triangle-1",
        [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)],
    )];
    let circles = vec![circle("circle-1", c(5.0, 5.0), 1_000.0)];
    let polygons = vec![polygon(
        "polygon-1",
        vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)],
    )];

    let analyses = analyze_all_aois(&triangles, &circles, &polygons, &locations);
    let total: usize = analyses.iter().map(AoiAnalysis::location_count).sum();
    let direct = triangles
        .iter()
        .map(|t| locations_in_triangle(t, &locations).len())
        .chain(circles.iter().map(|c| locations_in_circle(c, &locations).len()))
        .chain(
            polygons
                .iter()
                .map(|p| locations_in_polygon(p, &locations).len()),
        )
        .sum::<usize>();
    assert_eq!(total, direct);
}

#[rstest]
fn contained_locations_keep_their_identity(locations: Vec<MapPoint>) {
    let triangles = vec![triangle(
        "triangle-1",
        [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)],
    )];
    let analyses = analyze_all_aois(&triangles, &[], &[], &locations);
    for analysis in &analyses {
        for contained in &analysis.contained {
            assert!(
                locations.iter().any(|l| l == contained),
                "contained location {} was not in the input set",
                contained.id
            );
        }
    }
}

#[rstest]
fn analysis_is_deterministic(locations: Vec<MapPoint>) {
    let triangles = vec![triangle(
        "triangle-1",
        [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)],
    )];
    let first = analyze_all_aois(&triangles, &[], &[], &locations);
    let second = analyze_all_aois(&triangles, &[], &[], &locations);
    assert_eq!(first, second);
}

#[rstest]
fn summary_of_empty_list_has_no_most_populated() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_aois, 0);
    assert_eq!(summary.average_locations_per_aoi, 0.0);
    assert!(summary.most_populated.is_none());
}

#[rstest]
fn summary_with_all_empty_aois_has_no_most_populated(locations: Vec<MapPoint>) {
    let triangles = vec![triangle(
        "triangle-1",
        [c(40.0, 40.0), c(41.0, 40.0), c(40.0, 41.0)],
    )];
    let summary = summarize(&analyze_all_aois(&triangles, &[], &[], &locations));
    assert_eq!(summary.empty_aois, 1);
    assert_eq!(summary.non_empty_aois, 0);
    assert!(summary.most_populated.is_none());
}

#[rstest]
fn summary_counts_and_average(locations: Vec<MapPoint>) {
    let triangles = vec![triangle(
        "triangle-1",
        [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)],
    )];
    let circles = vec![circle("circle-1", c(5.0, 5.0), 1_000.0)];
    let summary = summarize(&analyze_all_aois(&triangles, &circles, &[], &locations));

    // Triangle holds loc-1 and loc-3; circle holds loc-2.
    assert_eq!(summary.total_aois, 2);
    assert_eq!(summary.total_locations, 3);
    assert_eq!(summary.empty_aois, 0);
    assert_eq!(summary.non_empty_aois, 2);
    assert!((summary.average_locations_per_aoi - 1.5).abs() < 1e-12);
    let best = summary.most_populated.expect("triangle wins");
    assert_eq!(best.id, "triangle-1");
    assert_eq!(best.location_count(), 2);
}

#[rstest]
fn summary_tie_keeps_the_earliest_aoi(locations: Vec<MapPoint>) {
    let triangles = vec![
        triangle("triangle-1", [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)]),
        triangle("triangle-2", [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 2.0)]),
    ];
    let summary = summarize(&analyze_all_aois(&triangles, &[], &[], &locations));
    let best = summary.most_populated.expect("both tie");
    assert_eq!(best.id, "triangle-1");
}
