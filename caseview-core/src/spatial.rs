//! Containment predicates and great-circle distance.
//!
//! Containment runs in lon/lat degree space except for circles, whose radii
//! are metric and therefore tested with the haversine distance.

use geo::Coord;

use crate::geometry::{COLLINEARITY_EPSILON, edges};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two WGS84 coordinates, in metres.
///
/// Symmetric, zero for identical points, and monotonic in angular
/// separation.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::spatial::haversine_distance_m;
///
/// let trafalgar = Coord { x: -0.1281, y: 51.5080 };
/// let leicester = Coord { x: -0.1303, y: 51.5103 };
/// let d = haversine_distance_m(trafalgar, leicester);
/// assert!(d > 250.0 && d < 350.0);
/// ```
#[must_use]
pub fn haversine_distance_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let phi1 = a.y.to_radians();
    let phi2 = b.y.to_radians();
    let delta_phi = (b.y - a.y).to_radians();
    let delta_lambda = (b.x - a.x).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Whether a point falls inside a triangle, by barycentric coordinates.
///
/// The boundary is inclusive: points exactly on an edge or vertex are
/// inside. Degenerate (collinear) triangles contain nothing.
#[must_use]
pub fn point_in_triangle(point: Coord<f64>, vertices: &[Coord<f64>; 3]) -> bool {
    let [v1, v2, v3] = vertices;
    let denominator = (v2.y - v3.y) * (v1.x - v3.x) + (v3.x - v2.x) * (v1.y - v3.y);
    if denominator.abs() < COLLINEARITY_EPSILON {
        return false;
    }

    let a = ((v2.y - v3.y) * (point.x - v3.x) + (v3.x - v2.x) * (point.y - v3.y)) / denominator;
    let b = ((v3.y - v1.y) * (point.x - v3.x) + (v1.x - v3.x) * (point.y - v3.y)) / denominator;
    let c = 1.0 - a - b;

    a >= 0.0 && b >= 0.0 && c >= 0.0
}

/// Whether a point falls within `radius_m` metres of `center`.
///
/// The boundary is inclusive.
#[must_use]
pub fn point_in_circle(point: Coord<f64>, center: Coord<f64>, radius_m: f64) -> bool {
    haversine_distance_m(point, center) <= radius_m
}

/// Whether a point falls inside a polygon, by even-odd ray casting.
///
/// The polygon is implicitly closed. Returns `false` for fewer than three
/// vertices. Behaviour for points exactly on an edge or vertex follows the
/// ray-casting rule and is not guaranteed either way.
#[must_use]
pub fn point_in_polygon(point: Coord<f64>, vertices: &[Coord<f64>]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    for (a, b) in edges(vertices) {
        let straddles = (a.y > point.y) != (b.y > point.y);
        if straddles && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[rstest]
    fn haversine_is_zero_for_identical_points() {
        let p = c(-0.1276, 51.5074);
        assert_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[rstest]
    fn haversine_is_symmetric() {
        let a = c(-0.1276, 51.5074);
        let b = c(2.3522, 48.8566);
        let forward = haversine_distance_m(a, b);
        let backward = haversine_distance_m(b, a);
        assert!((forward - backward).abs() < 1e-6);
    }

    #[rstest]
    fn haversine_matches_known_distance() {
        // London to Paris, roughly 344 km.
        let london = c(-0.1276, 51.5074);
        let paris = c(2.3522, 48.8566);
        let d = haversine_distance_m(london, paris);
        assert!(d > 330_000.0 && d < 350_000.0, "got {d}");
    }

    #[rstest]
    #[case(c(0.25, 0.25), true)] // interior
    #[case(c(0.5, 0.0), true)] // on an edge
    #[case(c(0.0, 0.0), true)] // on a vertex
    #[case(c(1.0, 1.0), false)] // outside
    fn triangle_containment_is_boundary_inclusive(#[case] point: Coord<f64>, #[case] inside: bool) {
        let vertices = [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0)];
        assert_eq!(point_in_triangle(point, &vertices), inside);
    }

    #[rstest]
    fn degenerate_triangle_contains_nothing() {
        let collinear = [c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)];
        assert!(!point_in_triangle(c(1.0, 1.0), &collinear));
    }

    #[rstest]
    fn circle_contains_its_center_for_any_radius() {
        let center = c(-0.1276, 51.5074);
        assert!(point_in_circle(center, center, 0.0));
        assert!(point_in_circle(center, center, 500.0));
    }

    #[rstest]
    fn circle_excludes_points_beyond_radius() {
        let center = c(0.0, 0.0);
        // One degree of latitude is ~111 km.
        let away = c(0.0, 1.0);
        assert!(!point_in_circle(away, center, 100_000.0));
        assert!(point_in_circle(away, center, 120_000.0));
    }

    #[rstest]
    #[case(c(0.5, 0.5), true)]
    #[case(c(1.5, 0.5), false)]
    #[case(c(-0.5, 0.5), false)]
    fn polygon_containment_on_unit_square(#[case] point: Coord<f64>, #[case] inside: bool) {
        let square = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)];
        assert_eq!(point_in_polygon(point, &square), inside);
    }

    #[rstest]
    fn polygon_with_too_few_vertices_contains_nothing() {
        let segment = [c(0.0, 0.0), c(1.0, 1.0)];
        assert!(!point_in_polygon(c(0.5, 0.5), &segment));
    }

    #[rstest]
    fn concave_polygon_excludes_its_notch() {
        // A "C" shape opening to the right.
        let shape = [
            c(0.0, 0.0),
            c(3.0, 0.0),
            c(3.0, 1.0),
            c(1.0, 1.0),
            c(1.0, 2.0),
            c(3.0, 2.0),
            c(3.0, 3.0),
            c(0.0, 3.0),
        ];
        assert!(point_in_polygon(c(0.5, 1.5), &shape));
        assert!(!point_in_polygon(c(2.0, 1.5), &shape));
    }
}
