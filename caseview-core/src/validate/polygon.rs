//! Polygon validation: vertex count, self-intersection, minimum area.

use geo::Coord;
use thiserror::Error;

use crate::geometry::{polygon_area, self_intersects};
use crate::validate::triangle::MIN_AREA_DEG2;

/// Derived measurements for an accepted polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonMetrics {
    /// Shoelace area in square degrees.
    pub area: f64,
}

/// Rejection reasons for [`validate_polygon`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PolygonRejection {
    /// Fewer than three vertices were supplied.
    #[error("Polygon must have at least 3 vertices")]
    TooFewVertices,
    /// The boundary crosses itself.
    #[error("Polygon cannot intersect itself")]
    SelfIntersecting,
    /// The area fell below [`MIN_AREA_DEG2`].
    #[error("Polygon too small - please draw a larger area")]
    TooSmall {
        /// Area that failed the threshold, in square degrees.
        area: f64,
    },
}

/// Validate a polygon ring.
///
/// Checks run in a fixed order and short-circuit: vertex count, then
/// self-intersection, then minimum area. The first failing check is the
/// one reported.
///
/// # Errors
/// Returns the first applicable [`PolygonRejection`].
pub fn validate_polygon(vertices: &[Coord<f64>]) -> Result<PolygonMetrics, PolygonRejection> {
    if vertices.len() < 3 {
        return Err(PolygonRejection::TooFewVertices);
    }
    if self_intersects(vertices) {
        return Err(PolygonRejection::SelfIntersecting);
    }
    let area = polygon_area(vertices);
    if area < MIN_AREA_DEG2 {
        return Err(PolygonRejection::TooSmall { area });
    }
    Ok(PolygonMetrics { area })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[rstest]
    fn accepts_a_simple_square() {
        let square = [c(0.0, 0.0), c(0.1, 0.0), c(0.1, 0.1), c(0.0, 0.1)];
        let metrics = validate_polygon(&square).expect("valid square");
        assert!((metrics.area - 0.01).abs() < 1e-12);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![c(0.0, 0.0), c(1.0, 1.0)])]
    fn rejects_too_few_vertices(#[case] vertices: Vec<Coord<f64>>) {
        assert_eq!(
            validate_polygon(&vertices),
            Err(PolygonRejection::TooFewVertices)
        );
    }

    #[rstest]
    fn rejects_a_bowtie_before_checking_area() {
        // Large enough to pass the area check, but self-intersecting.
        let bowtie = [c(0.0, 0.0), c(1.0, 1.0), c(1.0, 0.0), c(0.0, 1.0)];
        assert_eq!(
            validate_polygon(&bowtie),
            Err(PolygonRejection::SelfIntersecting)
        );
    }

    #[rstest]
    fn rejects_a_tiny_ring_with_its_area() {
        let tiny = [c(0.0, 0.0), c(0.01, 0.0), c(0.01, 0.01), c(0.0, 0.01)];
        let rejection = validate_polygon(&tiny).expect_err("too small");
        assert!(matches!(
            rejection,
            PolygonRejection::TooSmall { area } if area < MIN_AREA_DEG2
        ));
        assert_eq!(
            rejection.to_string(),
            "Polygon too small - please draw a larger area"
        );
    }

    #[rstest]
    fn vertex_count_check_runs_first() {
        // Two vertices would also fail the area check; the count error wins.
        let pair = [c(0.0, 0.0), c(0.0001, 0.0)];
        assert_eq!(
            validate_polygon(&pair),
            Err(PolygonRejection::TooFewVertices)
        );
    }
}
