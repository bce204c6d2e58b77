//! Triangle size validation.

use geo::Coord;
use thiserror::Error;

use crate::geometry::triangle_area;

/// Minimum AOI area in square degrees, roughly 100 m² at the equator.
pub const MIN_AREA_DEG2: f64 = 0.001;

/// Derived measurements for an accepted triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleMetrics {
    /// Shoelace area in square degrees.
    pub area: f64,
}

/// Rejection reasons for [`validate_triangle`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TriangleRejection {
    /// The area fell below [`MIN_AREA_DEG2`].
    #[error("Triangle too small - please draw a larger area")]
    TooSmall {
        /// Area that failed the threshold, in square degrees.
        area: f64,
    },
}

/// Validate a triangle against the minimum-size policy.
///
/// Collinear vertices produce a zero area and are rejected as too small.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::validate_triangle;
///
/// let vertices = [
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 0.1, y: 0.0 },
///     Coord { x: 0.0, y: 0.1 },
/// ];
/// let metrics = validate_triangle(&vertices).expect("large enough");
/// assert!(metrics.area > 0.001);
/// ```
///
/// # Errors
/// Returns [`TriangleRejection::TooSmall`] when the shoelace area is below
/// [`MIN_AREA_DEG2`].
pub fn validate_triangle(
    vertices: &[Coord<f64>; 3],
) -> Result<TriangleMetrics, TriangleRejection> {
    let area = triangle_area(vertices);
    if area < MIN_AREA_DEG2 {
        return Err(TriangleRejection::TooSmall { area });
    }
    Ok(TriangleMetrics { area })
}
