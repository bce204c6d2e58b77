//! Planar geometry over lon/lat vertex lists.
//!
//! Areas are computed with the shoelace formula directly in degree space
//! (square degrees); the validators compare them against degree-space
//! thresholds. Self-intersection uses the classic orientation plus
//! on-segment test with a small collinearity tolerance.

use geo::Coord;

/// Tolerance below which a cross product is treated as collinear.
pub const COLLINEARITY_EPSILON: f64 = 1e-10;

/// Orientation of an ordered point triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Area of a triangle in square degrees via the shoelace formula.
///
/// Always non-negative and invariant under vertex rotation or reflection.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::geometry::triangle_area;
///
/// let vertices = [
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 1.0, y: 0.0 },
///     Coord { x: 0.0, y: 1.0 },
/// ];
/// assert!((triangle_area(&vertices) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn triangle_area(vertices: &[Coord<f64>; 3]) -> f64 {
    let [a, b, c] = vertices;
    (0.5 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y))).abs()
}

/// Area of a polygon in square degrees via the generalised shoelace sum.
///
/// The polygon is implicitly closed; the final vertex connects back to the
/// first. Returns `0.0` for fewer than three vertices.
#[must_use]
pub fn polygon_area(vertices: &[Coord<f64>]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let sum: f64 = edges(vertices).map(|(a, b)| a.x * b.y - b.x * a.y).sum();
    sum.abs() / 2.0
}

/// Whether a polygon's boundary crosses itself.
///
/// Tests every pair of non-adjacent edges, including the implicit closing
/// edge. Three or fewer vertices can never self-intersect and skip the
/// scan entirely.
#[must_use]
pub fn self_intersects(vertices: &[Coord<f64>]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return false;
    }
    let edge_list: Vec<_> = edges(vertices).collect();
    for (i, &(p1, q1)) in edge_list.iter().enumerate() {
        for (j, &(p2, q2)) in edge_list.iter().enumerate().skip(i + 2) {
            // The closing edge is adjacent to the first edge.
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(p1, q1, p2, q2) {
                return true;
            }
        }
    }
    false
}

/// Whether segment `p1q1` intersects segment `p2q2`.
///
/// Collinear overlaps count as intersections.
#[must_use]
pub fn segments_intersect(
    p1: Coord<f64>,
    q1: Coord<f64>,
    p2: Coord<f64>,
    q2: Coord<f64>,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Whether two points lie within `threshold_deg` of each other in planar
/// degree space.
///
/// Used by the polygon drawing tool to detect a click near the first
/// vertex, which closes the ring.
#[must_use]
pub fn points_nearby(a: Coord<f64>, b: Coord<f64>, threshold_deg: f64) -> bool {
    (a.x - b.x).hypot(a.y - b.y) <= threshold_deg
}

/// Iterate the edges of an implicitly-closed ring: `(v0, v1), …, (vn-1, v0)`.
pub(crate) fn edges(
    vertices: &[Coord<f64>],
) -> impl Iterator<Item = (Coord<f64>, Coord<f64>)> + '_ {
    let successors = vertices.iter().cycle().skip(1);
    vertices.iter().zip(successors).map(|(a, b)| (*a, *b))
}

fn orientation(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> Orientation {
    let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if cross.abs() < COLLINEARITY_EPSILON {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies on segment `pr`, assuming the three are collinear.
fn on_segment(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}
