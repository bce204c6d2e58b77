//! AOI containment analysis for the Caseview engine.
//!
//! The engine answers one question: which event locations fall inside each
//! area of interest? [`analyze_all_aois`] recomputes the answer from
//! scratch over the full location set — there is no incremental diffing,
//! which is deliberate: AOI counts are small (single digits to low tens)
//! and the computation is `O(|AOIs| · |locations|)` over immutable inputs.
//!
//! [`Session`] layers the interactive workflow on top: append-only shape
//! collections, deterministic colour and id assignment, and lazy cluster
//! index rebuilds when the visible point set changes.

#![forbid(unsafe_code)]

mod session;
mod types;

pub use session::{PoiPlacementError, Session};
pub use types::{AnalysisSummary, AoiAnalysis};

use caseview_core::spatial::{point_in_circle, point_in_polygon, point_in_triangle};
use caseview_core::{Aoi, Circle, MapPoint, Polygon, Triangle};

/// Locations inside a triangle AOI, in input order.
#[must_use]
pub fn locations_in_triangle(triangle: &Triangle, locations: &[MapPoint]) -> Vec<MapPoint> {
    locations
        .iter()
        .filter(|location| point_in_triangle(location.location, &triangle.vertices))
        .cloned()
        .collect()
}

/// Locations inside a circle AOI, in input order.
#[must_use]
pub fn locations_in_circle(circle: &Circle, locations: &[MapPoint]) -> Vec<MapPoint> {
    locations
        .iter()
        .filter(|location| point_in_circle(location.location, circle.center, circle.radius_m))
        .cloned()
        .collect()
}

/// Locations inside a polygon AOI, in input order.
#[must_use]
pub fn locations_in_polygon(polygon: &Polygon, locations: &[MapPoint]) -> Vec<MapPoint> {
    locations
        .iter()
        .filter(|location| point_in_polygon(location.location, &polygon.vertices))
        .cloned()
        .collect()
}

/// Analyse a list of AOIs against the location set.
///
/// Pure and deterministic: inputs are not mutated and identical inputs
/// produce identical output. Containment dispatches exhaustively on the
/// [`Aoi`] variant.
#[must_use]
pub fn analyze(aois: &[Aoi], locations: &[MapPoint]) -> Vec<AoiAnalysis> {
    aois.iter()
        .map(|aoi| {
            let contained: Vec<MapPoint> = locations
                .iter()
                .filter(|location| aoi.contains(location))
                .cloned()
                .collect();
            AoiAnalysis {
                id: aoi.id().to_owned(),
                name: aoi.name().to_owned(),
                kind: aoi.kind(),
                color: aoi.color().to_owned(),
                created_at: aoi.created_at(),
                contained,
            }
        })
        .collect()
}

/// Analyse every AOI collection in the fixed order triangles, circles,
/// polygons.
///
/// Each analysis filters the full location set with the matching
/// containment predicate; contained locations are clones of the inputs
/// with unchanged identity.
///
/// # Examples
/// ```
/// use caseview_analysis::analyze_all_aois;
///
/// let analyses = analyze_all_aois(&[], &[], &[], &[]);
/// assert!(analyses.is_empty());
/// ```
#[must_use]
pub fn analyze_all_aois(
    triangles: &[Triangle],
    circles: &[Circle],
    polygons: &[Polygon],
    locations: &[MapPoint],
) -> Vec<AoiAnalysis> {
    let aois: Vec<Aoi> = triangles
        .iter()
        .cloned()
        .map(Aoi::from)
        .chain(circles.iter().cloned().map(Aoi::from))
        .chain(polygons.iter().cloned().map(Aoi::from))
        .collect();
    analyze(&aois, locations)
}

/// Aggregate summary statistics over a set of analyses.
///
/// `most_populated` is `None` when the list is empty or every AOI is
/// empty; ties keep the earliest AOI. The average is `0.0` for an empty
/// list rather than dividing by zero.
#[must_use]
pub fn summarize(analyses: &[AoiAnalysis]) -> AnalysisSummary {
    let total_aois = analyses.len();
    let total_locations: usize = analyses.iter().map(AoiAnalysis::location_count).sum();
    let empty_aois = analyses
        .iter()
        .filter(|analysis| analysis.location_count() == 0)
        .count();

    let mut best: Option<&AoiAnalysis> = None;
    for analysis in analyses {
        if best.is_none_or(|current| analysis.location_count() > current.location_count()) {
            best = Some(analysis);
        }
    }
    let most_populated = best
        .filter(|analysis| analysis.location_count() > 0)
        .cloned();

    let average_locations_per_aoi = if total_aois == 0 {
        0.0
    } else {
        total_locations as f64 / total_aois as f64
    };

    AnalysisSummary {
        total_aois,
        total_locations,
        empty_aois,
        non_empty_aois: total_aois - empty_aois,
        average_locations_per_aoi,
        most_populated,
    }
}

#[cfg(test)]
mod tests;
