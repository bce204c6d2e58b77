//! Derived analysis records.

use std::time::SystemTime;

use caseview_core::{AoiKind, MapPoint};

/// One AOI with the locations it contains.
///
/// Derived data, recomputed rather than persisted. The location count is a
/// view over the contained vector, so the count can never drift from the
/// list it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct AoiAnalysis {
    /// Identifier of the analysed AOI.
    pub id: String,
    /// Display name of the analysed AOI.
    pub name: String,
    /// Shape discriminant.
    pub kind: AoiKind,
    /// Display colour of the analysed AOI.
    pub color: String,
    /// Creation instant of the analysed AOI.
    pub created_at: SystemTime,
    /// Locations inside the AOI, in input order.
    pub contained: Vec<MapPoint>,
}

impl AoiAnalysis {
    /// Number of contained locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.contained.len()
    }
}

/// Aggregate statistics over a set of [`AoiAnalysis`] records.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Number of AOIs analysed.
    pub total_aois: usize,
    /// Sum of per-AOI location counts (a location inside two AOIs counts
    /// twice).
    pub total_locations: usize,
    /// AOIs containing no locations.
    pub empty_aois: usize,
    /// AOIs containing at least one location.
    pub non_empty_aois: usize,
    /// Mean contained locations per AOI; `0.0` when no AOIs exist.
    pub average_locations_per_aoi: f64,
    /// The AOI with the most locations, when any AOI is non-empty. Ties
    /// keep the earliest.
    pub most_populated: Option<AoiAnalysis>,
}
