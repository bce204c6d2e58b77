//! Zoom-keyed point clustering for the Caseview engine.
//!
//! Dense location sets are unreadable on a map at low zoom, so the engine
//! greedily merges nearby points into clusters per integer zoom level. The
//! merge radius is fixed in screen pixels ([`CLUSTER_RADIUS_PX`]) and
//! converted into map units per level, which makes cluster membership a
//! function of zoom alone rather than of viewport position.
//!
//! [`ClusterIndex::build`] precomputes every level once; queries against a
//! built index are read-only and cheap. Levels above [`CLUSTER_MAX_ZOOM`]
//! return the raw points unmerged.

#![forbid(unsafe_code)]

mod index;
mod projection;

pub use index::{ClusterError, ClusterFeature, ClusterIndex};

/// Merge radius in screen pixels at tile extent [`TILE_EXTENT_PX`].
pub const CLUSTER_RADIUS_PX: f64 = 50.0;

/// Logical tile size the pixel radius is expressed against.
pub const TILE_EXTENT_PX: f64 = 512.0;

/// Last zoom level at which merging happens; beyond it points render raw.
pub const CLUSTER_MAX_ZOOM: f64 = 15.0;

/// First zoom level with a precomputed cluster layer.
pub const CLUSTER_MIN_ZOOM: f64 = 0.0;

/// Minimum number of merged points for a cluster to form.
pub const CLUSTER_MIN_POINTS: usize = 2;

/// Zoom level index holding the unmerged points.
pub(crate) const RAW_LEVEL: usize = 16;

/// Whether merging applies at the given zoom level.
///
/// # Examples
/// ```
/// use caseview_cluster::should_cluster;
///
/// assert!(should_cluster(14.0));
/// assert!(!should_cluster(15.0));
/// ```
#[must_use]
pub const fn should_cluster(zoom: f64) -> bool {
    zoom < CLUSTER_MAX_ZOOM
}

/// Approximate merge distance in degrees at the given zoom level.
///
/// A coarse screen-space heuristic for callers that need a degree
/// threshold without projecting: one degree at zoom zero, halving with
/// each level.
#[must_use]
pub fn clustering_distance_deg(zoom: f64) -> f64 {
    (-zoom).exp2()
}

/// Compact display label for a cluster size.
///
/// Counts below a thousand print verbatim; larger counts round to a
/// `k` suffix with one decimal below ten thousand.
///
/// # Examples
/// ```
/// use caseview_cluster::abbreviate_count;
///
/// assert_eq!(abbreviate_count(847), "847");
/// assert_eq!(abbreviate_count(1_500), "1.5k");
/// assert_eq!(abbreviate_count(12_345), "12k");
/// ```
#[must_use]
pub fn abbreviate_count(count: usize) -> String {
    if count >= 10_000 {
        format!("{}k", (count as f64 / 1_000.0).round())
    } else if count >= 1_000 {
        format!("{}k", (count as f64 / 100.0).round() / 10.0)
    } else {
        count.to_string()
    }
}
