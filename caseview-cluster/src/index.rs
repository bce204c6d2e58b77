//! Precomputed per-zoom cluster hierarchy.

use std::collections::HashMap;

use geo::{Coord, Rect};
use log::warn;
use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};
use thiserror::Error;

use caseview_core::MapPoint;

use crate::projection::{project, unproject};
use crate::{CLUSTER_MIN_POINTS, CLUSTER_RADIUS_PX, RAW_LEVEL, TILE_EXTENT_PX, abbreviate_count};

type TreeEntry = GeomWithData<[f64; 2], usize>;

/// One renderable feature at a zoom level.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterFeature {
    /// A location that merged with nothing at this level.
    Point(MapPoint),
    /// Two or more locations merged at this level.
    Cluster {
        /// Stable identifier for leaf lookup via
        /// [`ClusterIndex::cluster_points`].
        id: u64,
        /// Weighted centroid of the merged locations, in degrees.
        location: Coord<f64>,
        /// Number of merged locations.
        count: usize,
        /// Compact count label from [`abbreviate_count`].
        count_label: String,
    },
}

/// Errors from leaf lookups on a [`ClusterIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// The id does not name a cluster in this index.
    #[error("unknown cluster id {0}")]
    UnknownCluster(u64),
}

#[derive(Debug, Clone)]
struct LevelEntry {
    pos: [f64; 2],
    kind: EntryKind,
    /// Indices into the kept point list covered by this entry.
    leaves: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
enum EntryKind {
    Point(usize),
    Cluster(u64),
}

#[derive(Debug)]
struct Level {
    entries: Vec<LevelEntry>,
    tree: RTree<TreeEntry>,
}

impl Level {
    fn from_entries(entries: Vec<LevelEntry>) -> Self {
        let tree = RTree::bulk_load(
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| TreeEntry::new(entry.pos, index))
                .collect(),
        );
        Self { entries, tree }
    }
}

/// Immutable cluster hierarchy over a set of locations.
///
/// Building projects every finite location into the unit square, then
/// merges greedily from [`CLUSTER_MAX_ZOOM`](crate::CLUSTER_MAX_ZOOM) down
/// to zoom zero: at each level, entries within the pixel radius of an
/// unvisited entry fold into a weighted-centroid cluster when at least
/// [`CLUSTER_MIN_POINTS`] locations combine. Locations with non-finite
/// coordinates are skipped with a warning rather than failing the build.
///
/// # Examples
/// ```
/// use caseview_cluster::ClusterIndex;
///
/// let index = ClusterIndex::build(&[]);
/// assert!(index.is_empty());
/// ```
#[derive(Debug)]
pub struct ClusterIndex {
    points: Vec<MapPoint>,
    levels: Vec<Level>,
    leaves: HashMap<u64, Vec<usize>>,
    skipped: usize,
}

impl ClusterIndex {
    /// Build the full hierarchy for a location set.
    #[must_use]
    pub fn build(points: &[MapPoint]) -> Self {
        let mut kept = Vec::with_capacity(points.len());
        let mut raw_entries = Vec::with_capacity(points.len());
        let mut skipped = 0;
        for point in points {
            if !point.location.x.is_finite() || !point.location.y.is_finite() {
                warn!("skipping location {} with non-finite coordinates", point.id);
                skipped += 1;
                continue;
            }
            let index = kept.len();
            raw_entries.push(LevelEntry {
                pos: project(point.location),
                kind: EntryKind::Point(index),
                leaves: vec![index],
            });
            kept.push(point.clone());
        }

        let mut leaves = HashMap::new();
        let mut next_id = 0u64;
        // Built raw-first, so the vector runs 16 down to 0 until reversed.
        let mut descending = Vec::with_capacity(RAW_LEVEL + 1);
        descending.push(Level::from_entries(raw_entries));
        for zoom in (0..RAW_LEVEL).rev() {
            let radius = CLUSTER_RADIUS_PX / (TILE_EXTENT_PX * (zoom as f64).exp2());
            let previous = descending
                .last()
                .map(|level| merge_level(level, radius, &mut next_id, &mut leaves))
                .unwrap_or_default();
            descending.push(Level::from_entries(previous));
        }
        descending.reverse();

        Self {
            points: kept,
            levels: descending,
            leaves,
            skipped,
        }
    }

    /// Number of indexed locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the index holds no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of input locations dropped for non-finite coordinates.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Features visible inside a bounding box at a zoom level.
    ///
    /// The fractional zoom floors to an integer level; levels above
    /// [`CLUSTER_MAX_ZOOM`](crate::CLUSTER_MAX_ZOOM) return raw points.
    /// Results come back in build order, so repeated queries are stable.
    #[must_use]
    pub fn clusters(&self, bbox: Rect<f64>, zoom: f64) -> Vec<ClusterFeature> {
        let level = self.level_for(zoom);
        let low = project(Coord {
            x: bbox.min().x,
            y: bbox.max().y,
        });
        let high = project(Coord {
            x: bbox.max().x,
            y: bbox.min().y,
        });
        let envelope = AABB::from_corners(low, high);
        let mut hits: Vec<usize> = level
            .tree
            .locate_in_envelope(&envelope)
            .map(|entry| entry.data)
            .collect();
        hits.sort_unstable();
        hits.into_iter()
            .filter_map(|index| level.entries.get(index).map(|entry| self.feature(entry)))
            .collect()
    }

    /// The locations folded into a cluster.
    ///
    /// # Errors
    /// Returns [`ClusterError::UnknownCluster`] when the id was never
    /// issued by this index.
    pub fn cluster_points(&self, id: u64) -> Result<Vec<MapPoint>, ClusterError> {
        let indices = self
            .leaves
            .get(&id)
            .ok_or(ClusterError::UnknownCluster(id))?;
        Ok(indices
            .iter()
            .filter_map(|&index| self.points.get(index).cloned())
            .collect())
    }

    fn level_for(&self, zoom: f64) -> &Level {
        let clamped = if zoom.is_finite() {
            zoom.floor().clamp(0.0, RAW_LEVEL as f64) as usize
        } else {
            0
        };
        self.levels.get(clamped).unwrap_or_else(|| &self.levels[0])
    }

    fn feature(&self, entry: &LevelEntry) -> ClusterFeature {
        match entry.kind {
            EntryKind::Point(index) => ClusterFeature::Point(self.points[index].clone()),
            EntryKind::Cluster(id) => ClusterFeature::Cluster {
                id,
                location: unproject(entry.pos),
                count: entry.leaves.len(),
                count_label: abbreviate_count(entry.leaves.len()),
            },
        }
    }
}

/// Merge one level's entries into the next-coarser level.
fn merge_level(
    previous: &Level,
    radius: f64,
    next_id: &mut u64,
    leaves: &mut HashMap<u64, Vec<usize>>,
) -> Vec<LevelEntry> {
    let mut visited = vec![false; previous.entries.len()];
    let mut merged = Vec::with_capacity(previous.entries.len());
    for (index, entry) in previous.entries.iter().enumerate() {
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let mut neighbours: Vec<usize> = previous
            .tree
            .locate_within_distance(entry.pos, radius * radius)
            .map(|found| found.data)
            .filter(|&found| !visited[found])
            .collect();
        neighbours.sort_unstable();

        let mut combined = entry.leaves.clone();
        let mut weighted = [
            entry.pos[0] * entry.leaves.len() as f64,
            entry.pos[1] * entry.leaves.len() as f64,
        ];
        for &neighbour in &neighbours {
            visited[neighbour] = true;
            let other = &previous.entries[neighbour];
            weighted[0] += other.pos[0] * other.leaves.len() as f64;
            weighted[1] += other.pos[1] * other.leaves.len() as f64;
            combined.extend_from_slice(&other.leaves);
        }

        if combined.len() > entry.leaves.len() && combined.len() >= CLUSTER_MIN_POINTS {
            let total = combined.len() as f64;
            let id = *next_id;
            *next_id += 1;
            leaves.insert(id, combined.clone());
            merged.push(LevelEntry {
                pos: [weighted[0] / total, weighted[1] / total],
                kind: EntryKind::Cluster(id),
                leaves: combined,
            });
        } else {
            merged.push(entry.clone());
        }
    }
    merged
}
