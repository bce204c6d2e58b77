//! Interactive session state: append-only collections, reactive recompute.

use std::collections::HashSet;
use std::time::SystemTime;

use geo::Coord;
use log::debug;
use thiserror::Error;

use caseview_cluster::ClusterIndex;
use caseview_core::palette::{assign_color, assign_icon};
use caseview_core::validate::{
    CircleRejection, POI_MIN_SPACING_M, PoiRejection, PoiSpacingRejection, PolygonRejection,
    TriangleRejection, check_poi_spacing, validate_circle, validate_poi, validate_polygon,
    validate_triangle,
};
use caseview_core::{Circle, MapPoint, Poi, Polygon, Triangle};

use crate::{AnalysisSummary, AoiAnalysis, analyze_all_aois, summarize};

/// Errors from [`Session::add_poi`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoiPlacementError {
    /// Coordinates or name failed validation.
    #[error(transparent)]
    Invalid(#[from] PoiRejection),
    /// The placement violated the minimum spacing policy.
    #[error(transparent)]
    Spacing(#[from] PoiSpacingRejection),
}

/// In-memory state for one investigation session.
///
/// Shape collections are append-only: a shape that passes validation is
/// assigned the next colour in the palette cycle and a sequential id, then
/// never mutated. Deletion is not part of the current behaviour.
/// Containment analyses recompute from scratch on request; the clustering
/// index rebuilds lazily whenever the visible location set has changed.
#[derive(Debug, Default)]
pub struct Session {
    locations: Vec<MapPoint>,
    hidden_messages: HashSet<String>,
    triangles: Vec<Triangle>,
    circles: Vec<Circle>,
    polygons: Vec<Polygon>,
    pois: Vec<Poi>,
    cluster: Option<ClusterIndex>,
}

impl Session {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the location dataset.
    pub fn load_locations(&mut self, locations: Vec<MapPoint>) {
        debug!("loading {} locations into session", locations.len());
        self.locations = locations;
        self.cluster = None;
    }

    /// The full location dataset.
    #[must_use]
    pub fn locations(&self) -> &[MapPoint] {
        &self.locations
    }

    /// Locations whose owning message is not hidden.
    #[must_use]
    pub fn visible_locations(&self) -> Vec<MapPoint> {
        self.locations
            .iter()
            .filter(|location| !self.hidden_messages.contains(&location.message_id))
            .cloned()
            .collect()
    }

    /// Show or hide every location belonging to a message.
    pub fn set_message_visibility(&mut self, message_id: &str, visible: bool) {
        let changed = if visible {
            self.hidden_messages.remove(message_id)
        } else {
            self.hidden_messages.insert(message_id.to_owned())
        };
        if changed {
            self.cluster = None;
        }
    }

    /// Saved triangles, oldest first.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Saved circles, oldest first.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Saved polygons, oldest first.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Saved POIs, oldest first.
    #[must_use]
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Validate and save a triangle.
    ///
    /// # Errors
    /// Propagates the rejection from
    /// [`validate_triangle`](caseview_core::validate_triangle); nothing is
    /// saved on rejection.
    pub fn add_triangle(
        &mut self,
        vertices: [Coord<f64>; 3],
        user_id: &str,
    ) -> Result<Triangle, TriangleRejection> {
        validate_triangle(&vertices)?;
        let ordinal = self.triangles.len() + 1;
        let triangle = Triangle {
            id: format!("triangle-{ordinal}"),
            name: format!("Triangle {ordinal}"),
            vertices,
            user_id: user_id.to_owned(),
            color: assign_color(self.triangles.len()).to_owned(),
            created_at: SystemTime::now(),
        };
        debug!("saved triangle {}", triangle.id);
        self.triangles.push(triangle.clone());
        Ok(triangle)
    }

    /// Validate and save a circle.
    ///
    /// # Errors
    /// Propagates the rejection from
    /// [`validate_circle`](caseview_core::validate_circle).
    pub fn add_circle(
        &mut self,
        center: Coord<f64>,
        radius_m: f64,
        user_id: &str,
    ) -> Result<Circle, CircleRejection> {
        validate_circle(center, radius_m)?;
        let ordinal = self.circles.len() + 1;
        let circle = Circle {
            id: format!("circle-{ordinal}"),
            name: format!("Circle {ordinal}"),
            center,
            radius_m,
            user_id: user_id.to_owned(),
            color: assign_color(self.circles.len()).to_owned(),
            created_at: SystemTime::now(),
        };
        debug!("saved circle {}", circle.id);
        self.circles.push(circle.clone());
        Ok(circle)
    }

    /// Validate and save a polygon.
    ///
    /// # Errors
    /// Propagates the rejection from
    /// [`validate_polygon`](caseview_core::validate_polygon).
    pub fn add_polygon(
        &mut self,
        vertices: Vec<Coord<f64>>,
        user_id: &str,
    ) -> Result<Polygon, PolygonRejection> {
        validate_polygon(&vertices)?;
        let ordinal = self.polygons.len() + 1;
        let polygon = Polygon {
            id: format!("polygon-{ordinal}"),
            name: format!("Polygon {ordinal}"),
            vertices,
            user_id: user_id.to_owned(),
            color: assign_color(self.polygons.len()).to_owned(),
            created_at: SystemTime::now(),
        };
        debug!("saved polygon {}", polygon.id);
        self.polygons.push(polygon.clone());
        Ok(polygon)
    }

    /// Validate and save a POI.
    ///
    /// Coordinates are rounded to five decimals and checked against the
    /// 10 m spacing policy before the POI is saved.
    ///
    /// # Errors
    /// Returns [`PoiPlacementError`] when coordinate/name validation or
    /// the spacing check fails.
    pub fn add_poi(
        &mut self,
        location: Coord<f64>,
        name: Option<&str>,
        category: Option<&str>,
        user_id: &str,
    ) -> Result<Poi, PoiPlacementError> {
        let validated = validate_poi(location, name)?;
        check_poi_spacing(validated.location, &self.pois, POI_MIN_SPACING_M)?;
        let ordinal = self.pois.len() + 1;
        let poi = Poi {
            id: format!("poi-{ordinal}"),
            name: name.map_or_else(|| format!("POI {ordinal}"), str::to_owned),
            location: validated.location,
            user_id: user_id.to_owned(),
            color: assign_color(self.pois.len()).to_owned(),
            icon: assign_icon(category, self.pois.len()).to_owned(),
            category: category.map(str::to_owned),
            description: None,
            created_at: SystemTime::now(),
        };
        debug!("saved poi {}", poi.id);
        self.pois.push(poi.clone());
        Ok(poi)
    }

    /// Recompute containment analyses over the visible location set.
    ///
    /// Runs from scratch on every call; at the expected scale (tens of
    /// AOIs, hundreds of locations) this is cheaper than tracking
    /// invalidation.
    #[must_use]
    pub fn analyses(&self) -> Vec<AoiAnalysis> {
        let visible = self.visible_locations();
        debug!(
            "analysing {} AOIs against {} visible locations",
            self.triangles.len() + self.circles.len() + self.polygons.len(),
            visible.len()
        );
        analyze_all_aois(&self.triangles, &self.circles, &self.polygons, &visible)
    }

    /// Summary statistics over the current analyses.
    #[must_use]
    pub fn summary(&self) -> AnalysisSummary {
        summarize(&self.analyses())
    }

    /// The clustering index over visible locations, rebuilding if stale.
    pub fn cluster_index(&mut self) -> &ClusterIndex {
        if self.cluster.is_none() {
            let visible = self.visible_locations();
            debug!("rebuilding cluster index over {} points", visible.len());
            self.cluster = Some(ClusterIndex::build(&visible));
        }
        self.cluster.get_or_insert_with(|| ClusterIndex::build(&[]))
    }
}
