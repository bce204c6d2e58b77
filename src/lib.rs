//! Facade crate for the Caseview investigation-mapping engine.
//!
//! This crate re-exports the geometry and validation core, the AOI
//! containment analysis layer, the zoom-keyed clustering index, and
//! (behind the `data` feature) the event-archive loader.

#![forbid(unsafe_code)]

pub use caseview_core::{
    Aoi, AoiKind, Circle, MapPoint, Poi, Polygon, Triangle,
    drawing::{DrawInput, DrawMode, DrawRejection, DrawState, DrawingTool, DrawnShape},
    palette::{AOI_COLORS, POI_CATEGORIES, POI_ICONS, assign_color, assign_icon},
    surface::{MapSurface, SurfaceBinding, Viewport},
    validate::{
        CircleRejection, PoiRejection, PoiSpacingRejection, PolygonRejection, TriangleRejection,
        validate_circle, validate_poi, validate_polygon, validate_triangle,
    },
};

pub use caseview_analysis::{
    AnalysisSummary, AoiAnalysis, PoiPlacementError, Session, analyze, analyze_all_aois, summarize,
};

pub use caseview_cluster::{
    ClusterError, ClusterFeature, ClusterIndex, abbreviate_count, clustering_distance_deg,
    should_cluster,
};

#[cfg(feature = "data")]
pub use caseview_data::{ArchiveError, EventArchive, MessageGroup};
