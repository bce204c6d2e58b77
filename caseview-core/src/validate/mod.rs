//! Shape validation policies.
//!
//! Validators gate shape creation: drawing tools hand over raw vertices and
//! commit the shape only on `Ok`. Every rejection is a structured error
//! value whose `Display` text is the user-facing message; nothing here
//! panics on user input.

mod circle;
mod poi;
mod polygon;
mod triangle;

pub use circle::{
    CIRCLE_MAX_RADIUS_M, CIRCLE_MIN_RADIUS_M, CircleMetrics, CircleRejection, validate_circle,
};
pub use poi::{
    POI_MIN_SPACING_M, POI_NAME_MAX_LEN, POI_SNAP_DISTANCE_M, PoiRejection, PoiSpacingRejection,
    Snap, ValidatedPoi, check_poi_spacing, snap_coordinates, validate_poi,
};
pub use polygon::{PolygonMetrics, PolygonRejection, validate_polygon};
pub use triangle::{MIN_AREA_DEG2, TriangleMetrics, TriangleRejection, validate_triangle};
