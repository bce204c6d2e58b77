//! Core domain types and spatial primitives for the Caseview engine.
//!
//! Investigators mark areas of interest (AOIs) — triangles, circles and
//! polygons — and points of interest over a set of geolocated events. This
//! crate provides the shape records, the geometric validators that gate
//! shape creation, and the containment predicates the analysis layer uses
//! to decide which events fall inside each AOI.
//!
//! All coordinates are WGS84 with `x = longitude` and `y = latitude`, in
//! degrees. Every function here is pure and synchronous; invalid or
//! degenerate input is reported through `Result` values or neutral returns
//! (`false`, `0.0`, empty), never through panics.

#![forbid(unsafe_code)]

pub mod aoi;
pub mod display;
pub mod drawing;
pub mod geometry;
pub mod palette;
pub mod point;
pub mod spatial;
pub mod surface;
pub mod validate;

pub use aoi::{Aoi, AoiKind, Circle, Poi, Polygon, Triangle};
pub use point::MapPoint;
pub use validate::{
    CircleMetrics, CircleRejection, PoiRejection, PoiSpacingRejection, PolygonMetrics,
    PolygonRejection, Snap, TriangleMetrics, TriangleRejection, ValidatedPoi, check_poi_spacing,
    snap_coordinates, validate_circle, validate_poi, validate_polygon, validate_triangle,
};
