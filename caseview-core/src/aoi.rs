//! Area-of-interest shape records and the `Aoi` sum type.
//!
//! Shapes are created by drawing-tool completion, appended to their
//! collections and never mutated afterwards. Deletion is not part of the
//! current behaviour.

use std::time::SystemTime;

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MapPoint;
use crate::spatial::{point_in_circle, point_in_polygon, point_in_triangle};

/// A triangular area of interest.
///
/// Exactly three vertices; the fixed-size array keeps it structurally
/// distinct from [`Polygon`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The three corners, WGS84 lon/lat.
    pub vertices: [Coord<f64>; 3],
    /// Creating user.
    pub user_id: String,
    /// Assigned display colour.
    pub color: String,
    /// Creation instant.
    pub created_at: SystemTime,
}

/// A circular area of interest with a metric radius.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Centre, WGS84 lon/lat.
    pub center: Coord<f64>,
    /// Radius in metres.
    pub radius_m: f64,
    /// Creating user.
    pub user_id: String,
    /// Assigned display colour.
    pub color: String,
    /// Creation instant.
    pub created_at: SystemTime,
}

/// A polygonal area of interest.
///
/// Vertex order defines the boundary; the ring is implicitly closed and the
/// closing vertex is not stored as a duplicate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered boundary vertices (at least three, not self-intersecting).
    pub vertices: Vec<Coord<f64>>,
    /// Creating user.
    pub user_id: String,
    /// Assigned display colour.
    pub color: String,
    /// Creation instant.
    pub created_at: SystemTime,
}

/// A single marked point of interest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Poi {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position, WGS84 lon/lat.
    pub location: Coord<f64>,
    /// Creating user.
    pub user_id: String,
    /// Assigned display colour.
    pub color: String,
    /// Assigned marker icon.
    pub icon: String,
    /// Optional category (see [`crate::palette::POI_CATEGORIES`]).
    pub category: Option<String>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Creation instant.
    pub created_at: SystemTime,
}

/// Discriminant for AOI and POI marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AoiKind {
    /// Three-vertex area.
    Triangle,
    /// Centre-and-radius area.
    Circle,
    /// Ordered-ring area.
    Polygon,
    /// Single marked point.
    Poi,
}

impl AoiKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Polygon => "polygon",
            Self::Poi => "poi",
        }
    }
}

impl std::fmt::Display for AoiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any area of interest, dispatched by shape.
///
/// The analysis engine matches exhaustively on this type instead of
/// carrying parallel per-shape code paths.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::{Aoi, Circle, MapPoint};
/// use std::time::SystemTime;
///
/// let circle = Aoi::Circle(Circle {
///     id: "circle-1".into(),
///     name: "Perimeter".into(),
///     center: Coord { x: 0.0, y: 0.0 },
///     radius_m: 1_000.0,
///     user_id: "analyst".into(),
///     color: "#4CBACB".into(),
///     created_at: SystemTime::now(),
/// });
/// let event = MapPoint::new("loc-1", Coord { x: 0.0, y: 0.0 }, "Origin", "msg-1");
/// assert!(circle.contains(&event));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Aoi {
    /// A triangular area.
    Triangle(Triangle),
    /// A circular area.
    Circle(Circle),
    /// A polygonal area.
    Polygon(Polygon),
}

impl Aoi {
    /// The shape discriminant.
    #[must_use]
    pub const fn kind(&self) -> AoiKind {
        match self {
            Self::Triangle(_) => AoiKind::Triangle,
            Self::Circle(_) => AoiKind::Circle,
            Self::Polygon(_) => AoiKind::Polygon,
        }
    }

    /// Unique identifier of the underlying shape.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Triangle(t) => &t.id,
            Self::Circle(c) => &c.id,
            Self::Polygon(p) => &p.id,
        }
    }

    /// Display name of the underlying shape.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Triangle(t) => &t.name,
            Self::Circle(c) => &c.name,
            Self::Polygon(p) => &p.name,
        }
    }

    /// Assigned display colour.
    #[must_use]
    pub fn color(&self) -> &str {
        match self {
            Self::Triangle(t) => &t.color,
            Self::Circle(c) => &c.color,
            Self::Polygon(p) => &p.color,
        }
    }

    /// Creation instant.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        match self {
            Self::Triangle(t) => t.created_at,
            Self::Circle(c) => c.created_at,
            Self::Polygon(p) => p.created_at,
        }
    }

    /// Whether the event point falls inside this area.
    ///
    /// Each shape applies its own boundary rule: triangles and circles are
    /// boundary-inclusive, polygons follow the ray-casting rule.
    #[must_use]
    pub fn contains(&self, point: &MapPoint) -> bool {
        match self {
            Self::Triangle(t) => point_in_triangle(point.location, &t.vertices),
            Self::Circle(c) => point_in_circle(point.location, c.center, c.radius_m),
            Self::Polygon(p) => point_in_polygon(point.location, &p.vertices),
        }
    }
}

impl From<Triangle> for Aoi {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

impl From<Circle> for Aoi {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Polygon> for Aoi {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}
