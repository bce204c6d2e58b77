//! Geolocated event points extracted from investigation material.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single geolocated event shown on the map.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Points
/// are immutable once loaded: the analysis and clustering layers reference
/// them by `id` and never assign a divergent identity.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::MapPoint;
///
/// let point = MapPoint::new(
///     "loc-001",
///     Coord { x: -0.1276, y: 51.5074 },
///     "Charing Cross",
///     "msg-001",
/// );
/// assert_eq!(point.id, "loc-001");
/// assert!(point.timestamp.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapPoint {
    /// Unique identifier.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Short display label.
    pub label: String,
    /// Identifier of the message the point was extracted from.
    pub message_id: String,
    /// Free-text context surrounding the extraction.
    pub context: String,
    /// Optional RFC 3339 timestamp of the underlying event.
    pub timestamp: Option<String>,
}

impl MapPoint {
    /// Construct a `MapPoint` without context or timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        location: Coord<f64>,
        label: impl Into<String>,
        message_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            label: label.into(),
            message_id: message_id.into(),
            context: String::new(),
            timestamp: None,
        }
    }

    /// Attach extraction context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Attach an event timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builder_helpers_populate_optional_fields() {
        let point = MapPoint::new("loc-1", Coord { x: 0.0, y: 0.0 }, "Somewhere", "msg-1")
            .with_context("mentioned in passing")
            .with_timestamp("2024-03-01T12:00:00Z");
        assert_eq!(point.context, "mentioned in passing");
        assert_eq!(point.timestamp.as_deref(), Some("2024-03-01T12:00:00Z"));
    }
}
