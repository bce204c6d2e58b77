//! Archive models and queries.

use std::collections::BTreeMap;

use geo::{Coord, Rect};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use caseview_core::MapPoint;

/// Errors from [`EventArchive::from_json`].
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The document was not valid archive JSON.
    #[error("malformed event archive: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A complete investigation export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventArchive {
    /// Conversations in export order.
    pub conversations: Vec<Conversation>,
    /// Aggregate counts and coverage description.
    pub metadata: ArchiveMetadata,
}

/// One conversation thread within the archive.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation identifier.
    pub conversation_id: String,
    /// Human-readable thread title.
    pub title: String,
    /// RFC 3339 timestamp of the conversation.
    pub timestamp: String,
    /// Messages in thread order.
    pub messages: Vec<Message>,
}

/// One message with its geolocated extractions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub message_id: String,
    /// One-line summary of the message content.
    pub summary: String,
    /// RFC 3339 timestamp of the message.
    pub timestamp: String,
    /// Locations extracted from the message text.
    pub locations: Vec<RawLocation>,
}

/// A location as stored in the archive, before conversion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLocation {
    /// Unique location identifier.
    pub id: String,
    /// `[longitude, latitude]` pair in degrees.
    pub coordinates: [f64; 2],
    /// Short display label.
    pub label: String,
    /// Free-text context surrounding the extraction.
    pub context: String,
    /// RFC 3339 timestamp of the underlying event.
    pub timestamp: String,
}

/// Archive-level metadata block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArchiveMetadata {
    /// Number of conversations in the export.
    pub total_conversations: usize,
    /// Number of messages across all conversations.
    pub total_messages: usize,
    /// Number of extracted locations across all messages.
    pub total_locations: usize,
    /// Earliest and latest event timestamps.
    pub date_range: DateRange,
    /// Geographic extent of the export.
    pub geographic_coverage: GeographicCoverage,
    /// Named dense-area scenarios, keyed by scenario name.
    #[serde(default)]
    pub clustering_test_scenarios: BTreeMap<String, String>,
}

/// Earliest and latest timestamps covered by the archive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    /// RFC 3339 start of the range.
    pub start: String,
    /// RFC 3339 end of the range.
    pub end: String,
}

/// Where the archived events took place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeographicCoverage {
    /// City most of the events fall in.
    pub primary_city: String,
    /// Other regions with at least one event.
    pub secondary_locations: Vec<String>,
    /// Extent containing every archived location.
    pub bounding_box: BoundingBox,
}

/// Axis-aligned geographic extent in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    /// Western longitude bound.
    pub west: f64,
    /// Eastern longitude bound.
    pub east: f64,
    /// Southern latitude bound.
    pub south: f64,
    /// Northern latitude bound.
    pub north: f64,
}

impl BoundingBox {
    /// The extent as a [`Rect`] with `x = longitude`, `y = latitude`.
    #[must_use]
    pub fn rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.west,
                y: self.south,
            },
            Coord {
                x: self.east,
                y: self.north,
            },
        )
    }
}

/// A message's extractions converted for display grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageGroup {
    /// Identifier of the source message.
    pub message_id: String,
    /// One-line summary of the source message.
    pub summary: String,
    /// Converted locations, in archive order.
    pub locations: Vec<MapPoint>,
    /// RFC 3339 timestamp of the source message.
    pub timestamp: String,
}

impl RawLocation {
    /// Convert to a core [`MapPoint`], tagged with its owning message.
    #[must_use]
    pub fn to_map_point(&self, message_id: &str) -> MapPoint {
        MapPoint::new(
            self.id.clone(),
            Coord {
                x: self.coordinates[0],
                y: self.coordinates[1],
            },
            self.label.clone(),
            message_id,
        )
        .with_context(self.context.clone())
        .with_timestamp(self.timestamp.clone())
    }
}

impl Message {
    /// Convert this message and its locations into a [`MessageGroup`].
    #[must_use]
    pub fn to_group(&self) -> MessageGroup {
        MessageGroup {
            message_id: self.message_id.clone(),
            summary: self.summary.clone(),
            locations: self
                .locations
                .iter()
                .map(|location| location.to_map_point(&self.message_id))
                .collect(),
            timestamp: self.timestamp.clone(),
        }
    }
}

impl EventArchive {
    /// Parse an archive from its JSON document.
    ///
    /// # Errors
    /// Returns [`ArchiveError::Parse`] when the document is not valid
    /// archive JSON.
    ///
    /// # Examples
    /// ```
    /// use caseview_data::EventArchive;
    ///
    /// assert!(EventArchive::from_json("not json").is_err());
    /// ```
    pub fn from_json(document: &str) -> Result<Self, ArchiveError> {
        let archive: Self = serde_json::from_str(document)?;
        debug!(
            "loaded archive: {} conversations, {} locations",
            archive.conversations.len(),
            archive.metadata.total_locations
        );
        Ok(archive)
    }

    /// Every location in the archive as a [`MapPoint`], in archive order.
    #[must_use]
    pub fn all_locations(&self) -> Vec<MapPoint> {
        self.conversations
            .iter()
            .flat_map(|conversation| &conversation.messages)
            .flat_map(|message| {
                message
                    .locations
                    .iter()
                    .map(|location| location.to_map_point(&message.message_id))
            })
            .collect()
    }

    /// Message groups for one conversation; empty when the id is unknown.
    #[must_use]
    pub fn locations_by_conversation(&self, conversation_id: &str) -> Vec<MessageGroup> {
        self.conversations
            .iter()
            .find(|conversation| conversation.conversation_id == conversation_id)
            .map(|conversation| conversation.messages.iter().map(Message::to_group).collect())
            .unwrap_or_default()
    }

    /// Locations for one message; empty when the id is unknown.
    #[must_use]
    pub fn locations_by_message(&self, message_id: &str) -> Vec<MapPoint> {
        self.conversations
            .iter()
            .flat_map(|conversation| &conversation.messages)
            .find(|message| message.message_id == message_id)
            .map(Message::to_group)
            .map(|group| group.locations)
            .unwrap_or_default()
    }

    /// Locations inside an axis-aligned extent, bounds inclusive.
    #[must_use]
    pub fn locations_in_bbox(&self, bbox: Rect<f64>) -> Vec<MapPoint> {
        self.all_locations()
            .into_iter()
            .filter(|location| {
                location.location.x >= bbox.min().x
                    && location.location.x <= bbox.max().x
                    && location.location.y >= bbox.min().y
                    && location.location.y <= bbox.max().y
            })
            .collect()
    }
}
