//! Event-archive loading for the Caseview engine.
//!
//! Investigation exports arrive as a JSON archive of conversations, each
//! holding messages with geolocated extractions, plus summary metadata.
//! This crate deserializes the archive verbatim and converts its records
//! into the core [`MapPoint`](caseview_core::MapPoint) type the analysis
//! and clustering layers consume.
//!
//! The archive is read-only: queries filter and convert, never mutate.

#![forbid(unsafe_code)]

mod archive;

pub use archive::{
    ArchiveError, ArchiveMetadata, BoundingBox, Conversation, DateRange, EventArchive,
    GeographicCoverage, Message, MessageGroup, RawLocation,
};
