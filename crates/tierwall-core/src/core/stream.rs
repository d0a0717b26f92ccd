// crates/tierwall-core/src/core/stream.rs
// ============================================================================
// Module: Tierwall Stream Entries
// Description: Live stream records with nested author attribution.
// Purpose: Provide the data model for the stream filter surface.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Stream surfaces render [`StreamEntry`] records. Unlike catalog
//! listings, entries carry an optional nested [`StreamAuthor`] whose
//! display name participates in text matching.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::listing::CategoryId;

// ============================================================================
// SECTION: Stream Types
// ============================================================================

/// Stream entry identifier.
///
/// # Invariants
/// - Opaque numeric identifier; carries no ordering semantics beyond
///   uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(u64);

impl StreamId {
    /// Creates a new stream identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Author attribution nested inside a stream entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamAuthor {
    /// Author account identifier.
    pub id: u64,
    /// Display name; participates in stream text matching.
    pub username: String,
    /// Avatar location, when the author has one.
    pub avatar_url: Option<String>,
}

/// One live stream as presented to stream surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    /// Stream identifier.
    pub id: StreamId,
    /// Stream title.
    pub title: String,
    /// Short description shown on stream cards.
    pub description: String,
    /// Category the stream belongs to.
    pub category: CategoryId,
    /// Author attribution, when known.
    pub author: Option<StreamAuthor>,
}
