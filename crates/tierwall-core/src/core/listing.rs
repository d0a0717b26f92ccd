// crates/tierwall-core/src/core/listing.rs
// ============================================================================
// Module: Tierwall Catalog Listings
// Description: Marketplace listing records and their identifier types.
// Purpose: Provide strongly typed, serializable catalog data.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Catalog surfaces render [`CatalogItem`] records fetched by the host.
//! Identifiers are opaque; [`Rating`] enforces its range at construction
//! boundaries so the filter engine can compare ratings without revisiting
//! validity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Marketplace listing identifier.
///
/// # Invariants
/// - Opaque numeric identifier; carries no ordering semantics beyond
///   uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(u64);

impl ListingId {
    /// Creates a new listing identifier.
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

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category slug shared by catalog listings and stream entries.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new category identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// SECTION: Rating
// ============================================================================

/// Star rating on the closed range `[0.0, 5.0]`.
///
/// # Invariants
/// - Always finite and within range once constructed; serde decoding goes
///   through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    /// Lowest representable rating.
    pub const MIN: Self = Self(0.0);
    /// Highest representable rating.
    pub const MAX: Self = Self(5.0);

    /// Creates a rating from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] when `value` is not finite or falls outside
    /// `[0.0, 5.0]`.
    pub fn new(value: f32) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite);
        }
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(RatingError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Returns the raw rating value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<f32> for Rating {
    type Error = RatingError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Catalog Item
// ============================================================================

/// One marketplace listing as presented to catalog surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Listing identifier.
    pub id: ListingId,
    /// Display name.
    pub name: String,
    /// Short description shown on catalog cards.
    pub description: String,
    /// Category the listing belongs to.
    pub category: CategoryId,
    /// Average star rating.
    pub rating: Rating,
    /// Whether the listing is reserved for paid tiers.
    pub premium: bool,
    /// List price in cents; zero for free listings.
    pub price_cents: u32,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error produced when constructing a [`Rating`] from a raw value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    /// The value was NaN or infinite.
    #[error("rating must be finite")]
    NotFinite,
    /// The value fell outside `[0.0, 5.0]`.
    #[error("rating out of range: {value}")]
    OutOfRange {
        /// Rejected value.
        value: f32,
    },
}
