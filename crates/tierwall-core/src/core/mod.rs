// crates/tierwall-core/src/core/mod.rs
// ============================================================================
// Module: Tierwall Core Types
// Description: Canonical tier, feature, catalog, and criteria structures.
// Purpose: Provide stable, serializable types for access and filtering.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the tier order, feature requirement table, session
//! state, catalog and stream records, and filter criteria. These types are
//! the canonical source of truth for any derived host surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod criteria;
pub mod feature;
pub mod listing;
pub mod profile;
pub mod session;
pub mod stream;
pub mod tier;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use criteria::CategoryTab;
pub use criteria::FilterCriteria;
pub use criteria::StreamCriteria;
pub use feature::FeatureCatalog;
pub use feature::FeatureCatalogError;
pub use feature::FeatureKey;
pub use listing::CatalogItem;
pub use listing::CategoryId;
pub use listing::ListingId;
pub use listing::Rating;
pub use listing::RatingError;
pub use profile::TierProfile;
pub use profile::TierProfiles;
pub use session::TierSession;
pub use session::UpgradeOutcome;
pub use stream::StreamAuthor;
pub use stream::StreamEntry;
pub use stream::StreamId;
pub use tier::Tier;
pub use tier::TierParseError;
