// crates/tierwall-core/src/core/feature.rs
// ============================================================================
// Module: Tierwall Feature Requirements
// Description: Feature keys and the minimum-tier requirement table.
// Purpose: Provide total, fallback-preserving requirement lookup.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Gated surfaces are identified by opaque [`FeatureKey`] values. The
//! [`FeatureCatalog`] maps each key to the minimum tier that unlocks it.
//! Lookup is total: a key absent from the table resolves to
//! [`Tier::Freemium`], so absence means "open to everyone", never
//! "no access". Hosts that want missing entries treated as configuration
//! errors run [`FeatureCatalog::audit`] at startup; the runtime lookup
//! itself never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::tier::Tier;

// ============================================================================
// SECTION: Feature Key
// ============================================================================

/// Identifier for a gated feature surface.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureKey(String);

impl FeatureKey {
    /// Creates a new feature key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FeatureKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// ============================================================================
// SECTION: Feature Catalog
// ============================================================================

/// Immutable mapping from feature key to the minimum tier required.
///
/// # Invariants
/// - Lookup is total: absent keys resolve to [`Tier::Freemium`].
/// - Contents never change after construction; there is no insertion API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureCatalog {
    /// Requirement table keyed by feature.
    requirements: BTreeMap<FeatureKey, Tier>,
}

/// Builtin requirement entries unlocked at [`Tier::Basic`].
const BUILTIN_BASIC: &[&str] = &[
    "workflow-templates",
    "analytics",
    "team-dashboard",
    "collaboration-hub",
    "workflow-designer",
    "extended-tools",
    "usage-analytics",
    "team-settings",
    "audit-logs",
    "priority-support",
    "learning-hub-pro",
];

/// Builtin requirement entries unlocked at [`Tier::Pro`].
const BUILTIN_PRO: &[&str] = &[
    "ai-studio",
    "automation",
    "custom-models",
    "advanced-api",
    "white-labeling",
    "dedicated-support",
];

impl FeatureCatalog {
    /// Builds a catalog from `(key, tier)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureCatalogError`] when a key is empty or appears twice.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (FeatureKey, Tier)>,
    ) -> Result<Self, FeatureCatalogError> {
        let mut requirements = BTreeMap::new();
        for (key, tier) in entries {
            if key.as_str().is_empty() {
                return Err(FeatureCatalogError::EmptyFeatureKey);
            }
            if requirements.insert(key.clone(), tier).is_some() {
                return Err(FeatureCatalogError::DuplicateFeature { key });
            }
        }
        Ok(Self { requirements })
    }

    /// Returns the shipped requirement table.
    #[must_use]
    pub fn builtin() -> Self {
        let basic = BUILTIN_BASIC.iter().map(|key| (FeatureKey::new(*key), Tier::Basic));
        let pro = BUILTIN_PRO.iter().map(|key| (FeatureKey::new(*key), Tier::Pro));
        Self {
            requirements: basic.chain(pro).collect(),
        }
    }

    /// Returns the minimum tier required for `key`.
    ///
    /// Keys absent from the table resolve to [`Tier::Freemium`].
    #[must_use]
    pub fn required_tier(&self, key: &FeatureKey) -> Tier {
        self.requirements.get(key).copied().unwrap_or(Tier::Freemium)
    }

    /// Returns true when `key` has an explicit entry.
    #[must_use]
    pub fn contains(&self, key: &FeatureKey) -> bool {
        self.requirements.contains_key(key)
    }

    /// Returns the number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Returns true when the table has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Iterates over the explicit feature keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &FeatureKey> {
        self.requirements.keys()
    }

    /// Iterates over the explicit entries in sorted key order.
    pub fn entries(&self) -> impl Iterator<Item = (&FeatureKey, Tier)> {
        self.requirements.iter().map(|(key, tier)| (key, *tier))
    }

    /// Returns the `declared` keys that have no explicit entry, sorted and
    /// deduplicated.
    ///
    /// Hosts that treat unmapped keys as configuration errors call this at
    /// startup and fail on a non-empty result. Runtime lookup is unaffected.
    #[must_use]
    pub fn audit(&self, declared: &[FeatureKey]) -> Vec<FeatureKey> {
        let mut missing: Vec<FeatureKey> =
            declared.iter().filter(|key| !self.contains(key)).cloned().collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error produced while building a [`FeatureCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureCatalogError {
    /// A feature key was empty.
    #[error("feature key must not be empty")]
    EmptyFeatureKey,
    /// A feature key appeared more than once.
    #[error("duplicate feature key: {key}")]
    DuplicateFeature {
        /// The repeated key.
        key: FeatureKey,
    },
}
