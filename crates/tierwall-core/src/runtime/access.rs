// crates/tierwall-core/src/runtime/access.rs
// ============================================================================
// Module: Tierwall Access Decisions
// Description: Feature and tier-direct access checks with derived records.
// Purpose: Resolve every check through the one rank comparison.
// Dependencies: serde, crate::core, crate::notify
// ============================================================================

//! ## Overview
//! [`TierPolicy`] resolves feature checks against a requirement table;
//! [`TierGuard`] covers surfaces whose required tier is known directly.
//! Both paths reduce to [`Tier::satisfies`], so they can never disagree.
//! Decisions are derived records: recompute after any session change,
//! never cache them across tier transitions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::feature::FeatureCatalog;
use crate::core::feature::FeatureKey;
use crate::core::tier::Tier;
use crate::notify::UpgradeNotice;

// ============================================================================
// SECTION: Access Decision
// ============================================================================

/// Derived record of one feature access check.
///
/// # Invariants
/// - Never cached: recompute after any session tier change.
/// - `allowed` equals `current.satisfies(required)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Feature the check was resolved against.
    pub feature: FeatureKey,
    /// Tier held by the caller at check time.
    pub current: Tier,
    /// Minimum tier the feature requires.
    pub required: Tier,
    /// Whether access is granted.
    pub allowed: bool,
}

impl AccessDecision {
    /// Returns the notice to surface when the decision denies access.
    #[must_use]
    pub fn upgrade_notice(&self) -> Option<UpgradeNotice> {
        if self.allowed {
            None
        } else {
            Some(UpgradeNotice::for_feature(self.feature.clone(), self.required))
        }
    }
}

// ============================================================================
// SECTION: Tier Policy
// ============================================================================

/// Access decision surface over a feature requirement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPolicy {
    /// Requirement table consulted for every check.
    catalog: FeatureCatalog,
}

impl TierPolicy {
    /// Creates a policy over `catalog`.
    #[must_use]
    pub const fn new(catalog: FeatureCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the requirement table backing this policy.
    #[must_use]
    pub const fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// Returns the minimum tier required for `feature`.
    #[must_use]
    pub fn required_tier(&self, feature: &FeatureKey) -> Tier {
        self.catalog.required_tier(feature)
    }

    /// Returns true when `current` may use `feature`.
    #[must_use]
    pub fn can_access(&self, current: Tier, feature: &FeatureKey) -> bool {
        current.satisfies(self.required_tier(feature))
    }

    /// Resolves the full decision record for one check.
    #[must_use]
    pub fn decide(&self, current: Tier, feature: &FeatureKey) -> AccessDecision {
        let required = self.required_tier(feature);
        AccessDecision {
            feature: feature.clone(),
            current,
            required,
            allowed: current.satisfies(required),
        }
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::new(FeatureCatalog::builtin())
    }
}

// ============================================================================
// SECTION: Tier Guard
// ============================================================================

/// Route-level guard for surfaces with a directly known tier requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierGuard {
    /// Tier required to pass the guard.
    required: Tier,
}

impl TierGuard {
    /// Creates a guard requiring `required`.
    #[must_use]
    pub const fn new(required: Tier) -> Self {
        Self { required }
    }

    /// Returns the guarded requirement.
    #[must_use]
    pub const fn required(&self) -> Tier {
        self.required
    }

    /// Checks `current` against the guarded requirement.
    #[must_use]
    pub const fn check(&self, current: Tier) -> GuardDecision {
        GuardDecision {
            current,
            required: self.required,
            allowed: current.satisfies(self.required),
        }
    }
}

/// Outcome of a guard check.
///
/// # Invariants
/// - `allowed` equals `current.satisfies(required)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDecision {
    /// Tier held by the caller at check time.
    pub current: Tier,
    /// Tier the guard requires.
    pub required: Tier,
    /// Whether the guarded surface may render.
    pub allowed: bool,
}

impl GuardDecision {
    /// Returns the notice to surface when the guard denies access.
    #[must_use]
    pub const fn upgrade_notice(&self) -> Option<UpgradeNotice> {
        if self.allowed {
            None
        } else {
            Some(UpgradeNotice::new(self.required))
        }
    }
}
