// crates/tierwall-core/src/core/session.rs
// ============================================================================
// Module: Tierwall Session State
// Description: Injectable session owning the current subscription tier.
// Purpose: Confine tier mutation to a single entry point.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`TierSession`] is the injectable ownership point for the caller's
//! current tier. Access checks read the tier through [`TierSession::tier`]
//! at call time; [`TierSession::upgrade`] is the only mutation entry point
//! and never lowers the tier. Hosts hold one session per signed-in user
//! and recompute decisions after any upgrade.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::tier::Tier;

// ============================================================================
// SECTION: Session
// ============================================================================

/// Mutable session state owning the current subscription tier.
///
/// # Invariants
/// - [`TierSession::upgrade`] is the only mutation entry point.
/// - The tier never decreases over the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSession {
    /// Current subscription tier.
    tier: Tier,
}

impl TierSession {
    /// Creates a session starting at `tier`.
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self { tier }
    }

    /// Returns the current tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Raises the session tier to `to` when it outranks the current tier.
    ///
    /// Requests at or below the current tier leave the session untouched
    /// and report [`UpgradeOutcome::AlreadySufficient`]. Downgrades do not
    /// exist in this surface.
    pub fn upgrade(&mut self, to: Tier) -> UpgradeOutcome {
        if to.rank() > self.tier.rank() {
            let from = self.tier;
            self.tier = to;
            UpgradeOutcome::Upgraded { from, to }
        } else {
            UpgradeOutcome::AlreadySufficient { current: self.tier }
        }
    }
}

impl Default for TierSession {
    fn default() -> Self {
        Self::new(Tier::Freemium)
    }
}

// ============================================================================
// SECTION: Upgrade Outcome
// ============================================================================

/// Result of a session upgrade request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeOutcome {
    /// The tier was raised.
    Upgraded {
        /// Tier before the upgrade.
        from: Tier,
        /// Tier after the upgrade.
        to: Tier,
    },
    /// The session already meets or exceeds the requested tier.
    AlreadySufficient {
        /// Tier at the time of the request.
        current: Tier,
    },
}
