// crates/tierwall-core/src/core/profile.rs
// ============================================================================
// Module: Tierwall Tier Profiles
// Description: Quota and capability bundles attached to each tier.
// Purpose: Provide the resolved entitlement table for plan surfaces.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`TierProfile`] describes what a plan includes: team and project
//! quotas, API call allowances, tool access counts, support latency, and
//! capability toggles. [`TierProfiles`] holds one resolved profile per
//! tier; numeric quotas never decrease with rank.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::tier::Tier;

// ============================================================================
// SECTION: Profile Types
// ============================================================================

/// Quota and capability bundle for one subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProfile {
    /// Maximum number of team members.
    pub max_team_members: u32,
    /// Maximum number of projects.
    pub max_projects: u32,
    /// Monthly API call allowance.
    pub api_calls_limit: u32,
    /// Number of catalog tools unlocked.
    pub tool_access: u32,
    /// Support response commitment shown on plan pages.
    pub support_response: String,
    /// Storage allowance shown on plan pages.
    pub storage: String,
    /// Whether usage analytics are included.
    pub analytics: bool,
    /// Whether team collaboration is included.
    pub collaboration: bool,
    /// Whether workflow automation is included.
    pub workflow_automation: bool,
    /// Whether advanced security controls are included.
    pub advanced_security: bool,
}

/// One resolved profile per tier.
///
/// # Invariants
/// - Numeric quotas are non-decreasing with rank for validated tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProfiles {
    /// Profile for [`Tier::Freemium`].
    pub freemium: TierProfile,
    /// Profile for [`Tier::Basic`].
    pub basic: TierProfile,
    /// Profile for [`Tier::Pro`].
    pub pro: TierProfile,
}

impl TierProfiles {
    /// Returns the shipped default entitlement table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            freemium: TierProfile {
                max_team_members: 1,
                max_projects: 3,
                api_calls_limit: 100,
                tool_access: 10,
                support_response: "Community support".to_string(),
                storage: "500MB".to_string(),
                analytics: false,
                collaboration: false,
                workflow_automation: false,
                advanced_security: false,
            },
            basic: TierProfile {
                max_team_members: 10,
                max_projects: 20,
                api_calls_limit: 5_000,
                tool_access: 100,
                support_response: "24-48 hours".to_string(),
                storage: "10GB".to_string(),
                analytics: true,
                collaboration: true,
                workflow_automation: true,
                advanced_security: true,
            },
            pro: TierProfile {
                max_team_members: 50,
                max_projects: 100,
                api_calls_limit: 50_000,
                tool_access: 250,
                support_response: "4-8 hours".to_string(),
                storage: "100GB".to_string(),
                analytics: true,
                collaboration: true,
                workflow_automation: true,
                advanced_security: true,
            },
        }
    }

    /// Returns the profile for `tier`.
    #[must_use]
    pub const fn profile(&self, tier: Tier) -> &TierProfile {
        match tier {
            Tier::Freemium => &self.freemium,
            Tier::Basic => &self.basic,
            Tier::Pro => &self.pro,
        }
    }
}

impl Default for TierProfiles {
    fn default() -> Self {
        Self::builtin()
    }
}
