// crates/tierwall-core/src/core/tier.rs
// ============================================================================
// Module: Tierwall Tier Model
// Description: Ordered subscription tiers and the ordinal rank table.
// Purpose: Provide the single comparison basis for every access decision.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Subscription tiers form a total order: freemium < basic < pro. Every
//! access decision in Tierwall reduces to a rank comparison on this enum.
//! Tier names are display and wire concerns only; name equality never
//! decides access.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Tier
// ============================================================================

/// Subscription tier, declared in ascending rank order.
///
/// # Invariants
/// - Declaration order equals rank order; derived `Ord` and [`Tier::rank`]
///   agree.
/// - Comparisons use ordinal rank, never name equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Free tier held by every account that has not purchased a plan.
    #[default]
    Freemium,
    /// Entry-level paid tier.
    Basic,
    /// Highest paid tier.
    Pro,
}

impl Tier {
    /// All tiers in ascending rank order.
    pub const ALL: [Self; 3] = [Self::Freemium, Self::Basic, Self::Pro];

    /// Returns the ordinal rank backing every access comparison.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Freemium => 0,
            Self::Basic => 1,
            Self::Pro => 2,
        }
    }

    /// Returns true when this tier meets or exceeds `required`.
    #[must_use]
    pub const fn satisfies(self, required: Self) -> bool {
        self.rank() >= required.rank()
    }

    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Freemium => "freemium",
            Self::Basic => "basic",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freemium" => Ok(Self::Freemium),
            "basic" => Ok(Self::Basic),
            "pro" => Ok(Self::Pro),
            other => Err(TierParseError::UnknownTier {
                name: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error returned when a tier name does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierParseError {
    /// The supplied name matches no known tier.
    #[error("unknown tier name: {name}")]
    UnknownTier {
        /// Rejected input.
        name: String,
    },
}
