// crates/tierwall-core/src/core/criteria.rs
// ============================================================================
// Module: Tierwall Filter Criteria
// Description: Declarative filter inputs for catalog and stream surfaces.
// Purpose: Provide identity-defaulted criteria records for the engines.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Criteria records describe what a surface is currently narrowing on.
//! Defaults impose no restriction: the engines treat a default record as
//! the identity and return inputs unchanged. Each field activates
//! independently and active criteria compose by conjunction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::listing::CategoryId;
use crate::core::listing::Rating;

// ============================================================================
// SECTION: Catalog Criteria
// ============================================================================

/// Catalog filter criteria.
///
/// # Invariants
/// - Default values are the filter identity: no predicate activates.
/// - An empty `categories` set means "no category restriction", never
///   "match nothing".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Free-text query; empty or whitespace-only is inactive.
    pub query: String,
    /// Inclusive minimum star rating; zero is inactive.
    pub min_rating: Rating,
    /// Keep premium listings only when true.
    pub premium_only: bool,
    /// Category slugs to keep; empty keeps every category.
    pub categories: BTreeSet<CategoryId>,
}

impl FilterCriteria {
    /// Returns true when no criterion is active.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty()
            && self.min_rating == Rating::MIN
            && !self.premium_only
            && self.categories.is_empty()
    }

    /// Returns a copy with the query replaced.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns a copy with the minimum rating replaced.
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: Rating) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Returns a copy with the premium restriction replaced.
    #[must_use]
    pub const fn with_premium_only(mut self, premium_only: bool) -> Self {
        self.premium_only = premium_only;
        self
    }

    /// Returns a copy with `category` added to the category set.
    #[must_use]
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.categories.insert(category);
        self
    }

    /// Returns a copy with the category set extended by `categories`.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories.extend(categories);
        self
    }
}

// ============================================================================
// SECTION: Stream Criteria
// ============================================================================

/// Stream tab selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTab {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Category(CategoryId),
}

impl CategoryTab {
    /// Returns true when `category` falls inside this tab.
    #[must_use]
    pub fn includes(&self, category: &CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

/// Stream filter criteria.
///
/// # Invariants
/// - Default values are the filter identity: the [`CategoryTab::All`] tab
///   and an empty query keep every entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamCriteria {
    /// Active category tab.
    pub tab: CategoryTab,
    /// Free-text query; empty or whitespace-only is inactive.
    pub query: String,
}

impl StreamCriteria {
    /// Returns true when no criterion is active.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.tab == CategoryTab::All && self.query.trim().is_empty()
    }

    /// Returns a copy with the tab replaced.
    #[must_use]
    pub fn with_tab(mut self, tab: CategoryTab) -> Self {
        self.tab = tab;
        self
    }

    /// Returns a copy with the query replaced.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}
