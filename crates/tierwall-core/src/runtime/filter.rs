// crates/tierwall-core/src/runtime/filter.rs
// ============================================================================
// Module: Tierwall Catalog Filter Engine
// Description: Predicate compilation and pure filtering for catalog items.
// Purpose: Derive the visible catalog from criteria without hidden state.
// Dependencies: smallvec
// ============================================================================

//! ## Overview
//! The catalog engine compiles [`FilterCriteria`] into the predicates that
//! are actually active, then keeps the items accepted by every one of
//! them. Inactive criteria compile to nothing, so default criteria return
//! inputs unchanged. Filtering is a pure derivation: no caches, no
//! interior state, safe to recompute on every input change.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::core::criteria::FilterCriteria;
use crate::core::listing::CatalogItem;
use crate::core::listing::CategoryId;
use crate::core::listing::Rating;
use crate::runtime::text;

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Compiled predicate list; at most one entry per criterion.
pub type PredicateSet = SmallVec<[CatalogPredicate; 4]>;

/// One active catalog criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPredicate {
    /// Case-folded substring match across name, description, and category.
    Text {
        /// Pre-folded needle.
        needle: String,
    },
    /// Inclusive minimum rating.
    MinRating(Rating),
    /// Keep premium listings only.
    PremiumOnly,
    /// Keep listings whose category is in the set.
    Categories(BTreeSet<CategoryId>),
}

impl CatalogPredicate {
    /// Returns true when `item` passes this predicate.
    #[must_use]
    pub fn accepts(&self, item: &CatalogItem) -> bool {
        match self {
            Self::Text { needle } => {
                text::fold(&item.name).contains(needle)
                    || text::fold(&item.description).contains(needle)
                    || text::fold(item.category.as_str()).contains(needle)
            }
            Self::MinRating(min) => item.rating >= *min,
            Self::PremiumOnly => item.premium,
            Self::Categories(selected) => selected.contains(&item.category),
        }
    }
}

/// Compiles the active criteria into predicates.
///
/// Inactive criteria compile to nothing: an empty or whitespace-only query,
/// a zero minimum rating, `premium_only = false`, and an empty category set
/// each impose no restriction.
#[must_use]
pub fn compile_predicates(criteria: &FilterCriteria) -> PredicateSet {
    let mut predicates = PredicateSet::new();
    let needle = text::fold(criteria.query.trim());
    if !needle.is_empty() {
        predicates.push(CatalogPredicate::Text { needle });
    }
    if criteria.min_rating > Rating::MIN {
        predicates.push(CatalogPredicate::MinRating(criteria.min_rating));
    }
    if criteria.premium_only {
        predicates.push(CatalogPredicate::PremiumOnly);
    }
    if !criteria.categories.is_empty() {
        predicates.push(CatalogPredicate::Categories(criteria.categories.clone()));
    }
    predicates
}

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Returns true when `item` passes every active criterion.
#[must_use]
pub fn matches_criteria(item: &CatalogItem, criteria: &FilterCriteria) -> bool {
    compile_predicates(criteria).iter().all(|predicate| predicate.accepts(item))
}

/// Applies `criteria` to `items`, preserving input order.
#[must_use]
pub fn apply_filters<'a, I>(items: I, criteria: &FilterCriteria) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let predicates = compile_predicates(criteria);
    items
        .into_iter()
        .filter(|item| predicates.iter().all(|predicate| predicate.accepts(item)))
        .collect()
}
