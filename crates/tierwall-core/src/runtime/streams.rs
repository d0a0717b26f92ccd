// crates/tierwall-core/src/runtime/streams.rs
// ============================================================================
// Module: Tierwall Stream Filter Engine
// Description: Tab and query filtering for live stream entries.
// Purpose: Derive the visible stream list from criteria without hidden state.
// Dependencies: crate::core, crate::runtime::text
// ============================================================================

//! ## Overview
//! The stream engine narrows entries by the active category tab and the
//! free-text query, composed by conjunction. Queries additionally match
//! the nested author display name when attribution is present; a missing
//! author simply contributes no haystack. Same purity contract as the
//! catalog engine: recompute per input change, no interior state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::criteria::CategoryTab;
use crate::core::criteria::StreamCriteria;
use crate::core::stream::StreamEntry;
use crate::runtime::text;

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Returns true when `entry` passes the precompiled tab and needle.
fn accepts(entry: &StreamEntry, tab: &CategoryTab, needle: &str) -> bool {
    if !tab.includes(&entry.category) {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    text::fold(&entry.title).contains(needle)
        || text::fold(&entry.description).contains(needle)
        || entry
            .author
            .as_ref()
            .is_some_and(|author| text::fold(&author.username).contains(needle))
}

/// Returns true when `entry` passes every active criterion.
#[must_use]
pub fn matches_stream(entry: &StreamEntry, criteria: &StreamCriteria) -> bool {
    let needle = text::fold(criteria.query.trim());
    accepts(entry, &criteria.tab, &needle)
}

/// Applies `criteria` to `entries`, preserving input order.
#[must_use]
pub fn apply_stream_filters<'a, I>(entries: I, criteria: &StreamCriteria) -> Vec<&'a StreamEntry>
where
    I: IntoIterator<Item = &'a StreamEntry>,
{
    let needle = text::fold(criteria.query.trim());
    entries
        .into_iter()
        .filter(|entry| accepts(entry, &criteria.tab, &needle))
        .collect()
}
