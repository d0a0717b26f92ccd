// crates/tierwall-core/src/runtime/text.rs
// ============================================================================
// Module: Tierwall Text Matching
// Description: Case-folded substring matching shared by the filter engines.
// Purpose: Keep both engines on one normalization rule.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Free-text queries match case-insensitively: both sides are case-folded
//! before substring comparison. Hosts that highlight matches should fold
//! with the same helpers so highlighting agrees with filtering.

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Case-folds `text` for comparison.
#[must_use]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true when `haystack` contains `needle` after folding both sides.
#[must_use]
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}
