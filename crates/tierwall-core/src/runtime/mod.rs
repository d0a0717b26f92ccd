// crates/tierwall-core/src/runtime/mod.rs
// ============================================================================
// Module: Tierwall Runtime
// Description: Pure decision and filtering engines over the core types.
// Purpose: Derive access outcomes and visible collections on demand.
// Dependencies: crate::core, crate::notify, smallvec
// ============================================================================

//! ## Overview
//! Runtime modules implement access resolution and filtering as pure
//! derivations over in-memory inputs. Every host surface must call into
//! the same engine logic so decisions cannot drift between entry points.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod access;
pub mod filter;
pub mod streams;
pub mod text;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use access::AccessDecision;
pub use access::GuardDecision;
pub use access::TierGuard;
pub use access::TierPolicy;
pub use filter::CatalogPredicate;
pub use filter::PredicateSet;
pub use filter::apply_filters;
pub use filter::compile_predicates;
pub use filter::matches_criteria;
pub use streams::apply_stream_filters;
pub use streams::matches_stream;
