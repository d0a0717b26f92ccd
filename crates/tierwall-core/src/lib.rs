// tierwall-core/src/lib.rs
// ============================================================================
// Module: Tierwall Core Library
// Description: Public API surface for the Tierwall core.
// Purpose: Expose core types, notice seams, and runtime engines.
// Dependencies: crate::{core, notify, runtime}
// ============================================================================

//! ## Overview
//! Tierwall core provides deterministic tier-access decisions and catalog
//! filtering for subscription-gated product surfaces. It is UI-agnostic
//! and integrates through explicit seams (sessions, requirement tables,
//! notice sinks) rather than embedding into host frameworks.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod notify;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use notify::CallbackSink;
pub use notify::ChannelSink;
pub use notify::NoticeSink;
pub use notify::NullSink;
pub use notify::UpgradeNotice;
pub use notify::request_upgrade;
pub use runtime::AccessDecision;
pub use runtime::CatalogPredicate;
pub use runtime::GuardDecision;
pub use runtime::PredicateSet;
pub use runtime::TierGuard;
pub use runtime::TierPolicy;
pub use runtime::apply_filters;
pub use runtime::apply_stream_filters;
pub use runtime::compile_predicates;
pub use runtime::matches_criteria;
pub use runtime::matches_stream;
