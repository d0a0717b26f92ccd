// tierwall-config/src/lib.rs
// ============================================================================
// Module: Tierwall Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for tierwall.toml semantics.
// Dependencies: tierwall-core, serde, toml
// ============================================================================

//! ## Overview
//! `tierwall-config` defines the canonical configuration model for
//! Tierwall deployments. It provides strict, fail-closed validation and a
//! deterministic example generator. Config inputs are untrusted; limits
//! are enforced before parsing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
