// tierwall-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for tierwall-config.
// ============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use tierwall_config::TierwallConfig;
use tierwall_config::config_toml_example;

/// Parses a TOML string into a `TierwallConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<TierwallConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<TierwallConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns the shipped example config, parsed.
pub fn example_config() -> Result<TierwallConfig, toml::de::Error> {
    config_from_toml(&config_toml_example())
}
