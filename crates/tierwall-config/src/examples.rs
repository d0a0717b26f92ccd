// tierwall-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Tierwall configuration. Outputs are
//! deterministic and kept in sync with the config model; the example must
//! always parse and validate.

/// Returns a canonical example `tierwall.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[session]
initial_tier = "freemium"
# initial_tier = "basic"

[features]
strict = false

[features.required]
ai-studio = "pro"
workflow-templates = "basic"
automation = "pro"
analytics = "basic"
custom-models = "pro"
team-dashboard = "basic"

[tiers.basic]
max_team_members = 10
max_projects = 20
api_calls_limit = 5000
tool_access = 100
support_response = "24-48 hours"
storage = "10GB"
analytics = true
collaboration = true
workflow_automation = true
advanced_security = true
"#,
    )
}
