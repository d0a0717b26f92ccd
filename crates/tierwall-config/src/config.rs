// tierwall-config/src/config.rs
// ============================================================================
// Module: Tierwall Configuration
// Description: Configuration loading and validation for Tierwall.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: tierwall-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path
//! limits. Loading never partially applies: the result is either a fully
//! validated [`TierwallConfig`] or an error. The feature table converts
//! into a core [`FeatureCatalog`]; the runtime freemium fallback for
//! unmapped keys is unaffected by `features.strict`, which only asks
//! hosts to fail startup when a declared key has no entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tierwall_core::FeatureCatalog;
use tierwall_core::FeatureKey;
use tierwall_core::Tier;
use tierwall_core::TierProfile;
use tierwall_core::TierProfiles;
use tierwall_core::TierSession;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "tierwall.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "TIERWALL_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of feature requirement entries.
pub(crate) const MAX_FEATURE_RULES: usize = 1024;
/// Maximum length of a feature key.
pub(crate) const MAX_FEATURE_KEY_LENGTH: usize = 128;
/// Maximum length of a profile display string.
pub(crate) const MAX_PROFILE_TEXT_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Tierwall deployment configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TierwallConfig {
    /// Session bootstrap configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Feature requirement configuration.
    #[serde(default)]
    pub features: FeaturesConfig,
    /// Tier profile overrides.
    #[serde(default)]
    pub tiers: TiersConfig,
}

impl TierwallConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.features.validate()?;
        self.tiers.validate()?;
        Ok(())
    }

    /// Converts the feature table into a core requirement catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an entry is rejected by the core
    /// catalog constructor.
    pub fn feature_catalog(&self) -> Result<FeatureCatalog, ConfigError> {
        let entries = self
            .features
            .required
            .iter()
            .map(|(key, tier)| (FeatureKey::new(key.clone()), *tier));
        FeatureCatalog::from_entries(entries).map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    /// Returns the resolved entitlement table with overrides applied.
    #[must_use]
    pub fn tier_profiles(&self) -> TierProfiles {
        self.tiers.resolved()
    }

    /// Returns the session bootstrap state.
    #[must_use]
    pub const fn initial_session(&self) -> TierSession {
        TierSession::new(self.session.initial_tier)
    }
}

/// Session bootstrap configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Tier assigned to new sessions.
    #[serde(default)]
    pub initial_tier: Tier,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_tier: Tier::Freemium,
        }
    }
}

/// Feature requirement configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesConfig {
    /// Ask hosts to fail startup when a declared key has no entry.
    ///
    /// Strictness never changes runtime lookup: unmapped keys still
    /// resolve to the freemium tier.
    #[serde(default)]
    pub strict: bool,
    /// Minimum tier required per feature key.
    #[serde(default = "default_feature_requirements")]
    pub required: BTreeMap<String, Tier>,
}

impl FeaturesConfig {
    /// Validates feature requirement configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.required.len() > MAX_FEATURE_RULES {
            return Err(ConfigError::Invalid(
                "features.required exceeds entry limit".to_string(),
            ));
        }
        for key in self.required.keys() {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "features.required keys must not be empty".to_string(),
                ));
            }
            if key.len() > MAX_FEATURE_KEY_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "features.required key too long: {key}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            strict: false,
            required: default_feature_requirements(),
        }
    }
}

/// Tier profile override configuration.
///
/// Overrides replace a whole profile; a missing section falls back to the
/// builtin table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TiersConfig {
    /// Override for the freemium profile.
    #[serde(default)]
    pub freemium: Option<TierProfile>,
    /// Override for the basic profile.
    #[serde(default)]
    pub basic: Option<TierProfile>,
    /// Override for the pro profile.
    #[serde(default)]
    pub pro: Option<TierProfile>,
}

impl TiersConfig {
    /// Returns the resolved table with overrides applied over the builtin.
    fn resolved(&self) -> TierProfiles {
        let builtin = TierProfiles::builtin();
        TierProfiles {
            freemium: self.freemium.clone().unwrap_or(builtin.freemium),
            basic: self.basic.clone().unwrap_or(builtin.basic),
            pro: self.pro.clone().unwrap_or(builtin.pro),
        }
    }

    /// Validates profile text fields and resolved quota monotonicity.
    fn validate(&self) -> Result<(), ConfigError> {
        let resolved = self.resolved();
        for tier in Tier::ALL {
            validate_profile_text(tier, resolved.profile(tier))?;
        }
        ensure_monotonic_quotas(&resolved)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the builtin requirement entries as config rows.
fn default_feature_requirements() -> BTreeMap<String, Tier> {
    FeatureCatalog::builtin()
        .entries()
        .map(|(key, tier)| (key.as_str().to_string(), tier))
        .collect()
}

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates display strings on one resolved profile.
fn validate_profile_text(tier: Tier, profile: &TierProfile) -> Result<(), ConfigError> {
    validate_text_field(tier, "support_response", &profile.support_response)?;
    validate_text_field(tier, "storage", &profile.storage)?;
    Ok(())
}

/// Validates one profile display string.
fn validate_text_field(tier: Tier, field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!(
            "tiers.{tier}.{field} must not be empty"
        )));
    }
    if value.len() > MAX_PROFILE_TEXT_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "tiers.{tier}.{field} exceeds length limit"
        )));
    }
    Ok(())
}

/// Rejects numeric quotas that decrease with rank.
fn ensure_monotonic_quotas(profiles: &TierProfiles) -> Result<(), ConfigError> {
    for pair in Tier::ALL.windows(2) {
        let &[lower_tier, upper_tier] = pair else {
            continue;
        };
        let lower = profiles.profile(lower_tier);
        let upper = profiles.profile(upper_tier);
        ensure_quota(
            "max_team_members",
            lower_tier,
            lower.max_team_members,
            upper_tier,
            upper.max_team_members,
        )?;
        ensure_quota(
            "max_projects",
            lower_tier,
            lower.max_projects,
            upper_tier,
            upper.max_projects,
        )?;
        ensure_quota(
            "api_calls_limit",
            lower_tier,
            lower.api_calls_limit,
            upper_tier,
            upper.api_calls_limit,
        )?;
        ensure_quota(
            "tool_access",
            lower_tier,
            lower.tool_access,
            upper_tier,
            upper.tool_access,
        )?;
    }
    Ok(())
}

/// Rejects one decreasing quota pair.
fn ensure_quota(
    field: &str,
    lower_tier: Tier,
    lower: u32,
    upper_tier: Tier,
    upper: u32,
) -> Result<(), ConfigError> {
    if upper < lower {
        return Err(ConfigError::Invalid(format!(
            "tiers.{upper_tier}.{field} must be >= tiers.{lower_tier}.{field}"
        )));
    }
    Ok(())
}
