//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.claimcheck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Profile;
use crate::core::profile::ClaimProfile;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClaimCheckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileOverrides,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub profile: Option<Profile>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Field-by-field overrides applied on top of the selected profile preset.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileOverrides {
    pub endpoint_path: Option<String>,
    pub result_field: Option<String>,
    pub trim_claim: Option<bool>,
    pub echo_reveal: Option<bool>,
    pub reveal_interval_ms: Option<u64>,
    pub fallback_result: Option<String>,
    pub error_message: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub profile: Option<Profile>,
    pub base_url: Option<String>,
    pub echo_reveal: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const ENV_BASE_URL: &str = "CLAIMCHECK_BASE_URL";
pub const ENV_PROFILE: &str = "CLAIMCHECK_PROFILE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub profile: Profile,
    pub base_url: String,
    /// `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
    pub claim_profile: ClaimProfile,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.claimcheck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".claimcheck").join("config.toml"))
}

/// Load config from `~/.claimcheck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ClaimCheckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ClaimCheckConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(ClaimCheckConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ClaimCheckConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ClaimCheckConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ClaimCheckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# claimcheck configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# profile = "process-claim"          # "process-claim" or "subclaims"
# base_url = "http://127.0.0.1:8000" # Or set CLAIMCHECK_BASE_URL
# request_timeout_secs = 30          # Omit to wait indefinitely

# [profile]                          # Overrides on top of the chosen profile
# endpoint_path = "/process-claim"
# result_field = "final_result"
# trim_claim = true
# echo_reveal = false
# reveal_interval_ms = 100
# fallback_result = "No result returned"
# error_message = "There was an error processing your request."
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ClaimCheckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &ClaimCheckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Profile: CLI → env → config → default
    let profile = cli
        .profile
        .or_else(|| env(ENV_PROFILE).and_then(|raw| parse_profile(&raw)))
        .or(config.general.profile)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.general.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut claim_profile = ClaimProfile::preset(profile);
    apply_overrides(&mut claim_profile, &config.profile);
    if let Some(echo) = cli.echo_reveal {
        claim_profile.echo_reveal = echo;
    }

    ResolvedConfig {
        profile,
        base_url,
        request_timeout: config.general.request_timeout_secs.map(Duration::from_secs),
        claim_profile,
    }
}

fn apply_overrides(profile: &mut ClaimProfile, overrides: &ProfileOverrides) {
    if let Some(ref path) = overrides.endpoint_path {
        profile.endpoint_path = path.clone();
    }
    if let Some(ref field) = overrides.result_field {
        profile.result_field = field.clone();
    }
    if let Some(trim) = overrides.trim_claim {
        profile.trim_claim = trim;
    }
    if let Some(echo) = overrides.echo_reveal {
        profile.echo_reveal = echo;
    }
    if let Some(ms) = overrides.reveal_interval_ms {
        profile.reveal_interval = Duration::from_millis(ms);
    }
    if let Some(ref fallback) = overrides.fallback_result {
        profile.fallback_result = fallback.clone();
    }
    if let Some(ref message) = overrides.error_message {
        profile.error_message = Some(message.clone());
    }
}

fn parse_profile(raw: &str) -> Option<Profile> {
    use clap::ValueEnum;
    match Profile::from_str(raw.trim(), true) {
        Ok(profile) => Some(profile),
        Err(_) => {
            warn!("Ignoring unknown {} value: {}", ENV_PROFILE, raw);
            None
        }
    }
}
