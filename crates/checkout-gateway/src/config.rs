//! # Gateway Configuration
//!
//! Where the coupon-lookup service lives and how long to wait for it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_COUPON_URL=http://coupons.internal:3000                   │
//! │     CHECKOUT_COUPON_TIMEOUT_SECS=2                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/checkout/coupon-gateway.toml (Linux)                     │
//! │     ~/Library/Application Support/com.checkout.checkout/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, 5 second timeout                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # coupon-gateway.toml
//! base_url = "http://localhost:3000"
//! timeout_secs = 5
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GatewayError, GatewayResult};

/// Environment variable overriding [`GatewayConfig::base_url`].
pub const ENV_BASE_URL: &str = "CHECKOUT_COUPON_URL";

/// Environment variable overriding [`GatewayConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "CHECKOUT_COUPON_TIMEOUT_SECS";

const CONFIG_FILE_NAME: &str = "coupon-gateway.toml";

/// Settings for the HTTP coupon gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the coupon-lookup service. Codes are appended as
    /// `{base_url}/{code}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout (seconds). A timeout counts as a failed lookup.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    5
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GatewayConfig {
    /// Creates a config pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        GatewayConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the request timeout (builder style).
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or the platform config directory)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> GatewayResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading coupon gateway config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load coupon gateway config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML config file without applying overrides.
    pub fn from_file(path: &Path) -> GatewayResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> GatewayResult<()> {
        let url = url::Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(GatewayError::InvalidUrl(format!(
                "Coupon service URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(GatewayError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_BASE_URL) {
            debug!(url = %url, "Overriding coupon service URL from environment");
            self.base_url = url;
        }

        if let Some(timeout) = var(ENV_TIMEOUT_SECS) {
            match timeout.parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric {}", ENV_TIMEOUT_SECS),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
