//! Configuration loading and parsing for `relscout.toml` files.
//!
//! Every field is optional; command line flags take precedence over values
//! read from the file.
use serde::Deserialize;
use std::path::Path;

use crate::{
    error::{DetectError, Result},
    forge::config::{DEFAULT_HOST, DEFAULT_PAGE_SIZE, DEFAULT_SCHEME},
    policy::MaturityPolicy,
    validation::{Sha256Validator, Validator},
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "relscout.toml";

/// Root configuration structure for `relscout.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Forge host (e.g. "github.com" or a GitHub Enterprise host).
    pub host: String,
    /// URL scheme used for API requests.
    pub scheme: String,
    /// Access token for the forge API.
    pub token: Option<String>,
    /// Also consider releases flagged as pre-release.
    pub prerelease: bool,
    /// Suffix of the validation file expected next to each asset.
    pub validation_suffix: Option<String>,
    /// Operating system override (e.g. "linux", "darwin", "windows").
    pub os: Option<String>,
    /// Architecture override (e.g. "amd64", "arm64").
    pub arch: Option<String>,
    /// Number of releases requested per API page.
    pub page_size: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            scheme: DEFAULT_SCHEME.into(),
            token: None,
            prerelease: false,
            validation_suffix: None,
            os: None,
            arch: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from `path`.
    ///
    /// Only the default `relscout.toml` may be absent, in which case the
    /// defaults apply. Any other path has to exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path == Path::new(DEFAULT_CONFIG_FILE) && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Maturity policy implied by the `prerelease` setting.
    pub fn policy(&self) -> MaturityPolicy {
        if self.prerelease {
            MaturityPolicy::RELEASE | MaturityPolicy::PRERELEASE
        } else {
            MaturityPolicy::RELEASE
        }
    }

    /// Validator matching `validation_suffix`, if one is configured.
    pub fn validator(&self) -> Result<Option<Box<dyn Validator>>> {
        match self.validation_suffix.as_deref() {
            None => Ok(None),
            Some(Sha256Validator::SUFFIX) => {
                Ok(Some(Box::new(Sha256Validator)))
            }
            Some(other) => Err(DetectError::invalid_config(format!(
                "unsupported validation suffix: {other}"
            ))),
        }
    }

    fn check(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DetectError::invalid_config(
                "page_size must be greater than zero",
            ));
        }

        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(DetectError::invalid_config(format!(
                "only http and https schemes are supported: {}",
                self.scheme
            )));
        }

        self.validator().map(|_| ())
    }
}
