//! CLI argument parsing and forge platform configuration.
use clap::Parser;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{
    config::{Config, DEFAULT_CONFIG_FILE},
    error::Result,
    forge::config::RemoteConfig,
    platform::Platform,
    policy::MaturityPolicy,
    validation::{Sha256Validator, Validator},
};

/// Environment variable consulted when no token is given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Detect the newest release asset of a GitHub repository for this
/// platform.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Repository slug in `owner/name` form.
    pub slug: String,

    #[arg(long = "tag")]
    /// Exact release tag to detect (e.g. v1.2.3) instead of the latest.
    pub tag: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Also consider releases flagged as pre-release.
    pub prerelease: bool,

    #[arg(long, default_value_t = false)]
    /// Require a `<asset>.sha256` validation file next to the asset.
    pub validate: bool,

    #[arg(long)]
    /// Operating system to match instead of the running one.
    pub os: Option<String>,

    #[arg(long)]
    /// Architecture to match instead of the running one.
    pub arch: Option<String>,

    #[arg(long)]
    /// Forge host, for GitHub Enterprise instances.
    pub host: Option<String>,

    #[arg(long)]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    /// Path to the configuration file.
    pub config: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Print the detected release as JSON.
    pub json: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configuration file values with command line overrides applied.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;

        if self.prerelease {
            config.prerelease = true;
        }
        if self.validate {
            config.validation_suffix = Some(Sha256Validator::SUFFIX.into());
        }
        if let Some(os) = &self.os {
            config.os = Some(os.clone());
        }
        if let Some(arch) = &self.arch {
            config.arch = Some(arch.clone());
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }

        Ok(config)
    }
}

/// Everything the detector needs, derived from a resolved [`Config`].
pub struct DetectSettings {
    pub remote: RemoteConfig,
    pub platform: Platform,
    pub policy: MaturityPolicy,
    pub validator: Option<Box<dyn Validator>>,
}

impl DetectSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()))
            .map(SecretString::from);

        let current = Platform::current();
        let platform = Platform::new(
            config.os.clone().unwrap_or(current.os),
            config.arch.clone().unwrap_or(current.arch),
        );

        Ok(Self {
            remote: RemoteConfig {
                host: config.host.clone(),
                scheme: config.scheme.clone(),
                token,
                page_size: config.page_size,
            },
            platform,
            policy: config.policy(),
            validator: config.validator()?,
        })
    }
}
