//! Errors surfaced by release detection: malformed slugs, upstream fetch
//! failures, missing validation files and configuration problems.

use thiserror::Error;

/// Main error type for release detection.
///
/// Per-release problems (unparseable tags, missing platform assets, maturity
/// policy rejections) never show up here: they only exclude the release from
/// selection. A release that cannot be found at all is reported as `Ok(None)`
/// by the detector rather than as an error.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Invalid slug format. It should be 'owner/name': {0}")]
    InvalidSlug(String),

    // Forge/API errors
    #[error("Failed to fetch releases: {0}")]
    UpstreamFetch(String),

    // Validation errors
    #[error("Failed finding validation file {name:?}")]
    ValidationAssetMissing { name: String },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DetectError
pub type Result<T> = std::result::Result<T, DetectError>;

impl DetectError {
    /// Create an upstream fetch error with context
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamFetch(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a missing validation asset error
    pub fn validation_asset_missing(name: impl Into<String>) -> Self {
        Self::ValidationAssetMissing { name: name.into() }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for DetectError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::UpstreamFetch(format!(
                    "GitHub API rate limit exceeded ({}): {}",
                    source.status_code, source.message
                ))
            }
            octocrab::Error::GitHub { source, .. } => {
                Self::UpstreamFetch(format!(
                    "GitHub API returned {}: {}",
                    source.status_code, source.message
                ))
            }
            // transport and decoding failures
            _ => Self::UpstreamFetch(format!("GitHub API error: {}", err)),
        }
    }
}
