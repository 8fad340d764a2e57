//! Forge-agnostic release records consumed by selection.
use chrono::{DateTime, Utc};

/// Downloadable file attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Asset {
    /// Unique asset identifier assigned by the forge.
    pub id: u64,
    /// File name, matched against platform suffixes.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// URL a browser can download the file from.
    pub browser_download_url: String,
}

/// Published release of a repository, as listed by the forge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    /// Git tag the release points at.
    pub tag_name: String,
    /// Display name.
    pub name: String,
    /// Release notes.
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub assets: Vec<Asset>,
    /// API URL of the release resource.
    pub url: String,
    /// Release page URL.
    pub html_url: String,
}
