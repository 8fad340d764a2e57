//! Common test helper functions shared across test modules.
//!
//! This module provides reusable builders for release and asset fixtures,
//! reducing code duplication across different test suites.
use chrono::{TimeZone, Utc};

use crate::release::{Asset, Release};

/// Creates an asset with a deterministic id and download URL derived from
/// its name.
///
/// # Example
/// ```ignore
/// let asset = create_test_asset(1, "tool_linux_amd64.tar.gz");
/// ```
pub fn create_test_asset(id: u64, name: &str) -> Asset {
    Asset {
        id,
        name: name.to_string(),
        size: 1024 * id,
        browser_download_url: format!(
            "https://github.com/owner/repo/releases/download/{name}"
        ),
    }
}

/// Creates a stable (non-draft, non-prerelease) release with the given tag
/// and asset names. Asset ids are numbered from 1 in the order given.
///
/// # Arguments
/// * `tag` - Tag name of the release
/// * `assets` - File names of the attached assets
pub fn create_test_release(tag: &str, assets: &[&str]) -> Release {
    Release {
        tag_name: tag.to_string(),
        name: format!("Release {tag}"),
        body: format!("Notes for {tag}"),
        draft: false,
        prerelease: false,
        published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single(),
        assets: assets
            .iter()
            .enumerate()
            .map(|(i, name)| create_test_asset(i as u64 + 1, name))
            .collect(),
        url: format!("https://api.github.com/repos/owner/repo/releases/{tag}"),
        html_url: format!("https://github.com/owner/repo/releases/tag/{tag}"),
    }
}

/// Same as [`create_test_release`] but flagged as a pre-release.
pub fn create_test_prerelease(tag: &str, assets: &[&str]) -> Release {
    Release {
        prerelease: true,
        ..create_test_release(tag, assets)
    }
}

/// Same as [`create_test_release`] but flagged as a draft.
pub fn create_test_draft(tag: &str, assets: &[&str]) -> Release {
    Release {
        draft: true,
        ..create_test_release(tag, assets)
    }
}
