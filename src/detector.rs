//! Release detection for a repository slug.
//!
//! [`Detector`] ties together a [`ReleaseSource`], the platform suffixes,
//! release selection and (optionally) a [`Validator`]:
//!
//! 1. Validate the `owner/name` slug
//! 2. List releases from the source (a 404 means "not found", not an error)
//! 3. Select the newest eligible release and asset for the platform
//! 4. Resolve the companion validation asset when a validator is configured
use chrono::{DateTime, Utc};
use log::*;
use semver::Version;
use serde::{Serialize, ser::SerializeStruct};

use crate::{
    error::Result,
    forge::{config::RemoteConfig, github::Github, traits::ReleaseSource},
    platform::Platform,
    policy::MaturityPolicy,
    select::{self, Candidate},
    slug::Slug,
    validation::{self, Validator},
};

/// Release and asset chosen for the current platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedRelease {
    /// Version parsed from the release tag.
    pub version: Version,
    /// Download URL of the selected asset.
    pub asset_url: String,
    /// File name of the selected asset.
    pub asset_name: String,
    /// Size of the selected asset in bytes.
    pub asset_size: u64,
    /// Forge identifier of the selected asset.
    pub asset_id: u64,
    /// Forge identifier of the validation asset, `None` when no validator is
    /// configured.
    pub validation_asset_id: Option<u64>,
    /// Release page URL.
    pub url: String,
    /// Release notes.
    pub release_notes: String,
    /// Release display name.
    pub name: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Repository owner.
    pub repo_owner: String,
    /// Repository name.
    pub repo_name: String,
}

impl DetectedRelease {
    fn from_candidate(candidate: &Candidate<'_>, slug: &Slug) -> Self {
        let Candidate {
            release,
            asset,
            version,
        } = candidate;

        Self {
            version: version.clone(),
            asset_url: asset.browser_download_url.clone(),
            asset_name: asset.name.clone(),
            asset_size: asset.size,
            asset_id: asset.id,
            validation_asset_id: None,
            url: release.html_url.clone(),
            release_notes: release.body.clone(),
            name: release.name.clone(),
            published_at: release.published_at,
            repo_owner: slug.owner.clone(),
            repo_name: slug.name.clone(),
        }
    }
}

impl Serialize for DetectedRelease {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("DetectedRelease", 12)?;
        s.serialize_field("version", &self.version.to_string())?;
        s.serialize_field("asset_url", &self.asset_url)?;
        s.serialize_field("asset_name", &self.asset_name)?;
        s.serialize_field("asset_size", &self.asset_size)?;
        s.serialize_field("asset_id", &self.asset_id)?;
        s.serialize_field("validation_asset_id", &self.validation_asset_id)?;
        s.serialize_field("url", &self.url)?;
        s.serialize_field("release_notes", &self.release_notes)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field(
            "published_at",
            &self.published_at.map(|p| p.to_rfc3339()),
        )?;
        s.serialize_field("repo_owner", &self.repo_owner)?;
        s.serialize_field("repo_name", &self.repo_name)?;
        s.end()
    }
}

/// Detects the release and asset to use for a repository.
///
/// Holds no mutable state, so a single detector can serve concurrent calls.
pub struct Detector {
    source: Box<dyn ReleaseSource>,
    validator: Option<Box<dyn Validator>>,
    platform: Platform,
}

impl Detector {
    /// Detector for the running platform without validation.
    pub fn new(source: Box<dyn ReleaseSource>) -> Self {
        Self {
            source,
            validator: None,
            platform: Platform::current(),
        }
    }

    /// Detector backed by anonymous access to github.com.
    pub fn github() -> Result<Self> {
        Self::github_with(RemoteConfig::default())
    }

    /// Detector backed by GitHub (or a GitHub Enterprise host) using
    /// `config`.
    pub fn github_with(config: RemoteConfig) -> Result<Self> {
        Ok(Self::new(Box::new(Github::new(config)?)))
    }

    /// Require a validation asset for every detected release.
    pub fn with_validator(mut self, validator: Box<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Match assets for `platform` instead of the running one.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Latest stable release of `slug`.
    pub async fn detect_latest(
        &self,
        slug: &str,
    ) -> Result<Option<DetectedRelease>> {
        self.detect_version_of_type(slug, None, MaturityPolicy::RELEASE)
            .await
    }

    /// Release of `slug` tagged exactly `version`.
    pub async fn detect_version(
        &self,
        slug: &str,
        version: &str,
    ) -> Result<Option<DetectedRelease>> {
        self.detect_version_of_type(
            slug,
            Some(version),
            MaturityPolicy::RELEASE,
        )
        .await
    }

    /// Latest release of `slug` whose maturity is allowed by `policy`.
    pub async fn detect_latest_of_type(
        &self,
        slug: &str,
        policy: MaturityPolicy,
    ) -> Result<Option<DetectedRelease>> {
        self.detect_version_of_type(slug, None, policy).await
    }

    /// Detect the release of `slug` matching an optional exact tag and a
    /// maturity policy.
    ///
    /// Returns `Ok(None)` when the repository has no qualifying release for
    /// this platform. Errors are limited to a malformed slug, a failing
    /// release source, and a missing validation asset.
    pub async fn detect_version_of_type(
        &self,
        slug: &str,
        version: Option<&str>,
        policy: MaturityPolicy,
    ) -> Result<Option<DetectedRelease>> {
        let slug = Slug::parse(slug)?;

        let Some(releases) = self.source.list_releases(&slug).await? else {
            return Ok(None);
        };

        let suffixes = self.platform.suffixes();
        let selection =
            select::select_release(&releases, &suffixes, version, policy);

        for diagnostic in selection.diagnostics.iter() {
            debug!("Skip {}: {}", diagnostic.tag, diagnostic.reason);
        }

        let Some(candidate) = selection.best else {
            warn!(
                "Could not find any release for {} and {}",
                self.platform.os, self.platform.arch
            );
            return Ok(None);
        };

        let mut detected = DetectedRelease::from_candidate(&candidate, &slug);

        info!(
            "Successfully fetched the latest release. tag: {}, name: {}, URL: {}, Asset: {}",
            candidate.release.tag_name,
            candidate.release.name,
            candidate.release.url,
            detected.asset_url
        );

        if let Some(validator) = &self.validator {
            let validation_name = validation::validation_asset_name(
                &candidate.asset.name,
                validator.as_ref(),
            );
            let validation_asset = validation::find_validation_asset(
                candidate.release,
                &validation_name,
            )?;
            debug!("found validation asset: {}", validation_asset.name);
            detected.validation_asset_id = Some(validation_asset.id);
        }

        Ok(Some(detected))
    }
}

#[cfg(test)]
mod tests;
