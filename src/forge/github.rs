//! Implements the ReleaseSource trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{
    Octocrab,
    models::repos::{Asset as GithubAsset, Release as GithubRelease},
};
use reqwest::StatusCode;

use crate::{
    error::{DetectError, Result},
    forge::{config::RemoteConfig, traits::ReleaseSource},
    release::{Asset, Release},
    slug::Slug,
};

/// GitHub release source using Octocrab for API interactions.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut builder =
            Octocrab::builder().base_uri(config.api_base_uri())?;

        if let Some(token) = &config.token {
            builder = builder.personal_token(token.clone());
        }

        let instance = builder.build()?;

        Ok(Self { config, instance })
    }

    async fn fetch_all(&self, slug: &Slug) -> octocrab::Result<Vec<Release>> {
        let first_page = self
            .instance
            .repos(&slug.owner, &slug.name)
            .releases()
            .list()
            .per_page(self.config.page_size)
            .send()
            .await?;

        let releases = self.instance.all_pages(first_page).await?;

        Ok(releases.into_iter().map(Release::from).collect())
    }
}

#[async_trait]
impl ReleaseSource for Github {
    async fn list_releases(
        &self,
        slug: &Slug,
    ) -> Result<Option<Vec<Release>>> {
        debug!("listing releases for {slug} on {}", self.config.host);

        match self.fetch_all(slug).await {
            Ok(releases) => {
                debug!("found {} releases for {slug}", releases.len());
                Ok(Some(releases))
            }
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                info!("API returned 404. Repository or release not found");
                Ok(None)
            }
            Err(err) => {
                error!("API returned an error response: {err}");
                Err(DetectError::from(err))
            }
        }
    }
}

impl From<GithubAsset> for Asset {
    fn from(asset: GithubAsset) -> Self {
        Self {
            id: asset.id.into_inner(),
            name: asset.name,
            size: u64::try_from(asset.size).unwrap_or_default(),
            browser_download_url: asset.browser_download_url.to_string(),
        }
    }
}

impl From<GithubRelease> for Release {
    fn from(release: GithubRelease) -> Self {
        Self {
            tag_name: release.tag_name,
            name: release.name.unwrap_or_default(),
            body: release.body.unwrap_or_default(),
            draft: release.draft,
            prerelease: release.prerelease,
            published_at: release.published_at,
            assets: release.assets.into_iter().map(Asset::from).collect(),
            url: release.url.to_string(),
            html_url: release.html_url.to_string(),
        }
    }
}
