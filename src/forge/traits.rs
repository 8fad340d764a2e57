//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{error::Result, release::Release, slug::Slug};

/// Source of published releases for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// List every published release of `slug`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(releases))` - Releases in the order the forge lists them
    /// * `Ok(None)` - The repository or its releases do not exist
    /// * `Err(_)` - The forge could not be queried
    async fn list_releases(
        &self,
        slug: &Slug,
    ) -> Result<Option<Vec<Release>>>;
}
