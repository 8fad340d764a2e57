//! Companion validation assets and validators.
//!
//! A release can ship a checksum or signature next to each archive, named
//! `<archive name><validator suffix>` (e.g. `tool_linux_amd64.tar.gz.sha256`).
//! When a [`Validator`] is configured the detector insists on finding that
//! file among the release assets.
use sha2::{Digest, Sha256};

use crate::{
    error::{DetectError, Result},
    release::{Asset, Release},
};

/// Verifies a downloaded asset against its companion validation file.
pub trait Validator: Send + Sync {
    /// Suffix appended to the asset name to form the validation file name.
    fn suffix(&self) -> &str;

    /// Check `asset` (the downloaded archive bytes) against `validation` (the
    /// downloaded validation file bytes).
    fn validate(&self, asset: &[u8], validation: &[u8]) -> Result<()>;
}

/// Name of the validation file expected next to `asset_name`.
pub fn validation_asset_name(
    asset_name: &str,
    validator: &dyn Validator,
) -> String {
    format!("{asset_name}{}", validator.suffix())
}

/// Find the asset named exactly `validation_name` in `release`.
///
/// Unlike platform matching this is an exact comparison, and a miss is an
/// error rather than a skip.
pub fn find_validation_asset<'r>(
    release: &'r Release,
    validation_name: &str,
) -> Result<&'r Asset> {
    release
        .assets
        .iter()
        .find(|asset| asset.name == validation_name)
        .ok_or_else(|| DetectError::validation_asset_missing(validation_name))
}

/// Validates assets against a SHA-256 digest file.
///
/// The validation file may hold a bare hex digest or `sha256sum` output
/// (`<digest>  <file name>`); only the first token is compared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Validator;

impl Sha256Validator {
    pub const SUFFIX: &'static str = ".sha256";
}

impl Validator for Sha256Validator {
    fn suffix(&self) -> &str {
        Self::SUFFIX
    }

    fn validate(&self, asset: &[u8], validation: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(validation).map_err(|err| {
            DetectError::ValidationFailed(format!(
                "validation file is not valid UTF-8: {err}"
            ))
        })?;

        let expected = text.split_whitespace().next().ok_or_else(|| {
            DetectError::ValidationFailed("validation file is empty".into())
        })?;

        let actual = format!("{:x}", Sha256::digest(asset));

        if !actual.eq_ignore_ascii_case(expected) {
            return Err(DetectError::ValidationFailed(format!(
                "sha256 mismatch: expected {expected}, got {actual}"
            )));
        }

        Ok(())
    }
}
