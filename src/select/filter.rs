//! Per-release eligibility checks.
use semver::Version;
use std::fmt::Display;

use crate::{
    policy::MaturityPolicy,
    release::{Asset, Release},
    version::{self, NotSemVer},
};

/// Why a release was left out of selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A specific tag was requested and this is not it.
    VersionMismatch { target: String },
    Draft,
    /// Pre-release while the policy does not allow pre-releases.
    Prerelease,
    /// Stable release while the policy does not allow stable releases.
    ReleaseNotAllowed,
    NotSemVer(NotSemVer),
    /// No asset name ends with one of the platform suffixes.
    NoMatchingAsset,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::VersionMismatch { target } => {
                write!(f, "not matching to specified version {target}")
            }
            SkipReason::Draft => f.write_str("draft version"),
            SkipReason::Prerelease => f.write_str("pre-release version"),
            SkipReason::ReleaseNotAllowed => {
                f.write_str("release versions are not allowed by policy")
            }
            SkipReason::NotSemVer(err) => {
                write!(f, "failed to parse a semantic version: {}", err.reason)
            }
            SkipReason::NoMatchingAsset => {
                f.write_str("no suitable asset was found")
            }
        }
    }
}

/// Decide whether `release` is eligible and which of its assets was built for
/// the platform described by `suffixes`.
///
/// Checks run in order and stop at the first disqualification:
///
/// 1. When `target_version` is set it must equal the tag exactly.
/// 2. Without a target, drafts are skipped, pre-releases need
///    [`MaturityPolicy::PRERELEASE`] and stable releases need
///    [`MaturityPolicy::RELEASE`]. Pinning a tag bypasses this gate.
/// 3. The tag must parse as a semantic version.
/// 4. The first asset (in listed order) whose name ends with any suffix wins.
pub fn find_asset_from_release<'r>(
    release: &'r Release,
    suffixes: &[String],
    target_version: Option<&str>,
    policy: MaturityPolicy,
) -> Result<(&'r Asset, Version), SkipReason> {
    let target_version = target_version.filter(|t| !t.is_empty());

    match target_version {
        Some(target) if target != release.tag_name => {
            return Err(SkipReason::VersionMismatch {
                target: target.to_string(),
            });
        }
        Some(_) => {}
        None => check_maturity(release, policy)?,
    }

    let version =
        version::parse_tag(&release.tag_name).map_err(SkipReason::NotSemVer)?;

    release
        .assets
        .iter()
        .find(|asset| {
            suffixes.iter().any(|suffix| asset.name.ends_with(suffix.as_str()))
        })
        .map(|asset| (asset, version))
        .ok_or(SkipReason::NoMatchingAsset)
}

fn check_maturity(
    release: &Release,
    policy: MaturityPolicy,
) -> Result<(), SkipReason> {
    if release.draft {
        return Err(SkipReason::Draft);
    }

    if release.prerelease {
        if !policy.is_allowed(MaturityPolicy::PRERELEASE) {
            return Err(SkipReason::Prerelease);
        }
    } else if !policy.is_allowed(MaturityPolicy::RELEASE) {
        return Err(SkipReason::ReleaseNotAllowed);
    }

    Ok(())
}
