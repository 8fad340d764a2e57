//! Selection of the best release and asset for a platform.
//!
//! Releases are filtered one at a time by [`filter::find_asset_from_release`]
//! and the highest semantic version among the survivors wins. The order in
//! which the forge lists releases is never trusted for correctness.
use semver::Version;
use std::cmp::Ordering;

use crate::{
    policy::MaturityPolicy,
    release::{Asset, Release},
};

/// Per-release eligibility checks.
pub mod filter;

pub use filter::SkipReason;

/// Eligible release together with its matching asset and parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'r> {
    pub release: &'r Release,
    pub asset: &'r Asset,
    pub version: Version,
}

/// Record of a release that was skipped during selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Tag of the skipped release.
    pub tag: String,
    pub reason: SkipReason,
}

/// Outcome of a selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'r> {
    /// Winning candidate, `None` when nothing qualified.
    pub best: Option<Candidate<'r>>,
    /// One entry per release that was skipped, in scan order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Pick the eligible release with the highest semantic version.
///
/// Versions are compared by SemVer precedence, so build metadata does not
/// affect the outcome. On equal precedence the candidate scanned later
/// replaces the earlier one.
pub fn select_release<'r>(
    releases: &'r [Release],
    suffixes: &[String],
    target_version: Option<&str>,
    policy: MaturityPolicy,
) -> Selection<'r> {
    let mut selection = Selection::default();

    for release in releases {
        match filter::find_asset_from_release(
            release,
            suffixes,
            target_version,
            policy,
        ) {
            Ok((asset, version)) => {
                let replace = match &selection.best {
                    None => true,
                    Some(best) => {
                        version.cmp_precedence(&best.version)
                            != Ordering::Less
                    }
                };

                if replace {
                    selection.best = Some(Candidate {
                        release,
                        asset,
                        version,
                    });
                }
            }
            Err(reason) => selection.diagnostics.push(Diagnostic {
                tag: release.tag_name.clone(),
                reason,
            }),
        }
    }

    selection
}
