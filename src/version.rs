//! Semantic version parsing for release tags.
use semver::Version;
use thiserror::Error;

/// A release tag that does not follow semantic versioning.
///
/// This is a per-release condition: the release carrying the tag is left out
/// of selection and the error is never returned to callers of the detector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tag {tag:?} is not a semantic version: {reason}")]
pub struct NotSemVer {
    pub tag: String,
    pub reason: String,
}

/// Parse a release tag such as `v1.2.3` or `2.0.0-beta+build.5`.
///
/// A single leading `v` is stripped before parsing. Everything else must be a
/// complete `major.minor.patch` version with optional pre-release and build
/// segments.
pub fn parse_tag(tag: &str) -> Result<Version, NotSemVer> {
    let text = tag.strip_prefix('v').unwrap_or(tag);

    Version::parse(text).map_err(|err| NotSemVer {
        tag: tag.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::{BuildMetadata, Prerelease};

    #[test]
    fn parses_tag_with_leading_v() {
        let version = parse_tag("v1.2.3").unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn parses_tag_without_prefix() {
        let version = parse_tag("0.10.0").unwrap();
        assert_eq!(version, Version::new(0, 10, 0));
    }

    #[test]
    fn keeps_prerelease_and_build_metadata() {
        let version = parse_tag("v2.0.0-beta.1+sha.abc").unwrap();
        assert_eq!(version.pre, Prerelease::new("beta.1").unwrap());
        assert_eq!(version.build, BuildMetadata::new("sha.abc").unwrap());
    }

    #[test]
    fn strips_only_one_v() {
        assert!(parse_tag("vv1.2.3").is_err());
    }

    #[test]
    fn rejects_non_conforming_tags() {
        for tag in [
            "",
            "v",
            "latest",
            "v1",
            "v1.2",
            "1.2.x",
            "release-1.2.3",
            "v1.2.3-",
            "v1.2.3+",
            "V1.2.3",
        ] {
            let err = parse_tag(tag).unwrap_err();
            assert_eq!(err.tag, tag);
        }
    }

    #[test]
    fn prerelease_sorts_below_release() {
        let beta = parse_tag("v1.0.0-beta").unwrap();
        let stable = parse_tag("v1.0.0").unwrap();
        assert!(beta < stable);
    }
}
