//! Tests for release detection.
//!
//! Tests for:
//! - Slug validation before any fetch
//! - Not-found handling for missing repositories and unmatched platforms
//! - Detected release fields
//! - Validation asset resolution

use super::*;
use crate::{
    error::DetectError,
    forge::traits::MockReleaseSource,
    release::Release,
    test_helpers::{create_test_prerelease, create_test_release},
    validation::Sha256Validator,
};

fn linux_amd64() -> Platform {
    Platform::new("linux", "amd64")
}

fn mock_source(releases: Vec<Release>) -> MockReleaseSource {
    let mut mock_source = MockReleaseSource::new();
    mock_source
        .expect_list_releases()
        .times(1)
        .withf(|slug| slug.owner == "owner" && slug.name == "repo")
        .returning(move |_| Ok(Some(releases.clone())));
    mock_source
}

#[test_log::test(tokio::test)]
async fn detects_latest_release_for_platform() {
    let source = mock_source(vec![
        create_test_release("v1.2.0", &["tool_linux_amd64.tar.gz"]),
        create_test_release("v1.1.0", &["tool_linux_amd64.tar.gz"]),
    ]);
    let detector =
        Detector::new(Box::new(source)).with_platform(linux_amd64());

    let detected = detector.detect_latest("owner/repo").await.unwrap().unwrap();

    assert_eq!(detected.version, Version::new(1, 2, 0));
    assert_eq!(detected.asset_name, "tool_linux_amd64.tar.gz");
    assert_eq!(
        detected.asset_url,
        "https://github.com/owner/repo/releases/download/tool_linux_amd64.tar.gz"
    );
    assert_eq!(detected.asset_id, 1);
    assert_eq!(detected.asset_size, 1024);
    assert_eq!(detected.validation_asset_id, None);
    assert_eq!(
        detected.url,
        "https://github.com/owner/repo/releases/tag/v1.2.0"
    );
    assert_eq!(detected.release_notes, "Notes for v1.2.0");
    assert_eq!(detected.name, "Release v1.2.0");
    assert!(detected.published_at.is_some());
    assert_eq!(detected.repo_owner, "owner");
    assert_eq!(detected.repo_name, "repo");
}

#[tokio::test]
async fn invalid_slug_fails_before_fetching() {
    let mut source = MockReleaseSource::new();
    source.expect_list_releases().never();
    let detector = Detector::new(Box::new(source));

    for slug in ["owner", "owner/", "/repo", "a/b/c"] {
        let err = detector.detect_latest(slug).await.unwrap_err();
        assert!(matches!(err, DetectError::InvalidSlug(_)));
    }
}

#[tokio::test]
async fn missing_repository_is_not_found() {
    let mut source = MockReleaseSource::new();
    source.expect_list_releases().returning(|_| Ok(None));
    let detector = Detector::new(Box::new(source));

    let detected = detector.detect_latest("owner/repo").await.unwrap();

    assert!(detected.is_none());
}

#[tokio::test]
async fn upstream_errors_propagate() {
    let mut source = MockReleaseSource::new();
    source
        .expect_list_releases()
        .returning(|_| Err(DetectError::upstream("boom")));
    let detector = Detector::new(Box::new(source));

    let err = detector.detect_latest("owner/repo").await.unwrap_err();

    assert!(matches!(err, DetectError::UpstreamFetch(ref msg) if msg == "boom"));
}

#[tokio::test]
async fn no_asset_for_platform_is_not_found() {
    let source = mock_source(vec![create_test_release(
        "v1.0.0",
        &["tool_darwin_arm64.zip"],
    )]);
    let detector =
        Detector::new(Box::new(source)).with_platform(linux_amd64());

    let detected = detector.detect_latest("owner/repo").await.unwrap();

    assert!(detected.is_none());
}

#[tokio::test]
async fn prerelease_requires_prerelease_policy() {
    let releases =
        vec![create_test_prerelease("v2.0.0-beta", &["tool_darwin_arm64.zip"])];
    let platform = Platform::new("darwin", "arm64");

    let stable_only = Detector::new(Box::new(mock_source(releases.clone())))
        .with_platform(platform.clone());
    let with_pre = Detector::new(Box::new(mock_source(releases)))
        .with_platform(platform);

    assert!(
        stable_only
            .detect_latest_of_type("owner/repo", MaturityPolicy::RELEASE)
            .await
            .unwrap()
            .is_none()
    );

    let detected = with_pre
        .detect_latest_of_type(
            "owner/repo",
            MaturityPolicy::RELEASE | MaturityPolicy::PRERELEASE,
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detected.version, Version::parse("2.0.0-beta").unwrap());
}

#[tokio::test]
async fn detects_pinned_version() {
    let source = mock_source(vec![
        create_test_release("v1.2.0", &["tool_linux_amd64"]),
        create_test_prerelease("v1.1.0-rc.1", &["tool_linux_amd64"]),
    ]);
    let detector =
        Detector::new(Box::new(source)).with_platform(linux_amd64());

    let detected = detector
        .detect_version("owner/repo", "v1.1.0-rc.1")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detected.version, Version::parse("1.1.0-rc.1").unwrap());
}

#[tokio::test]
async fn resolves_validation_asset() {
    let source = mock_source(vec![create_test_release(
        "v1.0.0",
        &["tool_linux_amd64.tar.gz", "tool_linux_amd64.tar.gz.sha256"],
    )]);
    let detector = Detector::new(Box::new(source))
        .with_platform(linux_amd64())
        .with_validator(Box::new(Sha256Validator));

    let detected = detector.detect_latest("owner/repo").await.unwrap().unwrap();

    assert_eq!(detected.asset_id, 1);
    assert_eq!(detected.validation_asset_id, Some(2));
}

#[tokio::test]
async fn missing_validation_asset_is_an_error() {
    let source = mock_source(vec![create_test_release(
        "v1.0.0",
        &["tool_linux_amd64.tar.gz"],
    )]);
    let detector = Detector::new(Box::new(source))
        .with_platform(linux_amd64())
        .with_validator(Box::new(Sha256Validator));

    let err = detector.detect_latest("owner/repo").await.unwrap_err();

    assert!(matches!(
        err,
        DetectError::ValidationAssetMissing { ref name }
            if name == "tool_linux_amd64.tar.gz.sha256"
    ));
}

#[test]
fn serializes_version_as_string() {
    let release = create_test_release("v1.2.3", &["tool_linux_amd64"]);
    let slug = Slug::parse("owner/repo").unwrap();
    let candidate = Candidate {
        release: &release,
        asset: &release.assets[0],
        version: Version::new(1, 2, 3),
    };

    let detected = DetectedRelease::from_candidate(&candidate, &slug);
    let json = serde_json::to_value(&detected).unwrap();

    assert_eq!(json["version"], "1.2.3");
    assert_eq!(json["asset_name"], "tool_linux_amd64");
    assert_eq!(json["validation_asset_id"], serde_json::Value::Null);
    assert_eq!(json["repo_owner"], "owner");
}

#[tokio::test]
async fn github_detector_targets_running_platform() {
    let detector = Detector::github().unwrap();

    assert_eq!(detector.platform(), &Platform::current());
}

#[tokio::test]
async fn github_detector_accepts_enterprise_config() {
    let config = RemoteConfig {
        host: "github.example.com".into(),
        ..RemoteConfig::default()
    };

    assert!(Detector::github_with(config).is_ok());
}
