//! Detects the newest release of a hosted repository that ships an asset for
//! the running platform.
//!
//! Selection works on an in-memory list of releases: every release is
//! checked against a [`MaturityPolicy`] and an optional pinned tag, its tag is
//! parsed as a semantic version, and its assets are matched against the
//! platform suffixes (`<os>_<arch>.tar.gz`, `<os>-<arch>.zip`, ...). The
//! highest version wins. [`Detector`] wraps this with a [`ReleaseSource`]
//! (GitHub via `octocrab`) and an optional [`Validator`].
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod forge;
pub mod platform;
pub mod policy;
pub mod release;
pub mod select;
pub mod slug;
pub mod validation;
pub mod version;

pub use detector::{DetectedRelease, Detector};
pub use error::{DetectError, Result};
pub use forge::traits::ReleaseSource;
pub use platform::Platform;
pub use policy::MaturityPolicy;
pub use release::{Asset, Release};
pub use slug::Slug;
pub use validation::{Sha256Validator, Validator};

#[cfg(test)]
pub mod test_helpers;
