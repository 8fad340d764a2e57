//! Release maturity policy.
use std::{fmt::Display, ops::BitOr};

/// Set of release maturities a caller is willing to accept.
///
/// Flags combine with `|`:
///
/// ```
/// use relscout::MaturityPolicy;
///
/// let policy = MaturityPolicy::RELEASE | MaturityPolicy::PRERELEASE;
/// assert!(policy.is_allowed(MaturityPolicy::PRERELEASE));
/// ```
///
/// Drafts have no flag. A draft release is only ever selected when its exact
/// tag is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaturityPolicy(u8);

impl MaturityPolicy {
    /// Stable releases (neither draft nor pre-release).
    pub const RELEASE: Self = Self(1);
    /// Releases flagged as pre-release upstream.
    pub const PRERELEASE: Self = Self(1 << 1);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::RELEASE.0 | Self::PRERELEASE.0)
    }

    /// Whether any of the bits in `flag` are enabled in this policy.
    pub const fn is_allowed(self, flag: Self) -> bool {
        self.0 & flag.0 != 0
    }

    /// Whether every bit in `other` is enabled in this policy.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for MaturityPolicy {
    fn default() -> Self {
        Self::RELEASE
    }
}

impl BitOr for MaturityPolicy {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Display for MaturityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (
            self.is_allowed(Self::RELEASE),
            self.is_allowed(Self::PRERELEASE),
        ) {
            (true, true) => f.write_str("release|prerelease"),
            (true, false) => f.write_str("release"),
            (false, true) => f.write_str("prerelease"),
            (false, false) => f.write_str("none"),
        }
    }
}
