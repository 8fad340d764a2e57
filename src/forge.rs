//! Release sources backed by remote git forges.
//!
//! Provides token-based authentication and release listing through a common
//! trait so selection never depends on a specific forge API.

/// Configuration and authentication for forge platforms.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Common traits for forge platform abstraction.
pub mod traits;
