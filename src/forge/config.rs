//! Configuration for Git forge platform connections.
use secrecy::SecretString;

/// Default forge host.
pub const DEFAULT_HOST: &str = "github.com";
/// Default URL scheme for API requests.
pub const DEFAULT_SCHEME: &str = "https";
/// Default page size for paginated release queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with forge platforms.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Optional access token. Anonymous requests are rate limited harder.
    pub token: Option<SecretString>,
    /// Number of releases requested per page.
    pub page_size: u8,
}

impl RemoteConfig {
    /// Base URI of the REST API for this host.
    ///
    /// github.com serves its API from a separate `api.` subdomain while
    /// GitHub Enterprise Server mounts it under `/api/v3` on the same host.
    pub fn api_base_uri(&self) -> String {
        if self.host == DEFAULT_HOST {
            format!("{}://api.{}", self.scheme, self.host)
        } else {
            format!("{}://{}/api/v3", self.scheme, self.host)
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
