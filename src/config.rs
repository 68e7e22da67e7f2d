//! GitHub Client Configuration
//!
//! Credentials and connection settings, built once at startup and handed to
//! [`GitHubClient`](crate::GitHubClient). The library never reads the
//! environment itself; `main` resolves flags and `GITHUB_*` variables.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::RequestBuilder;

/// Default GitHub REST API endpoint
pub const GITHUB_API: &str = "https://api.github.com";

/// Media type for the projects (classic) preview API
pub const PROJECTS_PREVIEW_MEDIA_TYPE: &str = "application/vnd.github.inertia-preview+json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static GitHub credentials: a user name and an API token.
///
/// Nothing is validated locally. A bad token only shows up when GitHub
/// rejects a request.
#[derive(Clone, Default)]
pub struct Credentials {
    principal: Option<String>,
    secret: Option<String>,
}

impl Credentials {
    pub fn new(principal: Option<String>, secret: Option<String>) -> Self {
        Self { principal, secret }
    }

    /// The `(user, token)` pair used for HTTP basic auth
    pub fn credentials(&self) -> (Option<&str>, Option<&str>) {
        (self.principal.as_deref(), self.secret.as_deref())
    }

    /// Headers sent with every request
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(PROJECTS_PREVIEW_MEDIA_TYPE));
        headers
    }

    /// Attach credentials and headers to a request.
    ///
    /// A user name selects basic auth. A token on its own is sent as a bearer
    /// token. With neither, the request goes out anonymously.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.headers(self.headers());
        match self.credentials() {
            (Some(user), token) => request.basic_auth(user, token),
            (None, Some(token)) => request.bearer_auth(token),
            (None, None) => request,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("principal", &self.principal)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Everything needed to talk to a GitHub API host
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl GitHubConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            api_url: GITHUB_API.to_string(),
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at another API host (GitHub Enterprise, test server)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
