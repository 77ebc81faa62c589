//! GleSYS compute server binding

mod api;
mod error;
mod http;
mod options;
mod provider;
/// GleSYS wire and domain types.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;

use crate::providers::common::{
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client, normalize_endpoint,
};

pub use api::ServerApi;
pub use options::{
    ServerCloneOptions, ServerCreateOptions, ServerDestroyOptions, ServerEditOptions, ServerSpec,
    ServerStatusOptions, ServerStopOptions,
};
pub use types::{
    Cost, Ip, ResourceUsage, ResourceUsageGauge, ResourceUsageInfo, ResourceUsageValue, Server,
    ServerAllowedArguments, ServerConsole, ServerDetails, ServerLimit, ServerState, ServerStatus,
    ServerTemplate, Uptime,
};

/// GleSYS API base URL.
pub(crate) const GLESYS_API_BASE: &str = "https://api.glesys.com";

/// GleSYS compute binding.
///
/// Authenticates with HTTP Basic (account name + API key). Every call is a form-encoded
/// `POST /server/<action>/format/json`.
///
/// ```rust,no_run
/// use cloudbind_provider::{GlesysProvider, ServerApi};
///
/// # async fn run() -> cloudbind_provider::Result<()> {
/// let glesys = GlesysProvider::new("cl12345".to_string(), "api-key".to_string());
/// for server in glesys.list_servers().await? {
///     println!("{} {}", server.id, server.hostname);
/// }
/// # Ok(())
/// # }
/// ```
pub struct GlesysProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) username: String,
    pub(crate) api_key: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`GlesysProvider`].
pub struct GlesysProviderBuilder {
    username: String,
    api_key: String,
    endpoint: String,
    max_retries: u32,
    timeout: Duration,
}

impl GlesysProviderBuilder {
    fn new(username: String, api_key: String) -> Self {
        Self {
            username,
            api_key,
            endpoint: GLESYS_API_BASE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Per-request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> GlesysProvider {
        GlesysProvider {
            client: create_http_client(self.timeout),
            endpoint: normalize_endpoint(&self.endpoint),
            username: self.username,
            api_key: self.api_key,
            max_retries: self.max_retries,
        }
    }
}

impl GlesysProvider {
    /// Creates a provider against the public API with default settings.
    pub fn new(username: String, api_key: String) -> Self {
        Self::builder(username, api_key).build()
    }

    pub fn builder(username: String, api_key: String) -> GlesysProviderBuilder {
        GlesysProviderBuilder::new(username, api_key)
    }
}
