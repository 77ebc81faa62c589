//! Chef Server binding (organizations, users, API clients)

mod api;
mod error;
mod http;
mod provider;
mod sign;
/// Chef Server domain types.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;
use rsa::RsaPrivateKey;

use crate::error::Result;
use crate::providers::common::{
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client, normalize_endpoint,
};

pub use api::ChefApi;
pub use types::{Organization, OrganizationBuilder, User, UserBuilder};

/// `X-Chef-Version` sent with every request.
pub(crate) const CHEF_VERSION: &str = "0.10.4";

/// Chef Server binding.
///
/// Requests are signed with the client's RSA key (`X-Ops-*` headers, protocol 1.0).
///
/// ```rust,no_run
/// use cloudbind_provider::{ChefApi, ChefProvider};
///
/// # async fn run(pem: String) -> cloudbind_provider::Result<()> {
/// let chef = ChefProvider::new(
///     "https://chef.example.com".to_string(),
///     "admin".to_string(),
///     &pem,
/// )?;
/// let clients = chef.list_clients_in_org("acme").await?;
/// # Ok(())
/// # }
/// ```
pub struct ChefProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) client_name: String,
    pub(crate) signing_key: RsaPrivateKey,
    pub(crate) max_retries: u32,
}

/// Builder for [`ChefProvider`].
pub struct ChefProviderBuilder {
    server_url: String,
    client_name: String,
    private_key_pem: String,
    max_retries: u32,
    timeout: Duration,
}

impl ChefProviderBuilder {
    fn new(server_url: String, client_name: String, private_key_pem: &str) -> Self {
        Self {
            server_url,
            client_name,
            private_key_pem: private_key_pem.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
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

    /// Parse the signing key and build the provider.
    pub fn build(self) -> Result<ChefProvider> {
        let signing_key = sign::parse_private_key(&self.private_key_pem)?;
        Ok(ChefProvider {
            client: create_http_client(self.timeout),
            endpoint: normalize_endpoint(&self.server_url),
            client_name: self.client_name,
            signing_key,
            max_retries: self.max_retries,
        })
    }
}

impl ChefProvider {
    /// Creates a provider with default settings.
    ///
    /// Fails with `SigningError` when `private_key_pem` is not a PKCS#1 or PKCS#8 RSA key.
    pub fn new(server_url: String, client_name: String, private_key_pem: &str) -> Result<Self> {
        Self::builder(server_url, client_name, private_key_pem).build()
    }

    pub fn builder(
        server_url: String,
        client_name: String,
        private_key_pem: &str,
    ) -> ChefProviderBuilder {
        ChefProviderBuilder::new(server_url, client_name, private_key_pem)
    }
}
