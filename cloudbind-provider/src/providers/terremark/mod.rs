//! Terremark vCloud Express catalog browsing (vCloud API 0.8)

mod api;
mod error;
mod http;
mod provider;
/// Terremark catalog types.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;
use tokio::sync::RwLock;

use crate::providers::common::{
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client, normalize_endpoint,
};

pub use api::CatalogApi;
pub use types::{
    Catalog, ComputeOption, CustomizationParameters, Link, ReferenceType, TerremarkCatalogItem,
};

pub(crate) const TERREMARK_ENDPOINT: &str =
    "https://services.vcloudexpress.terremark.com/api/v0.8a-ext1.6";
/// Name of the session cookie issued by `/login`.
pub(crate) const SESSION_COOKIE: &str = "vcloud-token";

/// Terremark vCloud Express binding.
///
/// The first request logs in with HTTP Basic and keeps the `vcloud-token` cookie; an
/// expired session (HTTP 401) triggers one fresh login before the error is returned.
pub struct TerremarkProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) max_retries: u32,
    pub(crate) session: RwLock<Option<String>>,
}

/// Builder for [`TerremarkProvider`].
pub struct TerremarkProviderBuilder {
    username: String,
    password: String,
    endpoint: String,
    max_retries: u32,
    timeout: Duration,
}

impl TerremarkProviderBuilder {
    fn new(username: String, password: String) -> Self {
        Self {
            username,
            password,
            endpoint: TERREMARK_ENDPOINT.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the API root (the URL `/login` is appended to).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> TerremarkProvider {
        TerremarkProvider {
            client: create_http_client(self.timeout),
            endpoint: normalize_endpoint(&self.endpoint),
            username: self.username,
            password: self.password,
            max_retries: self.max_retries,
            session: RwLock::new(None),
        }
    }
}

impl TerremarkProvider {
    pub fn new(username: String, password: String) -> Self {
        Self::builder(username, password).build()
    }

    pub fn builder(username: String, password: String) -> TerremarkProviderBuilder {
        TerremarkProviderBuilder::new(username, password)
    }
}
