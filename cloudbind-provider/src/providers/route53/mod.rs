//! Amazon Route 53 hosted zones

mod api;
mod error;
mod http;
pub mod predicates;
mod provider;
mod sign;
/// Route 53 domain and wire types.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;

use crate::providers::common::{
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client, normalize_endpoint,
};

pub use api::HostedZoneApi;
pub use predicates::{NameEquals, ZonePredicate};
pub use types::{Change, ChangeStatus, NewZone, Zone, ZoneAndNameServers, ZoneList};

pub(crate) const ROUTE53_ENDPOINT: &str = "https://route53.amazonaws.com";
pub(crate) const ROUTE53_API_VERSION: &str = "2013-04-01";

/// Route 53 binding, signed with AWS Signature Version 4.
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) api_version: String,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    endpoint: String,
    api_version: String,
    max_retries: u32,
    timeout: Duration,
}

impl Route53ProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            endpoint: ROUTE53_ENDPOINT.to_string(),
            api_version: ROUTE53_API_VERSION.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// API version path segment (default: `2013-04-01`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
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

    pub fn build(self) -> Route53Provider {
        Route53Provider {
            client: create_http_client(self.timeout),
            endpoint: normalize_endpoint(&self.endpoint),
            api_version: self.api_version,
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            max_retries: self.max_retries,
        }
    }
}

impl Route53Provider {
    pub fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self::builder(access_key_id, secret_access_key).build()
    }

    pub fn builder(access_key_id: String, secret_access_key: String) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(access_key_id, secret_access_key)
    }
}
