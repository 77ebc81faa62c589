//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::CloudProvider;
use crate::types::{ProviderCredentials, ProviderMetadata, ProviderType};

#[cfg(feature = "chef")]
use crate::providers::ChefProvider;
#[cfg(feature = "glesys")]
use crate::providers::GlesysProvider;
#[cfg(feature = "route53")]
use crate::providers::Route53Provider;
#[cfg(feature = "terremark")]
use crate::providers::TerremarkProvider;

/// A provider built from credentials.
///
/// Each variant keeps the concrete binding so its API trait (`ServerApi`, `ChefApi`,
/// `HostedZoneApi`, `CatalogApi`) stays reachable; [`as_cloud_provider`] gives the
/// shared view.
///
/// [`as_cloud_provider`]: ProviderClient::as_cloud_provider
#[derive(Clone)]
pub enum ProviderClient {
    #[cfg(feature = "glesys")]
    Glesys(Arc<GlesysProvider>),
    #[cfg(feature = "chef")]
    Chef(Arc<ChefProvider>),
    #[cfg(feature = "route53")]
    Route53(Arc<Route53Provider>),
    #[cfg(feature = "terremark")]
    Terremark(Arc<TerremarkProvider>),
}

impl ProviderClient {
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "glesys")]
            Self::Glesys(_) => ProviderType::Glesys,
            #[cfg(feature = "chef")]
            Self::Chef(_) => ProviderType::Chef,
            #[cfg(feature = "route53")]
            Self::Route53(_) => ProviderType::Route53,
            #[cfg(feature = "terremark")]
            Self::Terremark(_) => ProviderType::Terremark,
        }
    }

    pub fn as_cloud_provider(&self) -> Arc<dyn CloudProvider> {
        match self {
            #[cfg(feature = "glesys")]
            Self::Glesys(p) => p.clone(),
            #[cfg(feature = "chef")]
            Self::Chef(p) => p.clone(),
            #[cfg(feature = "route53")]
            Self::Route53(p) => p.clone(),
            #[cfg(feature = "terremark")]
            Self::Terremark(p) => p.clone(),
        }
    }
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ProviderClient")
            .field(&self.provider_type())
            .finish()
    }
}

/// Creates a provider from the given credentials.
///
/// Only Chef can fail here (the private key is parsed up front); the other providers
/// check their credentials on the first request or through
/// [`CloudProvider::validate_credentials`].
///
/// # Examples
///
/// ```rust,no_run
/// use cloudbind_provider::{ProviderClient, ProviderCredentials, create_provider};
///
/// let client = create_provider(ProviderCredentials::Route53 {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "secret".to_string(),
/// })
/// .unwrap();
/// if let ProviderClient::Route53(route53) = client {
///     // route53 implements HostedZoneApi
/// }
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<ProviderClient> {
    match credentials {
        #[cfg(feature = "glesys")]
        ProviderCredentials::Glesys { username, api_key } => Ok(ProviderClient::Glesys(
            Arc::new(GlesysProvider::new(username, api_key)),
        )),
        #[cfg(feature = "chef")]
        ProviderCredentials::Chef {
            server_url,
            client_name,
            private_key,
        } => Ok(ProviderClient::Chef(Arc::new(ChefProvider::new(
            server_url,
            client_name,
            &private_key,
        )?))),
        #[cfg(feature = "route53")]
        ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
        } => Ok(ProviderClient::Route53(Arc::new(Route53Provider::new(
            access_key_id,
            secret_access_key,
        )))),
        #[cfg(feature = "terremark")]
        ProviderCredentials::Terremark { username, password } => Ok(ProviderClient::Terremark(
            Arc::new(TerremarkProvider::new(username, password)),
        )),
    }
}

/// Returns metadata for all providers enabled via feature flags.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![
        #[cfg(feature = "glesys")]
        GlesysProvider::metadata(),
        #[cfg(feature = "chef")]
        ChefProvider::metadata(),
        #[cfg(feature = "route53")]
        Route53Provider::metadata(),
        #[cfg(feature = "terremark")]
        TerremarkProvider::metadata(),
    ]
}
