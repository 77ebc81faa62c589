//! # cloudbind-provider
//!
//! Typed async bindings for a handful of cloud and infrastructure APIs, sharing one
//! error type, one retrying HTTP layer and one credentials model.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | API trait | Auth Method |
//! |----------|-------------|-----------|-------------|
//! | [GleSYS](https://glesys.com/) | `glesys` | [`ServerApi`] | HTTP Basic |
//! | [Chef Server](https://docs.chef.io/server/) | `chef` | [`ChefApi`] | RSA signed headers (v1.0) |
//! | [Amazon Route 53](https://aws.amazon.com/route53/) | `route53` | [`HostedZoneApi`] | AWS SigV4 |
//! | Terremark vCloud Express | `terremark` | [`CatalogApi`] | Login session cookie |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)*: Enable all providers listed above.
//! - **`glesys`**, **`chef`**, **`route53`**, **`terremark`**: Enable a single provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cloudbind-provider = { version = "0.1", default-features = false, features = ["route53", "rustls"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudbind_provider::predicates::name_equals;
//! use cloudbind_provider::{HostedZoneApi, Route53Provider, ZonePredicate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let route53 = Route53Provider::new("AKIA...".to_string(), "secret".to_string());
//!
//!     let wanted = name_equals("example.com.");
//!     let zones = route53.list_all_zones().await?;
//!     if let Some(zone) = zones.iter().find(|z| wanted.test(z)) {
//!         let details = route53.get_zone(&zone.id).await?;
//!         println!("{wanted}: {details:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::NotFound`]: the addressed resource does not exist
//! - [`ProviderError::RateLimited`]: API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`]: network connectivity issue (retryable)
//!
//! Lookups such as `get_server_details`, `get_user` or `get_zone` return `Ok(None)`
//! instead of `NotFound`; see [`NotFoundExt`]. Transient errors (`NetworkError`,
//! `Timeout`, `RateLimited`) are automatically retried with exponential backoff.

pub mod binding;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

pub use binding::NotFoundExt;

// Re-export factory functions
pub use factory::{ProviderClient, create_provider, get_all_provider_metadata};

// Re-export the shared trait only (internal traits are not exported)
pub use traits::CloudProvider;

// Re-export types
pub use types::{
    CredentialValidationError, FieldType, ProviderCredentialField, ProviderCredentials,
    ProviderMetadata, ProviderType,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "glesys")]
pub use providers::{
    Cost, GlesysProvider, GlesysProviderBuilder, Ip, ResourceUsage, ResourceUsageGauge,
    ResourceUsageInfo, ResourceUsageValue, Server, ServerAllowedArguments, ServerApi,
    ServerCloneOptions, ServerConsole, ServerCreateOptions, ServerDestroyOptions, ServerDetails,
    ServerEditOptions, ServerLimit, ServerSpec, ServerState, ServerStatus, ServerStatusOptions,
    ServerStopOptions, ServerTemplate, Uptime,
};

#[cfg(feature = "chef")]
pub use providers::{
    ChefApi, ChefProvider, ChefProviderBuilder, Organization, OrganizationBuilder, User,
    UserBuilder,
};

#[cfg(feature = "route53")]
pub use providers::{
    Change, ChangeStatus, HostedZoneApi, NameEquals, NewZone, Route53Provider,
    Route53ProviderBuilder, Zone, ZoneAndNameServers, ZoneList, ZonePredicate, predicates,
};

#[cfg(feature = "terremark")]
pub use providers::{
    Catalog, CatalogApi, ComputeOption, CustomizationParameters, Link, ReferenceType,
    TerremarkCatalogItem, TerremarkProvider, TerremarkProviderBuilder,
};
