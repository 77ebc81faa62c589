//! Provider bindings

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "chef")]
mod chef;
#[cfg(feature = "glesys")]
mod glesys;
#[cfg(feature = "route53")]
mod route53;
#[cfg(feature = "terremark")]
mod terremark;

#[cfg(feature = "chef")]
pub use chef::{
    ChefApi, ChefProvider, ChefProviderBuilder, Organization, OrganizationBuilder, User,
    UserBuilder,
};
#[cfg(feature = "glesys")]
pub use glesys::{
    Cost, GlesysProvider, GlesysProviderBuilder, Ip, ResourceUsage, ResourceUsageGauge,
    ResourceUsageInfo, ResourceUsageValue, Server, ServerAllowedArguments, ServerApi,
    ServerCloneOptions, ServerConsole, ServerCreateOptions, ServerDestroyOptions, ServerDetails,
    ServerEditOptions, ServerLimit, ServerSpec, ServerState, ServerStatus, ServerStatusOptions,
    ServerStopOptions, ServerTemplate, Uptime,
};
#[cfg(feature = "route53")]
pub use route53::{
    Change, ChangeStatus, HostedZoneApi, NameEquals, NewZone, Route53Provider,
    Route53ProviderBuilder, Zone, ZoneAndNameServers, ZoneList, ZonePredicate, predicates,
};
#[cfg(feature = "terremark")]
pub use terremark::{
    Catalog, CatalogApi, ComputeOption, CustomizationParameters, Link, ReferenceType,
    TerremarkCatalogItem, TerremarkProvider, TerremarkProviderBuilder,
};
