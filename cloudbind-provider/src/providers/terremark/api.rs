use async_trait::async_trait;

use crate::error::Result;

use super::types::{Catalog, ComputeOption, CustomizationParameters, TerremarkCatalogItem};

/// Terremark catalog browsing.
///
/// Every operation takes the `href` of the resource as found in a previous response
/// (an org's catalog link, a catalog's item reference, an item's option links).
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn get_catalog(&self, href: &str) -> Result<Option<Catalog>>;

    async fn get_catalog_item(&self, href: &str) -> Result<Option<TerremarkCatalogItem>>;

    /// Which parts of the guest may be customized for a catalog item.
    async fn get_customization_options(
        &self,
        href: &str,
    ) -> Result<Option<CustomizationParameters>>;

    /// Processor/memory combinations for a catalog item; empty when the item is gone.
    async fn get_compute_options(&self, href: &str) -> Result<Vec<ComputeOption>>;
}
