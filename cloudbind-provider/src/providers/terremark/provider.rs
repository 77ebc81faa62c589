//! Terremark `CatalogApi` implementation

use async_trait::async_trait;

use crate::binding::NotFoundExt;
use crate::error::{ProviderError, Result};
use crate::traits::CloudProvider;
use crate::types::{FieldType, ProviderCredentialField, ProviderMetadata, ProviderType};

use super::api::CatalogApi;
use super::types::{
    Catalog, CatalogItemXml, CatalogXml, ComputeOption, ComputeOptionsXml,
    CustomizationParameters, TerremarkCatalogItem,
};
use super::{TERREMARK_ENDPOINT, TerremarkProvider};

const CATALOG_XML: &str = "application/vnd.vmware.vcloud.catalog+xml";
const CATALOG_ITEM_XML: &str = "application/vnd.vmware.vcloud.catalogItem+xml";
const OPTIONS_XML: &str = "application/xml";

#[async_trait]
impl CloudProvider for TerremarkProvider {
    fn id(&self) -> &'static str {
        "terremark"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Terremark,
            name: "Terremark vCloud Express".to_string(),
            description: "Terremark vCloud Express catalogs".to_string(),
            default_endpoint: TERREMARK_ENDPOINT.to_string(),
            api_version: "0.8".to_string(),
            required_fields: vec![
                ProviderCredentialField::new("username", "Email", FieldType::Text)
                    .placeholder("user@example.com"),
                ProviderCredentialField::new("password", "Password", FieldType::Password),
            ],
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.login().await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl CatalogApi for TerremarkProvider {
    async fn get_catalog(&self, href: &str) -> Result<Option<Catalog>> {
        self.get_xml::<CatalogXml>(href, CATALOG_XML)
            .await
            .map(Catalog::from)
            .none_on_not_found()
    }

    async fn get_catalog_item(&self, href: &str) -> Result<Option<TerremarkCatalogItem>> {
        self.get_xml::<CatalogItemXml>(href, CATALOG_ITEM_XML)
            .await
            .map(TerremarkCatalogItem::from)
            .none_on_not_found()
    }

    async fn get_customization_options(
        &self,
        href: &str,
    ) -> Result<Option<CustomizationParameters>> {
        self.get_xml::<CustomizationParameters>(href, OPTIONS_XML)
            .await
            .none_on_not_found()
    }

    async fn get_compute_options(&self, href: &str) -> Result<Vec<ComputeOption>> {
        Ok(self
            .get_xml::<ComputeOptionsXml>(href, OPTIONS_XML)
            .await
            .none_on_not_found()?
            .map(|o| o.items)
            .unwrap_or_default())
    }
}
