//! Terremark vCloud types
//!
//! vCloud 0.8 carries references as attributes (`href`, `name`, `type`), so the wire
//! structs below read `@`-prefixed fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub(crate) const COMPUTE_OPTIONS_LINK: &str = "Compute Options";
pub(crate) const CUSTOMIZATION_OPTIONS_LINK: &str = "Customization Options";

// ============ Wire ============

#[derive(Debug, Deserialize)]
pub struct ReferenceXml {
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub media_type: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkXml {
    #[serde(rename = "@rel", default)]
    pub rel: String,
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub media_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogXml {
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub media_type: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "CatalogItems", default)]
    pub catalog_items: CatalogItemsXml,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogItemsXml {
    #[serde(rename = "CatalogItem", default)]
    pub items: Vec<ReferenceXml>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogItemXml {
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub media_type: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Link", default)]
    pub links: Vec<LinkXml>,
    #[serde(rename = "Entity")]
    pub entity: Option<ReferenceXml>,
    #[serde(rename = "Property", default)]
    pub properties: Vec<PropertyXml>,
}

#[derive(Debug, Deserialize)]
pub struct PropertyXml {
    #[serde(rename = "@key")]
    pub key: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ComputeOptionsXml {
    #[serde(rename = "ComputeOption", default)]
    pub items: Vec<ComputeOption>,
}

/// `<Error message=".." majorErrorCode=".." minorErrorCode=".."/>`
#[derive(Debug, Deserialize)]
pub struct ErrorXml {
    #[serde(rename = "@message", default)]
    pub message: String,
    #[serde(rename = "@majorErrorCode")]
    pub major_error_code: Option<String>,
    #[serde(rename = "@minorErrorCode")]
    pub minor_error_code: Option<String>,
}

// ============ Domain ============

/// Typed pointer to another vCloud resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceType {
    pub name: String,
    pub href: String,
    /// vCloud media type, e.g. `application/vnd.vmware.vcloud.catalogItem+xml`.
    pub media_type: String,
}

impl From<ReferenceXml> for ReferenceType {
    fn from(x: ReferenceXml) -> Self {
        Self {
            name: x.name,
            href: x.href,
            media_type: x.media_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// `up`, `down`, `add`, ...
    pub rel: String,
    pub reference: ReferenceType,
}

impl From<LinkXml> for Link {
    fn from(x: LinkXml) -> Self {
        Self {
            rel: x.rel,
            reference: ReferenceType {
                name: x.name,
                href: x.href,
                media_type: x.media_type,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub name: String,
    pub href: String,
    pub media_type: String,
    pub description: Option<String>,
    pub items: Vec<ReferenceType>,
}

impl Catalog {
    /// The item reference called `name`.
    pub fn item(&self, name: &str) -> Option<&ReferenceType> {
        self.items.iter().find(|r| r.name == name)
    }
}

impl From<CatalogXml> for Catalog {
    fn from(x: CatalogXml) -> Self {
        Self {
            name: x.name,
            href: x.href,
            media_type: x.media_type,
            description: x.description,
            items: x
                .catalog_items
                .items
                .into_iter()
                .map(ReferenceType::from)
                .collect(),
        }
    }
}

/// A catalog entry (a vApp template) with Terremark's option links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerremarkCatalogItem {
    pub name: String,
    pub href: String,
    pub media_type: String,
    pub description: Option<String>,
    /// The template this item instantiates.
    pub entity: Option<ReferenceType>,
    pub properties: BTreeMap<String, String>,
    pub links: Vec<Link>,
}

impl TerremarkCatalogItem {
    fn down_link(&self, name: &str) -> Option<&ReferenceType> {
        self.links
            .iter()
            .find(|l| l.rel == "down" && l.reference.name == name)
            .map(|l| &l.reference)
    }

    /// Where to fetch the CPU/memory combinations offered for this item.
    pub fn compute_options(&self) -> Option<&ReferenceType> {
        self.down_link(COMPUTE_OPTIONS_LINK)
    }

    /// Where to fetch which parts of the guest can be customized.
    pub fn customization_options(&self) -> Option<&ReferenceType> {
        self.down_link(CUSTOMIZATION_OPTIONS_LINK)
    }
}

impl From<CatalogItemXml> for TerremarkCatalogItem {
    fn from(x: CatalogItemXml) -> Self {
        Self {
            name: x.name,
            href: x.href,
            media_type: x.media_type,
            description: x.description,
            entity: x.entity.map(ReferenceType::from),
            properties: x
                .properties
                .into_iter()
                .map(|p| (p.key, p.value))
                .collect(),
            links: x.links.into_iter().map(Link::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomizationParameters {
    #[serde(rename = "CustomizeNetwork", default)]
    pub customize_network: bool,
    #[serde(rename = "CustomizePassword", default)]
    pub customize_password: bool,
}

/// A processor/memory combination and its hourly price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputeOption {
    #[serde(rename = "Processor")]
    pub processor_count: u32,
    /// Megabytes.
    #[serde(rename = "Memory")]
    pub memory: u64,
    #[serde(rename = "Price")]
    pub price: f64,
}
