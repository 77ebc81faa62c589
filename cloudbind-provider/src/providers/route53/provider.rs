//! Route 53 `HostedZoneApi` implementation

use async_trait::async_trait;
use reqwest::Method;

use crate::binding::{NotFoundExt, expand_path};
use crate::error::{ProviderError, Result};
use crate::traits::{CloudProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{FieldType, ProviderCredentialField, ProviderMetadata, ProviderType};

use super::api::HostedZoneApi;
use super::types::{
    Change, ChangeInfoResponse, ChangeInfoXml, CreateHostedZoneRequest, CreateHostedZoneResponse,
    GetHostedZoneResponse, HostedZoneConfigRequest, ListHostedZonesResponse, NewZone, Zone,
    ZoneAndNameServers, ZoneList,
};
use super::{ROUTE53_API_VERSION, ROUTE53_ENDPOINT, Route53Provider};

impl Route53Provider {
    fn change_from(&self, info: ChangeInfoXml) -> Result<Change> {
        Change::try_from(info).map_err(|e| self.parse_error(e))
    }

    fn xmlns(&self) -> String {
        format!("https://route53.amazonaws.com/doc/{}/", self.api_version)
    }
}

#[async_trait]
impl CloudProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Route53,
            name: "Amazon Route 53".to_string(),
            description: "Route 53 hosted zones".to_string(),
            default_endpoint: ROUTE53_ENDPOINT.to_string(),
            api_version: ROUTE53_API_VERSION.to_string(),
            required_fields: vec![
                ProviderCredentialField::new("accessKeyId", "Access Key ID", FieldType::Text)
                    .placeholder("AKIA..."),
                ProviderCredentialField::new(
                    "secretAccessKey",
                    "Secret Access Key",
                    FieldType::Password,
                ),
            ],
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.list_zones(None).await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl HostedZoneApi for Route53Provider {
    async fn list_zones(&self, marker: Option<&str>) -> Result<ZoneList> {
        let query: Vec<(&str, &str)> = marker.map(|m| ("marker", m)).into_iter().collect();
        let raw: ListHostedZonesResponse = self
            .request_xml(
                Method::GET,
                "/hostedzone",
                &query,
                None,
                ErrorContext::default(),
            )
            .await?;
        Ok(raw.into())
    }

    async fn get_zone(&self, id: &str) -> Result<Option<ZoneAndNameServers>> {
        let path = expand_path("/hostedzone/{id}", &[("id", id)], self.provider_name())?;
        self.request_xml::<GetHostedZoneResponse>(
            Method::GET,
            &path,
            &[],
            None,
            ErrorContext::resource(id),
        )
        .await
        .map(|raw| ZoneAndNameServers {
            zone: Zone::from(raw.hosted_zone),
            name_servers: raw.delegation_set.name_servers.items,
        })
        .none_on_not_found()
    }

    async fn create_zone(
        &self,
        name: &str,
        caller_reference: Option<&str>,
        comment: Option<&str>,
    ) -> Result<NewZone> {
        let caller_reference =
            caller_reference.map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_string);

        let body = quick_xml::se::to_string(&CreateHostedZoneRequest {
            xmlns: self.xmlns(),
            name,
            caller_reference: &caller_reference,
            config: comment.map(|comment| HostedZoneConfigRequest { comment }),
        })
        .map_err(|e| self.serialization_error(e))?;

        log::info!("[route53] Creating hosted zone '{name}' (caller reference {caller_reference})");

        let raw: CreateHostedZoneResponse = self
            .request_xml(
                Method::POST,
                "/hostedzone",
                &[],
                Some(body),
                ErrorContext::resource(name),
            )
            .await?;

        Ok(NewZone {
            zone: Zone::from(raw.hosted_zone),
            change: self.change_from(raw.change_info)?,
            name_servers: raw.delegation_set.name_servers.items,
        })
    }

    async fn delete_zone(&self, id: &str) -> Result<Option<Change>> {
        let path = expand_path("/hostedzone/{id}", &[("id", id)], self.provider_name())?;
        log::info!("[route53] Deleting hosted zone {id}");
        let Some(raw) = self
            .request_xml::<ChangeInfoResponse>(
                Method::DELETE,
                &path,
                &[],
                None,
                ErrorContext::resource(id),
            )
            .await
            .none_on_not_found()?
        else {
            return Ok(None);
        };
        self.change_from(raw.change_info).map(Some)
    }

    async fn get_change(&self, id: &str) -> Result<Option<Change>> {
        let path = expand_path("/change/{id}", &[("id", id)], self.provider_name())?;
        let Some(raw) = self
            .request_xml::<ChangeInfoResponse>(
                Method::GET,
                &path,
                &[],
                None,
                ErrorContext::resource(id),
            )
            .await
            .none_on_not_found()?
        else {
            return Ok(None);
        };
        self.change_from(raw.change_info).map(Some)
    }
}
