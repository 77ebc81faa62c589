//! GleSYS `ServerApi` implementation

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::binding::{FormParams, NotFoundExt};
use crate::error::{ProviderError, Result};
use crate::traits::{CloudProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{FieldType, ProviderCredentialField, ProviderMetadata, ProviderType};

use super::api::ServerApi;
use super::options::{
    ServerCloneOptions, ServerCreateOptions, ServerDestroyOptions, ServerEditOptions, ServerSpec,
    ServerStatusOptions, ServerStopOptions,
};
use super::types::{
    AllowedArgumentsPayload, ConsolePayload, LimitsPayload, ResourceUsage, Server,
    ServerAllowedArguments, ServerConsole, ServerDetails, ServerLimit, ServerPayload,
    ServerStatus, ServerTemplate, ServersPayload, TemplatesPayload, UsagePayload,
};
use super::{GLESYS_API_BASE, GlesysProvider};

fn server_form(id: &str) -> FormParams {
    FormParams::new().with("serverid", id)
}

impl GlesysProvider {
    fn require_id(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "serverid".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    async fn server_details_call(&self, action: &str, form: &FormParams, id: &str) -> Result<ServerDetails> {
        let payload: ServerPayload<ServerDetails> =
            self.call(action, form, ErrorContext::resource(id)).await?;
        Ok(payload.server)
    }
}

#[async_trait]
impl CloudProvider for GlesysProvider {
    fn id(&self) -> &'static str {
        "glesys"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Glesys,
            name: "GleSYS".to_string(),
            description: "GleSYS cloud servers (Xen and OpenVZ)".to_string(),
            default_endpoint: GLESYS_API_BASE.to_string(),
            api_version: "1".to_string(),
            required_fields: vec![
                ProviderCredentialField::new("username", "Username", FieldType::Text)
                    .placeholder("cl12345"),
                ProviderCredentialField::new("apiKey", "API Key", FieldType::Password)
                    .help_text("Created under API keys in the GleSYS customer panel"),
            ],
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.list_servers().await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ServerApi for GlesysProvider {
    async fn list_servers(&self) -> Result<Vec<Server>> {
        let payload: ServersPayload = self
            .call("list", &FormParams::new(), ErrorContext::default())
            .await?;
        Ok(payload.servers)
    }

    async fn get_server_details(&self, id: &str) -> Result<Option<ServerDetails>> {
        self.require_id(id)?;
        self.server_details_call("details", &server_form(id), id)
            .await
            .none_on_not_found()
    }

    async fn get_server_status(
        &self,
        id: &str,
        options: &ServerStatusOptions,
    ) -> Result<Option<ServerStatus>> {
        self.require_id(id)?;
        let mut form = server_form(id);
        options.apply(&mut form);
        self.call::<ServerPayload<ServerStatus>>("status", &form, ErrorContext::resource(id))
            .await
            .map(|p| p.server)
            .none_on_not_found()
    }

    async fn get_server_limits(&self, id: &str) -> Result<Option<BTreeMap<String, ServerLimit>>> {
        self.require_id(id)?;
        self.call::<LimitsPayload>("limits", &server_form(id), ErrorContext::resource(id))
            .await
            .map(|p| p.limits)
            .none_on_not_found()
    }

    async fn get_server_console(&self, id: &str) -> Result<Option<ServerConsole>> {
        self.require_id(id)?;
        self.call::<ConsolePayload>("console", &server_form(id), ErrorContext::resource(id))
            .await
            .map(|p| p.console)
            .none_on_not_found()
    }

    async fn get_templates(&self) -> Result<Vec<ServerTemplate>> {
        let payload: TemplatesPayload = self
            .call("templates", &FormParams::new(), ErrorContext::default())
            .await?;
        Ok(payload.templates.into_values().flatten().collect())
    }

    async fn get_server_allowed_arguments(&self) -> Result<BTreeMap<String, ServerAllowedArguments>> {
        let payload: AllowedArgumentsPayload = self
            .call("allowedarguments", &FormParams::new(), ErrorContext::default())
            .await?;
        Ok(payload.argumentslist)
    }

    async fn reset_server_limit(
        &self,
        id: &str,
        limit_type: &str,
    ) -> Result<BTreeMap<String, ServerLimit>> {
        self.require_id(id)?;
        let form = server_form(id).with("type", limit_type);
        let payload: LimitsPayload = self
            .call("resetlimit", &form, ErrorContext::resource(id))
            .await?;
        Ok(payload.limits)
    }

    async fn reboot_server(&self, id: &str) -> Result<ServerDetails> {
        self.require_id(id)?;
        self.server_details_call("reboot", &server_form(id), id).await
    }

    async fn start_server(&self, id: &str) -> Result<ServerDetails> {
        self.require_id(id)?;
        self.server_details_call("start", &server_form(id), id).await
    }

    async fn stop_server(&self, id: &str, options: Option<ServerStopOptions>) -> Result<()> {
        self.require_id(id)?;
        let mut form = server_form(id);
        if let Some(options) = options {
            options.apply(&mut form);
        }
        self.call_void("stop", &form, ErrorContext::resource(id)).await
    }

    async fn create_server(
        &self,
        spec: &ServerSpec,
        options: &ServerCreateOptions,
    ) -> Result<ServerDetails> {
        spec.validate(self.provider_name())?;
        let mut form = FormParams::new();
        spec.apply(&mut form);
        options.apply(&mut form);
        log::info!(
            "[glesys] Creating server '{}' in {} ({})",
            spec.hostname,
            spec.datacenter,
            spec.platform
        );
        self.server_details_call("create", &form, &spec.hostname)
            .await
    }

    async fn edit_server(&self, id: &str, options: &ServerEditOptions) -> Result<ServerDetails> {
        self.require_id(id)?;
        let mut form = server_form(id);
        options.apply(&mut form);
        self.server_details_call("edit", &form, id).await
    }

    async fn clone_server(
        &self,
        id: &str,
        hostname: &str,
        options: &ServerCloneOptions,
    ) -> Result<ServerDetails> {
        self.require_id(id)?;
        let mut form = server_form(id).with("hostname", hostname);
        options.apply(&mut form);
        self.server_details_call("clone", &form, id).await
    }

    async fn destroy_server(
        &self,
        id: &str,
        options: ServerDestroyOptions,
    ) -> Result<ServerDetails> {
        self.require_id(id)?;
        let mut form = server_form(id);
        options.apply(&mut form);
        log::info!("[glesys] Destroying server {id} ({options:?})");
        self.server_details_call("destroy", &form, id).await
    }

    async fn reset_password(&self, id: &str, password: &str) -> Result<()> {
        self.require_id(id)?;
        let form = server_form(id).with("rootpassword", password);
        self.call_void("resetpassword", &form, ErrorContext::resource(id))
            .await
    }

    async fn resource_usage(
        &self,
        id: &str,
        resource: &str,
        resolution: &str,
    ) -> Result<ResourceUsage> {
        self.require_id(id)?;
        let form = server_form(id)
            .with("resource", resource)
            .with("resolution", resolution);
        let payload: UsagePayload = self
            .call("resourceusage", &form, ErrorContext::resource(id))
            .await?;
        Ok(payload.usage)
    }
}
