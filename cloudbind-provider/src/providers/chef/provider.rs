//! Chef Server `ChefApi` implementation

use std::collections::BTreeSet;

use async_trait::async_trait;
use reqwest::Method;

use crate::binding::{NotFoundExt, expand_path, extract_key_set, extract_string_field};
use crate::error::{ProviderError, Result};
use crate::traits::{CloudProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{FieldType, ProviderCredentialField, ProviderMetadata, ProviderType};

use super::ChefProvider;
use super::api::ChefApi;
use super::types::{ClientNameBody, GenerateKeyBody, Organization, User};

const CLIENTS: &str = "/organizations/{orgname}/clients";
const CLIENT: &str = "/organizations/{orgname}/clients/{clientname}";
const USERS: &str = "/users";
const USER: &str = "/users/{username}";
const ORGS: &str = "/organizations";
const ORG: &str = "/organizations/{orgname}";

impl ChefProvider {
    fn path(&self, template: &str, params: &[(&str, &str)]) -> Result<String> {
        expand_path(template, params, self.provider_name())
    }

    /// Send a request whose response carries a freshly generated `private_key`.
    async fn request_private_key(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String> {
        let response = self
            .request(method, path, body, ErrorContext::resource(path))
            .await?;
        extract_string_field(&response.body, "private_key", self.provider_name())
    }
}

#[async_trait]
impl CloudProvider for ChefProvider {
    fn id(&self) -> &'static str {
        "chef"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Chef,
            name: "Chef Server".to_string(),
            description: "Chef Server organizations, users and API clients".to_string(),
            default_endpoint: "https://api.opscode.com".to_string(),
            api_version: "0.10.4".to_string(),
            required_fields: vec![
                ProviderCredentialField::new("serverUrl", "Server URL", FieldType::Text)
                    .placeholder("https://chef.example.com"),
                ProviderCredentialField::new("clientName", "Client Name", FieldType::Text)
                    .placeholder("admin"),
                ProviderCredentialField::new("privateKey", "Private Key", FieldType::Multiline)
                    .help_text("PEM encoded RSA key of the API client"),
            ],
        }
    }

    /// The signed lookup of our own user; a missing user still proves the signature.
    async fn validate_credentials(&self) -> Result<bool> {
        match self.get_user(&self.client_name).await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ChefApi for ChefProvider {
    async fn create_client_in_org(&self, org: &str, client: &str) -> Result<String> {
        let path = self.path(CLIENTS, &[("orgname", org)])?;
        let body = self.json_body(&ClientNameBody { clientname: client })?;
        log::info!("[chef] Creating client '{client}' in organization '{org}'");
        self.request_private_key(Method::POST, &path, body).await
    }

    async fn generate_key_for_client_in_org(&self, org: &str, client: &str) -> Result<String> {
        let path = self.path(CLIENT, &[("orgname", org), ("clientname", client)])?;
        let body = self.json_body(&GenerateKeyBody {
            clientname: client,
            private_key: true,
        })?;
        self.request_private_key(Method::PUT, &path, body).await
    }

    async fn client_exists_in_org(&self, org: &str, client: &str) -> Result<bool> {
        let path = self.path(CLIENT, &[("orgname", org), ("clientname", client)])?;
        self.request(Method::HEAD, &path, None, ErrorContext::resource(&path))
            .await
            .false_on_not_found()
    }

    async fn delete_client_in_org(&self, org: &str, client: &str) -> Result<()> {
        let path = self.path(CLIENT, &[("orgname", org), ("clientname", client)])?;
        self.request(Method::DELETE, &path, None, ErrorContext::resource(&path))
            .await
            .ignore_not_found()
    }

    async fn list_clients_in_org(&self, org: &str) -> Result<BTreeSet<String>> {
        let path = self.path(CLIENTS, &[("orgname", org)])?;
        let response = self
            .request(Method::GET, &path, None, ErrorContext::resource(&path))
            .await?;
        extract_key_set(&response.body, self.provider_name())
    }

    async fn create_user(&self, user: &User) -> Result<String> {
        let body = self.json_body(user)?;
        log::info!("[chef] Creating user '{}'", user.username);
        self.request_private_key(Method::POST, USERS, body).await
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let path = self.path(USER, &[("username", &user.username)])?;
        let body = self.json_body(user)?;
        self.request_json(Method::PUT, &path, body, ErrorContext::resource(&path))
            .await
    }

    async fn get_user(&self, username: &str) -> Result<Option<User>> {
        let path = self.path(USER, &[("username", username)])?;
        self.request_json(Method::GET, &path, None, ErrorContext::resource(&path))
            .await
            .none_on_not_found()
    }

    async fn delete_user(&self, username: &str) -> Result<User> {
        let path = self.path(USER, &[("username", username)])?;
        self.request_json(Method::DELETE, &path, None, ErrorContext::resource(&path))
            .await
    }

    async fn create_org(&self, org: &Organization) -> Result<String> {
        let body = self.json_body(org)?;
        log::info!("[chef] Creating organization '{}'", org.name);
        self.request_private_key(Method::POST, ORGS, body).await
    }

    async fn update_org(&self, org: &Organization) -> Result<Organization> {
        let path = self.path(ORG, &[("orgname", &org.name)])?;
        let body = self.json_body(org)?;
        self.request_json(Method::PUT, &path, body, ErrorContext::resource(&path))
            .await
    }

    async fn get_org(&self, name: &str) -> Result<Option<Organization>> {
        let path = self.path(ORG, &[("orgname", name)])?;
        self.request_json(Method::GET, &path, None, ErrorContext::resource(&path))
            .await
            .none_on_not_found()
    }

    async fn delete_org(&self, name: &str) -> Result<Organization> {
        let path = self.path(ORG, &[("orgname", name)])?;
        self.request_json(Method::DELETE, &path, None, ErrorContext::resource(&path))
            .await
    }
}
