use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::Result;

use super::types::{Organization, User};

/// Chef Server organizations, users and API clients.
///
/// Creating a client, user or organization returns the PEM private key the server
/// generated for it; the server keeps only the public half.
#[async_trait]
pub trait ChefApi: Send + Sync {
    /// Create an API client in `org` and return its private key.
    async fn create_client_in_org(&self, org: &str, client: &str) -> Result<String>;

    /// Replace the key pair of an existing client and return the new private key.
    async fn generate_key_for_client_in_org(&self, org: &str, client: &str) -> Result<String>;

    async fn client_exists_in_org(&self, org: &str, client: &str) -> Result<bool>;

    /// Deleting a client that does not exist succeeds.
    async fn delete_client_in_org(&self, org: &str, client: &str) -> Result<()>;

    /// Names of the clients in `org`.
    async fn list_clients_in_org(&self, org: &str) -> Result<BTreeSet<String>>;

    /// Create a user and return its private key.
    async fn create_user(&self, user: &User) -> Result<String>;

    async fn update_user(&self, user: &User) -> Result<User>;

    async fn get_user(&self, username: &str) -> Result<Option<User>>;

    /// Delete a user, returning its last state.
    async fn delete_user(&self, username: &str) -> Result<User>;

    /// Create an organization and return the validator client's private key.
    async fn create_org(&self, org: &Organization) -> Result<String>;

    async fn update_org(&self, org: &Organization) -> Result<Organization>;

    async fn get_org(&self, name: &str) -> Result<Option<Organization>>;

    /// Delete an organization, returning its last state.
    async fn delete_org(&self, name: &str) -> Result<Organization>;
}
