use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;

use super::options::{
    ServerCloneOptions, ServerCreateOptions, ServerDestroyOptions, ServerEditOptions, ServerSpec,
    ServerStatusOptions, ServerStopOptions,
};
use super::types::{
    ResourceUsage, Server, ServerAllowedArguments, ServerConsole, ServerDetails, ServerLimit,
    ServerStatus, ServerTemplate,
};

/// GleSYS server operations.
///
/// Lookups of a single server return `None` when the server does not exist.
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// All servers on the account.
    async fn list_servers(&self) -> Result<Vec<Server>>;

    /// Hardware configuration, addresses, cost, template and platform of a server.
    async fn get_server_details(&self, id: &str) -> Result<Option<ServerDetails>>;

    /// Up-time and hardware usage (cpu, disk, memory, bandwidth).
    async fn get_server_status(
        &self,
        id: &str,
        options: &ServerStatusOptions,
    ) -> Result<Option<ServerStatus>>;

    /// OpenVZ beancounters, keyed by limit name.
    async fn get_server_limits(&self, id: &str) -> Result<Option<BTreeMap<String, ServerLimit>>>;

    /// How to reach the server console over VNC.
    async fn get_server_console(&self, id: &str) -> Result<Option<ServerConsole>>;

    /// OS templates of every platform.
    async fn get_templates(&self) -> Result<Vec<ServerTemplate>>;

    /// Valid `create_server` arguments, keyed by platform.
    async fn get_server_allowed_arguments(&self) -> Result<BTreeMap<String, ServerAllowedArguments>>;

    /// Reset the fail counter of an OpenVZ limit.
    async fn reset_server_limit(
        &self,
        id: &str,
        limit_type: &str,
    ) -> Result<BTreeMap<String, ServerLimit>>;

    async fn reboot_server(&self, id: &str) -> Result<ServerDetails>;

    async fn start_server(&self, id: &str) -> Result<ServerDetails>;

    /// Without options no `type` is sent and GleSYS picks the stop mode.
    async fn stop_server(&self, id: &str, options: Option<ServerStopOptions>) -> Result<()>;

    async fn create_server(
        &self,
        spec: &ServerSpec,
        options: &ServerCreateOptions,
    ) -> Result<ServerDetails>;

    async fn edit_server(&self, id: &str, options: &ServerEditOptions) -> Result<ServerDetails>;

    /// Clone `id` into a new server named `hostname`.
    async fn clone_server(
        &self,
        id: &str,
        hostname: &str,
        options: &ServerCloneOptions,
    ) -> Result<ServerDetails>;

    async fn destroy_server(&self, id: &str, options: ServerDestroyOptions)
    -> Result<ServerDetails>;

    /// Set a new root password.
    async fn reset_password(&self, id: &str, password: &str) -> Result<()>;

    /// Usage of `resource` (e.g. `cpuusage`, `diskioread`) at the given resolution
    /// (`minute`, `hour`, `day`).
    async fn resource_usage(
        &self,
        id: &str,
        resource: &str,
        resolution: &str,
    ) -> Result<ResourceUsage>;

    /// Details of every server, fetched concurrently.
    ///
    /// Servers that disappear between the listing and the detail call are skipped.
    async fn get_all_server_details(&self) -> Result<Vec<ServerDetails>> {
        let servers = self.list_servers().await?;
        let futures: Vec<_> = servers
            .iter()
            .map(|s| self.get_server_details(&s.id))
            .collect();
        let results = futures::future::join_all(futures).await;

        let mut details = Vec::with_capacity(results.len());
        for result in results {
            if let Some(d) = result? {
                details.push(d);
            }
        }
        Ok(details)
    }
}
