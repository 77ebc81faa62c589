//! Optional arguments of GleSYS server calls.
//!
//! Each options type only contributes the form fields that were set.

use crate::binding::FormParams;
use crate::error::{ProviderError, Result};

/// Options for `server/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStatusOptions {
    status_type: Option<String>,
}

impl ServerStatusOptions {
    /// Restrict the reply to one status type (`state`, `cpu`, `memory`, `disk`, `bandwidth`, `uptime`).
    pub fn status_type(status_type: impl Into<String>) -> Self {
        Self {
            status_type: Some(status_type.into()),
        }
    }

    pub(crate) fn apply(&self, form: &mut FormParams) {
        form.push_opt("statustype", self.status_type.as_deref());
    }
}

/// How to stop a server. Passing no option leaves the choice to GleSYS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStopOptions {
    /// Ask the OS to shut down.
    Soft,
    /// Cut the power.
    Hard,
}

impl ServerStopOptions {
    pub(crate) fn apply(self, form: &mut FormParams) {
        form.push(
            "type",
            match self {
                Self::Soft => "soft",
                Self::Hard => "hard",
            },
        );
    }
}

/// Whether to keep the server's IP addresses in the account when destroying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerDestroyOptions {
    KeepIp,
    DiscardIp,
}

impl ServerDestroyOptions {
    pub(crate) fn apply(self, form: &mut FormParams) {
        form.push("keepip", u8::from(self == Self::KeepIp));
    }
}

/// Mandatory arguments of `server/create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    pub datacenter: String,
    /// `Xen` or `OpenVZ`.
    pub platform: String,
    pub hostname: String,
    pub template_name: String,
    pub disk_size_gb: u32,
    pub memory_size_mb: u32,
    pub cpu_cores: u32,
    pub root_password: String,
    pub transfer_gb: u32,
}

impl ServerSpec {
    pub(crate) fn validate(&self, provider: &str) -> Result<()> {
        let required = [
            ("datacenter", self.datacenter.as_str()),
            ("platform", self.platform.as_str()),
            ("hostname", self.hostname.as_str()),
            ("templatename", self.template_name.as_str()),
            ("rootpassword", self.root_password.as_str()),
        ];
        if let Some((param, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: (*param).to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        let sizes = [
            ("disksize", self.disk_size_gb),
            ("memorysize", self.memory_size_mb),
            ("cpucores", self.cpu_cores),
        ];
        if let Some((param, _)) = sizes.iter().find(|(_, v)| *v == 0) {
            return Err(ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: (*param).to_string(),
                detail: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn apply(&self, form: &mut FormParams) {
        form.push("datacenter", &self.datacenter);
        form.push("platform", &self.platform);
        form.push("hostname", &self.hostname);
        form.push("templatename", &self.template_name);
        form.push("disksize", self.disk_size_gb);
        form.push("memorysize", self.memory_size_mb);
        form.push("cpucores", self.cpu_cores);
        form.push("rootpassword", &self.root_password);
        form.push("transfer", self.transfer_gb);
    }
}

/// Optional arguments of `server/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCreateOptions {
    description: Option<String>,
    ip: Option<String>,
}

impl ServerCreateOptions {
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Use an IP address already reserved in the account.
    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub(crate) fn apply(&self, form: &mut FormParams) {
        form.push_opt("description", self.description.as_deref());
        form.push_opt("ip", self.ip.as_deref());
    }
}

/// Settings to change with `server/edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerEditOptions {
    disk_size_gb: Option<u32>,
    memory_size_mb: Option<u32>,
    cpu_cores: Option<u32>,
    transfer_gb: Option<u32>,
    hostname: Option<String>,
    description: Option<String>,
}

impl ServerEditOptions {
    #[must_use]
    pub fn disk_size_gb(mut self, size: u32) -> Self {
        self.disk_size_gb = Some(size);
        self
    }

    #[must_use]
    pub fn memory_size_mb(mut self, size: u32) -> Self {
        self.memory_size_mb = Some(size);
        self
    }

    #[must_use]
    pub fn cpu_cores(mut self, cores: u32) -> Self {
        self.cpu_cores = Some(cores);
        self
    }

    #[must_use]
    pub fn transfer_gb(mut self, transfer: u32) -> Self {
        self.transfer_gb = Some(transfer);
        self
    }

    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn apply(&self, form: &mut FormParams) {
        form.push_opt("disksize", self.disk_size_gb);
        form.push_opt("memorysize", self.memory_size_mb);
        form.push_opt("cpucores", self.cpu_cores);
        form.push_opt("transfer", self.transfer_gb);
        form.push_opt("hostname", self.hostname.as_deref());
        form.push_opt("description", self.description.as_deref());
    }
}

/// Settings of the copy made by `server/clone`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCloneOptions {
    disk_size_gb: Option<u32>,
    memory_size_mb: Option<u32>,
    cpu_cores: Option<u32>,
    transfer_gb: Option<u32>,
    datacenter: Option<String>,
    description: Option<String>,
}

impl ServerCloneOptions {
    #[must_use]
    pub fn disk_size_gb(mut self, size: u32) -> Self {
        self.disk_size_gb = Some(size);
        self
    }

    #[must_use]
    pub fn memory_size_mb(mut self, size: u32) -> Self {
        self.memory_size_mb = Some(size);
        self
    }

    #[must_use]
    pub fn cpu_cores(mut self, cores: u32) -> Self {
        self.cpu_cores = Some(cores);
        self
    }

    #[must_use]
    pub fn transfer_gb(mut self, transfer: u32) -> Self {
        self.transfer_gb = Some(transfer);
        self
    }

    #[must_use]
    pub fn datacenter(mut self, datacenter: impl Into<String>) -> Self {
        self.datacenter = Some(datacenter.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn apply(&self, form: &mut FormParams) {
        form.push_opt("disksize", self.disk_size_gb);
        form.push_opt("memorysize", self.memory_size_mb);
        form.push_opt("cpucores", self.cpu_cores);
        form.push_opt("transfer", self.transfer_gb);
        form.push_opt("datacenter", self.datacenter.as_deref());
        form.push_opt("description", self.description.as_deref());
    }
}
