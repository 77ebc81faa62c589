//! GleSYS API types
//!
//! Every response is wrapped as `{"response": {"status": {...}, <payload>}}`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{datetime, lenient};

// ============ Envelope ============

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub response: T,
}

/// `response.status` of every GleSYS reply.
#[derive(Debug, Deserialize)]
pub struct Status {
    #[serde(deserialize_with = "lenient::u32")]
    pub code: u32,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusOnly {
    pub status: Option<Status>,
}

#[derive(Debug, Deserialize)]
pub struct ServersPayload {
    #[serde(default)]
    pub servers: Vec<Server>,
}

#[derive(Debug, Deserialize)]
pub struct ServerPayload<T> {
    pub server: T,
}

#[derive(Debug, Deserialize)]
pub struct LimitsPayload {
    #[serde(default)]
    pub limits: BTreeMap<String, ServerLimit>,
}

#[derive(Debug, Deserialize)]
pub struct ConsolePayload {
    pub console: ServerConsole,
}

#[derive(Debug, Deserialize)]
pub struct TemplatesPayload {
    #[serde(default)]
    pub templates: BTreeMap<String, Vec<ServerTemplate>>,
}

#[derive(Debug, Deserialize)]
pub struct AllowedArgumentsPayload {
    #[serde(default)]
    pub argumentslist: BTreeMap<String, ServerAllowedArguments>,
}

#[derive(Debug, Deserialize)]
pub struct UsagePayload {
    pub usage: ResourceUsage,
}

// ============ Domain ============

/// Summary of a server as returned by `server/list`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "serverid")]
    pub id: String,
    pub hostname: String,
    pub datacenter: String,
    pub platform: String,
}

/// Power state of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    Running,
    Stopped,
    Locked,
    #[serde(other)]
    Unknown,
}

/// Recurring cost of a server or an IP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    #[serde(deserialize_with = "lenient::f64")]
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub timeperiod: Option<String>,
}

/// An IP address attached to a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ip {
    #[serde(rename = "ipaddress")]
    pub address: String,
    #[serde(deserialize_with = "lenient::u32")]
    pub version: u32,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cost: Option<f64>,
}

/// Full configuration of a server (`server/details` and every mutating call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDetails {
    #[serde(rename = "serverid")]
    pub id: String,
    pub hostname: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "templatename", default)]
    pub template_name: Option<String>,
    pub datacenter: String,
    pub platform: String,
    #[serde(default)]
    pub state: Option<ServerState>,
    #[serde(rename = "cpucores", deserialize_with = "lenient::u32")]
    pub cpu_cores: u32,
    /// Memory in MB.
    #[serde(rename = "memorysize", deserialize_with = "lenient::u32")]
    pub memory_size_mb: u32,
    /// Disk in GB.
    #[serde(rename = "disksize", deserialize_with = "lenient::u32")]
    pub disk_size_gb: u32,
    /// Monthly transfer in GB.
    #[serde(rename = "transfer", deserialize_with = "lenient::u32")]
    pub transfer_gb: u32,
    #[serde(default)]
    pub cost: Option<Cost>,
    #[serde(rename = "iplist", default)]
    pub ips: Vec<Ip>,
}

/// Usage of one resource against its maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsageGauge {
    #[serde(deserialize_with = "lenient::f64")]
    pub usage: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub max: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Uptime of a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uptime {
    #[serde(deserialize_with = "lenient::u64")]
    pub current: u64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Live status of a server (`server/status`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub state: ServerState,
    #[serde(default)]
    pub cpu: Option<ResourceUsageGauge>,
    #[serde(default)]
    pub memory: Option<ResourceUsageGauge>,
    #[serde(default)]
    pub disk: Option<ResourceUsageGauge>,
    #[serde(default)]
    pub bandwidth: Option<ResourceUsageGauge>,
    #[serde(default)]
    pub uptime: Option<Uptime>,
}

/// One OpenVZ beancounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerLimit {
    #[serde(deserialize_with = "lenient::u64")]
    pub held: u64,
    #[serde(rename = "maxheld", deserialize_with = "lenient::u64")]
    pub max_held: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub barrier: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub limit: u64,
    #[serde(rename = "failcnt", deserialize_with = "lenient::u64")]
    pub fail_count: u64,
}

/// Remote console connection details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConsole {
    pub host: String,
    #[serde(deserialize_with = "lenient::u32")]
    pub port: u32,
    pub password: String,
    #[serde(default)]
    pub protocol: Option<String>,
}

/// An operating system template available for new servers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerTemplate {
    pub name: String,
    #[serde(rename = "minimumdisksize", deserialize_with = "lenient::u32")]
    pub min_disk_size_gb: u32,
    #[serde(rename = "minimummemorysize", deserialize_with = "lenient::u32")]
    pub min_memory_size_mb: u32,
    #[serde(rename = "operatingsystem")]
    pub os: String,
    pub platform: String,
}

/// Valid `server/create` argument values for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerAllowedArguments {
    #[serde(rename = "disksize", default, deserialize_with = "lenient::vec_u32")]
    pub disk_sizes_gb: Vec<u32>,
    #[serde(rename = "memorysize", default, deserialize_with = "lenient::vec_u32")]
    pub memory_sizes_mb: Vec<u32>,
    #[serde(rename = "cpucores", default, deserialize_with = "lenient::vec_u32")]
    pub cpu_cores: Vec<u32>,
    #[serde(rename = "template", default)]
    pub templates: Vec<String>,
    #[serde(rename = "transfer", default, deserialize_with = "lenient::vec_u32")]
    pub transfers_gb: Vec<u32>,
    #[serde(rename = "datacenter", default)]
    pub datacenters: Vec<String>,
}

/// Describes a `server/resourceusage` series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsageInfo {
    #[serde(rename = "type")]
    pub resource: String,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// One sample of a resource usage series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsageValue {
    #[serde(with = "datetime", default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::f64")]
    pub value: f64,
}

/// Resource usage over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub info: ResourceUsageInfo,
    #[serde(default)]
    pub values: Vec<ResourceUsageValue>,
}
