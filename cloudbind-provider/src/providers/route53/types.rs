//! Route 53 types
//!
//! The `*Xml` structs mirror the 2013-04-01 XML documents; the public domain types are
//! built from them with the `/hostedzone/` and `/change/` id prefixes removed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime::parse_timestamp;

// ============ Wire: responses ============

#[derive(Debug, Deserialize)]
pub struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZones,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZones {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<HostedZoneXml>,
}

#[derive(Debug, Deserialize)]
pub struct HostedZoneXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CallerReference")]
    pub caller_reference: String,
    #[serde(rename = "Config")]
    pub config: Option<HostedZoneConfigXml>,
    #[serde(rename = "ResourceRecordSetCount", default)]
    pub resource_record_set_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct HostedZoneConfigXml {
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DelegationSetXml {
    #[serde(rename = "NameServers", default)]
    pub name_servers: NameServersXml,
}

#[derive(Debug, Default, Deserialize)]
pub struct NameServersXml {
    #[serde(rename = "NameServer", default)]
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetHostedZoneResponse {
    #[serde(rename = "HostedZone")]
    pub hosted_zone: HostedZoneXml,
    #[serde(rename = "DelegationSet", default)]
    pub delegation_set: DelegationSetXml,
}

#[derive(Debug, Deserialize)]
pub struct CreateHostedZoneResponse {
    #[serde(rename = "HostedZone")]
    pub hosted_zone: HostedZoneXml,
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
    #[serde(rename = "DelegationSet", default)]
    pub delegation_set: DelegationSetXml,
}

/// Body of `DeleteHostedZoneResponse` and `GetChangeResponse`.
#[derive(Debug, Deserialize)]
pub struct ChangeInfoResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
}

#[derive(Debug, Deserialize)]
pub struct ChangeInfoXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SubmittedAt")]
    pub submitted_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: ErrorXml,
}

#[derive(Debug, Deserialize)]
pub struct ErrorXml {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}

// ============ Wire: requests ============

#[derive(Debug, Serialize)]
#[serde(rename = "CreateHostedZoneRequest")]
pub struct CreateHostedZoneRequest<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "CallerReference")]
    pub caller_reference: &'a str,
    #[serde(rename = "HostedZoneConfig", skip_serializing_if = "Option::is_none")]
    pub config: Option<HostedZoneConfigRequest<'a>>,
}

#[derive(Debug, Serialize)]
pub struct HostedZoneConfigRequest<'a> {
    #[serde(rename = "Comment")]
    pub comment: &'a str,
}

// ============ Domain ============

/// A hosted zone. `id` has no `/hostedzone/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    /// Fully qualified, with the trailing dot (`example.com.`).
    pub name: String,
    pub caller_reference: String,
    pub comment: Option<String>,
    pub resource_record_set_count: u32,
}

impl From<HostedZoneXml> for Zone {
    fn from(x: HostedZoneXml) -> Self {
        Self {
            id: strip_id_prefix(&x.id, "/hostedzone/"),
            name: x.name,
            caller_reference: x.caller_reference,
            comment: x.config.and_then(|c| c.comment),
            resource_record_set_count: x.resource_record_set_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    /// Not yet propagated to every Route 53 DNS server.
    Pending,
    #[serde(rename = "INSYNC")]
    InSync,
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::InSync => write!(f, "INSYNC"),
        }
    }
}

/// Progress of a submitted change. `id` has no `/change/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub id: String,
    pub status: ChangeStatus,
    pub submitted_at: DateTime<Utc>,
}

impl TryFrom<ChangeInfoXml> for Change {
    type Error = String;

    fn try_from(x: ChangeInfoXml) -> Result<Self, Self::Error> {
        let status = match x.status.trim() {
            "PENDING" => ChangeStatus::Pending,
            "INSYNC" => ChangeStatus::InSync,
            other => return Err(format!("unknown change status '{other}'")),
        };
        let submitted_at = parse_timestamp(x.submitted_at.trim())
            .ok_or_else(|| format!("invalid SubmittedAt '{}'", x.submitted_at))?;
        Ok(Self {
            id: strip_id_prefix(&x.id, "/change/"),
            status,
            submitted_at,
        })
    }
}

/// One page of `list_zones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneList {
    pub zones: Vec<Zone>,
    /// Marker for the next page; `None` on the last page.
    pub next_marker: Option<String>,
    pub is_truncated: bool,
}

impl From<ListHostedZonesResponse> for ZoneList {
    fn from(x: ListHostedZonesResponse) -> Self {
        Self {
            zones: x.hosted_zones.items.into_iter().map(Zone::from).collect(),
            next_marker: x.next_marker.filter(|m| !m.is_empty()),
            is_truncated: x.is_truncated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneAndNameServers {
    pub zone: Zone,
    pub name_servers: Vec<String>,
}

/// Result of `create_zone`: the zone, the change to watch and the delegation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewZone {
    pub zone: Zone,
    pub change: Change,
    pub name_servers: Vec<String>,
}

pub(crate) fn strip_id_prefix(id: &str, prefix: &str) -> String {
    id.strip_prefix(prefix).unwrap_or(id).to_string()
}
