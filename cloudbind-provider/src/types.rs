use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which provider binding to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// GleSYS compute servers. Requires feature `glesys`.
    #[cfg(feature = "glesys")]
    Glesys,
    /// Chef Server (organizations, users, clients). Requires feature `chef`.
    #[cfg(feature = "chef")]
    Chef,
    /// AWS Route 53 hosted zones. Requires feature `route53`.
    #[cfg(feature = "route53")]
    Route53,
    /// Terremark vCloud Express catalogs. Requires feature `terremark`.
    #[cfg(feature = "terremark")]
    Terremark,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "glesys")]
            Self::Glesys => write!(f, "glesys"),
            #[cfg(feature = "chef")]
            Self::Chef => write!(f, "chef"),
            #[cfg(feature = "route53")]
            Self::Route53 => write!(f, "route53"),
            #[cfg(feature = "terremark")]
            Self::Terremark => write!(f, "terremark"),
        }
    }
}

// ============ Provider Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
    /// Multi-line input (PEM keys).
    Multiline,
}

/// Definition of a single credential field required by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"apiKey"`).
    pub key: String,
    /// Human-readable label (e.g., `"API Key"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Optional placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl ProviderCredentialField {
    pub(crate) fn new(key: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            field_type,
            placeholder: None,
            help_text: None,
        }
    }

    #[must_use]
    pub(crate) fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    #[must_use]
    pub(crate) fn help_text(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }
}

/// Static metadata describing a provider binding.
///
/// Obtain via [`CloudProvider::metadata()`](crate::CloudProvider::metadata) or
/// [`get_all_provider_metadata()`](crate::get_all_provider_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Default API endpoint.
    pub default_endpoint: String,
    /// API version the binding targets.
    pub api_version: String,
    /// Credential fields required to authenticate with this provider.
    pub required_fields: Vec<ProviderCredentialField>,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        provider: ProviderType,
        field: String,
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        provider: ProviderType,
        field: String,
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        provider: ProviderType,
        field: String,
        label: String,
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported providers.
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"` as the content:
///
/// ```json
/// { "provider": "glesys", "credentials": { "username": "cl12345", "api_key": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// GleSYS account and API key. Requires feature `glesys`.
    #[cfg(feature = "glesys")]
    #[serde(rename = "glesys")]
    Glesys {
        /// Account name (e.g. `cl12345`).
        username: String,
        /// API key created in the customer panel.
        api_key: String,
    },

    /// Chef Server API client. Requires feature `chef`.
    #[cfg(feature = "chef")]
    #[serde(rename = "chef")]
    Chef {
        /// Chef Server base URL.
        server_url: String,
        /// Name of the signing client (`X-Ops-Userid`).
        client_name: String,
        /// PEM encoded RSA private key of the client.
        private_key: String,
    },

    /// AWS credentials for Route 53. Requires feature `route53`.
    #[cfg(feature = "route53")]
    #[serde(rename = "route53")]
    Route53 {
        access_key_id: String,
        secret_access_key: String,
    },

    /// Terremark vCloud Express login. Requires feature `terremark`.
    #[cfg(feature = "terremark")]
    #[serde(rename = "terremark")]
    Terremark { username: String, password: String },
}

impl ProviderCredentials {
    /// Construct credentials from a flat key/value map, validating required fields.
    pub fn from_map(
        provider: &ProviderType,
        map: &HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            #[cfg(feature = "glesys")]
            ProviderType::Glesys => Ok(Self::Glesys {
                username: Self::get_required_field(provider, map, "username", "Username")?,
                api_key: Self::get_required_field(provider, map, "apiKey", "API Key")?,
            }),
            #[cfg(feature = "chef")]
            ProviderType::Chef => {
                let server_url =
                    Self::get_required_field(provider, map, "serverUrl", "Server URL")?;
                if !(server_url.starts_with("https://") || server_url.starts_with("http://")) {
                    return Err(CredentialValidationError::InvalidFormat {
                        provider: *provider,
                        field: "serverUrl".to_string(),
                        label: "Server URL".to_string(),
                        reason: "must start with http:// or https://".to_string(),
                    });
                }
                let private_key =
                    Self::get_required_field(provider, map, "privateKey", "Private Key")?;
                if !private_key.contains("PRIVATE KEY-----") {
                    return Err(CredentialValidationError::InvalidFormat {
                        provider: *provider,
                        field: "privateKey".to_string(),
                        label: "Private Key".to_string(),
                        reason: "expected a PEM encoded RSA private key".to_string(),
                    });
                }
                Ok(Self::Chef {
                    server_url,
                    client_name: Self::get_required_field(
                        provider,
                        map,
                        "clientName",
                        "Client Name",
                    )?,
                    private_key,
                })
            }
            #[cfg(feature = "route53")]
            ProviderType::Route53 => Ok(Self::Route53 {
                access_key_id: Self::get_required_field(
                    provider,
                    map,
                    "accessKeyId",
                    "Access Key ID",
                )?,
                secret_access_key: Self::get_required_field(
                    provider,
                    map,
                    "secretAccessKey",
                    "Secret Access Key",
                )?,
            }),
            #[cfg(feature = "terremark")]
            ProviderType::Terremark => Ok(Self::Terremark {
                username: Self::get_required_field(provider, map, "username", "Username")?,
                password: Self::get_required_field(provider, map, "password", "Password")?,
            }),
        }
    }

    fn get_required_field(
        provider: &ProviderType,
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                provider: *provider,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                provider: *provider,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }

    /// Convert credentials to a flat key/value map.
    pub fn to_map(&self) -> HashMap<String, String> {
        match self {
            #[cfg(feature = "glesys")]
            Self::Glesys { username, api_key } => [
                ("username".to_string(), username.clone()),
                ("apiKey".to_string(), api_key.clone()),
            ]
            .into(),
            #[cfg(feature = "chef")]
            Self::Chef {
                server_url,
                client_name,
                private_key,
            } => [
                ("serverUrl".to_string(), server_url.clone()),
                ("clientName".to_string(), client_name.clone()),
                ("privateKey".to_string(), private_key.clone()),
            ]
            .into(),
            #[cfg(feature = "route53")]
            Self::Route53 {
                access_key_id,
                secret_access_key,
            } => [
                ("accessKeyId".to_string(), access_key_id.clone()),
                ("secretAccessKey".to_string(), secret_access_key.clone()),
            ]
            .into(),
            #[cfg(feature = "terremark")]
            Self::Terremark { username, password } => [
                ("username".to_string(), username.clone()),
                ("password".to_string(), password.clone()),
            ]
            .into(),
        }
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "glesys")]
            Self::Glesys { .. } => ProviderType::Glesys,
            #[cfg(feature = "chef")]
            Self::Chef { .. } => ProviderType::Chef,
            #[cfg(feature = "route53")]
            Self::Route53 { .. } => ProviderType::Route53,
            #[cfg(feature = "terremark")]
            Self::Terremark { .. } => ProviderType::Terremark,
        }
    }
}
