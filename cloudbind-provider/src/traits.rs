use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::ProviderMetadata;

/// Raw API error as reported by a provider (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Provider-specific error code, if any.
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
    /// HTTP status of the failed exchange.
    pub status: Option<u16>,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Extra information used while mapping errors (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Identifier or path of the resource the request addressed.
    pub resource: Option<String>,
}

impl ErrorContext {
    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
        }
    }
}

/// Maps provider error payloads onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Mapping shared by every provider for plain HTTP statuses; `None` lets the
    /// provider decide.
    fn map_status(&self, raw: &RawApiError, context: &ErrorContext) -> Option<ProviderError> {
        let provider = self.provider_name().to_string();
        let raw_message = Some(raw.message.clone()).filter(|m| !m.is_empty());
        match raw.status? {
            401 => Some(ProviderError::InvalidCredentials {
                provider,
                raw_message,
            }),
            403 => Some(ProviderError::PermissionDenied {
                provider,
                raw_message,
            }),
            404 => Some(ProviderError::NotFound {
                provider,
                resource: context.resource.clone().unwrap_or_default(),
                raw_message,
            }),
            409 => Some(ProviderError::AlreadyExists {
                provider,
                resource: context.resource.clone().unwrap_or_default(),
                raw_message,
            }),
            _ => None,
        }
    }

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback for unmapped errors.
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code.or_else(|| raw.status.map(|s| s.to_string())),
            raw_message: raw.message,
        }
    }
}

/// Behaviour shared by every provider binding.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Static provider metadata; callable before any instance exists.
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Issue a cheap authenticated call to check the credentials.
    ///
    /// Returns `Ok(false)` when the provider rejects the credentials and an error for
    /// anything else (network trouble, unexpected payloads).
    async fn validate_credentials(&self) -> Result<bool>;
}
