//! GleSYS error mapping
//!
//! GleSYS answers with `response.status.code` mirroring an HTTP status and a free-text
//! `response.status.text`. Unknown servers come back either as 404 or as 400 with a
//! message naming the missing server, so both are treated as `NotFound`. Other 400s
//! that mention something missing (a template, a datacenter) stay `InvalidParameter`.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::GlesysProvider;

const NOT_FOUND_HINTS: [&str; 4] = [
    "could not find server",
    "server not found",
    "no such server",
    "server does not exist",
];

impl ProviderErrorMapper for GlesysProvider {
    fn provider_name(&self) -> &'static str {
        "glesys"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let lower = raw.message.to_lowercase();

        if raw.status == Some(400) && NOT_FOUND_HINTS.iter().any(|h| lower.contains(h)) {
            return ProviderError::NotFound {
                provider: self.provider_name().to_string(),
                resource: context.resource.unwrap_or_default(),
                raw_message: Some(raw.message),
            };
        }

        if let Some(mapped) = self.map_status(&raw, &context) {
            return mapped;
        }

        match raw.status {
            Some(400) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.resource.unwrap_or_else(|| "request".to_string()),
                detail: raw.message,
            },
            Some(402) => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}
