//! Chef Server error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::ChefProvider;

impl ProviderErrorMapper for ChefProvider {
    fn provider_name(&self) -> &'static str {
        "chef"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        if let Some(mapped) = self.map_status(&raw, &context) {
            return mapped;
        }

        match raw.status {
            Some(400) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.resource.unwrap_or_else(|| "body".to_string()),
                detail: raw.message,
            },
            // 413 is what erchef answers for oversized objects
            Some(413) => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}
