//! Terremark error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::TerremarkProvider;

impl ProviderErrorMapper for TerremarkProvider {
    fn provider_name(&self) -> &'static str {
        "terremark"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        if let Some(mapped) = self.map_status(&raw, &context) {
            return mapped;
        }
        match raw.status {
            Some(400) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.resource.unwrap_or_else(|| "href".to_string()),
                detail: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}
