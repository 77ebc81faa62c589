//! Route 53 error mapping
//!
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match raw.code.as_deref() {
            Some("NoSuchHostedZone" | "NoSuchChange") => ProviderError::NotFound {
                provider,
                resource: context.resource.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("HostedZoneAlreadyExists" | "ConflictingDomainExists") => {
                ProviderError::AlreadyExists {
                    provider,
                    resource: context.resource.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken",
            ) => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },
            Some("AccessDenied") => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },
            Some("Throttling" | "PriorRequestNotComplete") => ProviderError::RateLimited {
                provider,
                retry_after: None,
                raw_message: Some(raw.message),
            },
            Some("TooManyHostedZones") => ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            },
            Some(
                code @ ("InvalidInput" | "InvalidDomainName" | "InvalidArgument"
                | "HostedZoneNotEmpty"),
            ) => ProviderError::InvalidParameter {
                provider,
                param: context.resource.unwrap_or_else(|| code.to_string()),
                detail: raw.message,
            },
            _ => self
                .map_status(&raw, &context)
                .unwrap_or_else(|| self.unknown_error(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Route53Provider {
        Route53Provider::new("ak".into(), "sk".into())
    }

    #[test]
    fn no_such_zone_is_not_found() {
        let err = provider().map_error(
            RawApiError::with_code("NoSuchHostedZone", "No hosted zone found with ID: Z1")
                .status(404),
            ErrorContext::resource("Z1"),
        );
        assert!(matches!(err, ProviderError::NotFound { ref resource, .. } if resource == "Z1"));
    }

    #[test]
    fn duplicate_zone_is_already_exists() {
        let err = provider().map_error(
            RawApiError::with_code("HostedZoneAlreadyExists", "exists").status(409),
            ErrorContext::resource("example.com."),
        );
        assert!(matches!(err, ProviderError::AlreadyExists { .. }));
    }

    #[test]
    fn bad_signature_is_invalid_credentials() {
        let err = provider().map_error(
            RawApiError::with_code("SignatureDoesNotMatch", "bad").status(403),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn throttling_is_rate_limited() {
        let err = provider().map_error(
            RawApiError::with_code("Throttling", "Rate exceeded").status(400),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::RateLimited { .. }));
    }

    #[test]
    fn unknown_code_keeps_code() {
        let err = provider().map_error(
            RawApiError::with_code("InternalFailure", "oops").status(500),
            ErrorContext::default(),
        );
        assert!(
            matches!(err, ProviderError::Unknown { raw_code: Some(ref c), .. } if c == "InternalFailure")
        );
    }
}
