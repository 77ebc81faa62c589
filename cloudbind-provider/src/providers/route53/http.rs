//! Route 53 HTTP requests

use chrono::Utc;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, RawResponse};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;
use super::sign::canonical_query;
use super::types::ErrorResponse;

impl Route53Provider {
    /// `Host` header value derived from the endpoint (port included when not default).
    fn host(&self) -> Result<String> {
        let url = Url::parse(&self.endpoint).map_err(|e| ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: "endpoint".to_string(),
            detail: e.to_string(),
        })?;
        let host = url.host_str().unwrap_or_default();
        Ok(url.port().map_or_else(|| host.to_string(), |p| format!("{host}:{p}")))
    }

    /// Send a signed request to `/<api version><path>` and check the status.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<RawResponse> {
        let path = format!("/{}{path}", self.api_version);
        let query = canonical_query(query);
        let url = if query.is_empty() {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}{path}?{query}", self.endpoint)
        };

        let payload = body.unwrap_or_default();
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let authorization = self.sign(
            method.as_str(),
            &self.host()?,
            &path,
            &query,
            &payload,
            &amz_date,
        );

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("X-Amz-Date", &amz_date)
            .header("Authorization", authorization);
        if !payload.is_empty() {
            request = request
                .header("Content-Type", "application/xml")
                .body(payload);
        }

        let response = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            method.as_str(),
            &url,
            self.max_retries,
        )
        .await?;

        self.check_status(&response, ctx)?;
        Ok(response)
    }

    pub(crate) async fn request_xml<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<T> {
        let response = self.request(method, path, query, body, ctx).await?;
        HttpUtils::parse_xml(&response.body, self.provider_name())
    }

    fn check_status(&self, response: &RawResponse, ctx: ErrorContext) -> Result<()> {
        if response.is_success() {
            return Ok(());
        }

        let raw = match quick_xml::de::from_str::<ErrorResponse>(&response.body) {
            Ok(doc) => RawApiError::with_code(doc.error.code, doc.error.message),
            Err(_) => RawApiError::new(format!("HTTP {}: {}", response.status, response.body)),
        };
        Err(self.map_error(raw.status(response.status), ctx))
    }
}
