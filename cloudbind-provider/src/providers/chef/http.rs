//! Chef Server HTTP requests

use chrono::Utc;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, RawResponse};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::ChefProvider;
use super::types::ErrorBody;

impl ChefProvider {
    /// Send a signed request and return the response once its status is 2xx.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<RawResponse> {
        let url = format!("{}{path}", self.endpoint);
        let signed_path = Url::parse(&url)
            .map_err(|e| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "server_url".to_string(),
                detail: e.to_string(),
            })?
            .path()
            .to_string();

        let payload = body.unwrap_or_default();
        let headers = self.signed_headers(method.as_str(), &signed_path, &payload, Utc::now())?;

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Accept", "application/json");
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if !payload.is_empty() {
            request = request
                .header("Content-Type", "application/json")
                .body(payload);
        }

        // POST creates a resource; a repeat after a lost response would hit 409.
        let retries = if method == Method::POST {
            0
        } else {
            self.max_retries
        };
        let response = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            method.as_str(),
            &url,
            retries,
        )
        .await?;

        self.check_status(&response, ctx)?;
        Ok(response)
    }

    /// Serialize `body` as the JSON payload of a request.
    pub(crate) fn json_body<B: Serialize>(&self, body: &B) -> Result<Option<String>> {
        serde_json::to_string(body)
            .map(Some)
            .map_err(|e| self.serialization_error(e))
    }

    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<T> {
        let response = self.request(method, path, body, ctx).await?;
        HttpUtils::parse_json(&response.body, self.provider_name())
    }

    fn check_status(&self, response: &RawResponse, ctx: ErrorContext) -> Result<()> {
        if response.is_success() {
            return Ok(());
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.error)
            .map_or_else(|| response.body.clone(), |m| m.join());

        Err(self.map_error(RawApiError::new(message).status(response.status), ctx))
    }
}
