//! GleSYS HTTP requests

use serde::de::DeserializeOwned;

use crate::binding::FormParams;
use crate::error::Result;
use crate::http_client::{HttpUtils, RawResponse};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::GlesysProvider;
use super::types::{Envelope, StatusOnly};

/// Actions that must not be repeated after a lost response: the first attempt may
/// already have run on the server.
const NON_IDEMPOTENT_ACTIONS: [&str; 4] = ["create", "clone", "destroy", "reboot"];

impl GlesysProvider {
    /// URL of a `server/<action>` call.
    pub(crate) fn action_url(&self, action: &str) -> String {
        format!("{}/server/{action}/format/json", self.endpoint)
    }

    /// POST a form to `server/<action>` and decode `response` as `T`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        action: &str,
        form: &FormParams,
        ctx: ErrorContext,
    ) -> Result<T> {
        let response = self.send(action, form).await?;
        self.check_status(&response, ctx)?;
        let envelope: Envelope<T> = HttpUtils::parse_json(&response.body, self.provider_name())?;
        Ok(envelope.response)
    }

    /// POST a form to `server/<action>` and only check the status.
    pub(crate) async fn call_void(
        &self,
        action: &str,
        form: &FormParams,
        ctx: ErrorContext,
    ) -> Result<()> {
        let response = self.send(action, form).await?;
        self.check_status(&response, ctx)
    }

    async fn send(&self, action: &str, form: &FormParams) -> Result<RawResponse> {
        let url = self.action_url(action);
        let request = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.api_key))
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.encode());

        HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            &url,
            self.retries_for(action),
        )
        .await
    }

    fn retries_for(&self, action: &str) -> u32 {
        if NON_IDEMPOTENT_ACTIONS.contains(&action) {
            0
        } else {
            self.max_retries
        }
    }

    /// GleSYS reports failures both through the HTTP status and `response.status.code`.
    fn check_status(&self, response: &RawResponse, ctx: ErrorContext) -> Result<()> {
        let status = serde_json::from_str::<Envelope<StatusOnly>>(&response.body)
            .ok()
            .and_then(|e| e.response.status);

        let api_code = status.as_ref().map(|s| s.code);
        let effective = match api_code {
            Some(code) if code >= 400 => code,
            _ => u32::from(response.status),
        };

        if (200..300).contains(&effective) {
            return Ok(());
        }

        let message = status.map_or_else(|| response.body.clone(), |s| s.text);
        let status_code = u16::try_from(effective).unwrap_or(response.status);
        Err(self.map_error(
            RawApiError::with_code(effective.to_string(), message).status(status_code),
            ctx,
        ))
    }
}
