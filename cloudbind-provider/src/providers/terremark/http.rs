//! Terremark HTTP requests and session handling

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpUtils, RawResponse};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::ErrorXml;
use super::{SESSION_COOKIE, TerremarkProvider};

/// Value of the session cookie among `Set-Cookie` headers.
pub(crate) fn session_cookie(response: &RawResponse) -> Option<String> {
    response
        .headers
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

impl TerremarkProvider {
    /// Absolute URL for an `href`; relative hrefs are resolved against the endpoint.
    pub(crate) fn resolve(&self, href: &str) -> String {
        if href.starts_with("https://") || href.starts_with("http://") {
            href.to_string()
        } else {
            format!("{}/{}", self.endpoint, href.trim_start_matches('/'))
        }
    }

    /// `POST /login` with HTTP Basic and remember the session cookie.
    pub(crate) async fn login(&self) -> Result<String> {
        let url = format!("{}/login", self.endpoint);
        let request = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Content-Length", "0");

        let response = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;
        self.check_status(&response, ErrorContext::resource("login"))?;

        let token = session_cookie(&response).ok_or_else(|| {
            self.parse_error(format!("login response has no {SESSION_COOKIE} cookie"))
        })?;
        log::debug!("[terremark] Logged in as {}", self.username);

        *self.session.write().await = Some(token.clone());
        Ok(token)
    }

    async fn session_token(&self) -> Result<String> {
        if let Some(token) = self.session.read().await.clone() {
            return Ok(token);
        }
        self.login().await
    }

    async fn send_get(&self, url: &str, accept: &str, token: &str) -> Result<RawResponse> {
        let request = self
            .client
            .get(url)
            .header("Accept", accept)
            .header("Cookie", format!("{SESSION_COOKIE}={token}"));
        HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            url,
            self.max_retries,
        )
        .await
    }

    /// GET `href` within the session and decode the XML body.
    ///
    /// A 401 clears the session and the request is repeated once after a new login.
    pub(crate) async fn get_xml<T: DeserializeOwned>(
        &self,
        href: &str,
        accept: &str,
    ) -> Result<T> {
        let url = self.resolve(href);

        let token = self.session_token().await?;
        let mut response = self.send_get(&url, accept, &token).await?;
        if response.status == 401 {
            log::info!("[terremark] Session expired, logging in again");
            *self.session.write().await = None;
            let token = self.login().await?;
            response = self.send_get(&url, accept, &token).await?;
        }

        self.check_status(&response, ErrorContext::resource(href))?;
        HttpUtils::parse_xml(&response.body, self.provider_name())
    }

    fn check_status(&self, response: &RawResponse, ctx: ErrorContext) -> Result<()> {
        if response.is_success() {
            return Ok(());
        }

        let raw = match quick_xml::de::from_str::<ErrorXml>(&response.body) {
            Ok(e) if !e.message.is_empty() => RawApiError {
                code: e.minor_error_code.or(e.major_error_code),
                message: e.message,
                status: None,
            },
            _ => RawApiError::new(response.body.clone()),
        };
        Err(self.map_error(raw.status(response.status), ctx))
    }
}
