//! Chef signed-header authentication (protocol version 1.0)
//!
//! The client signs a small canonical description of the request with its RSA key:
//!
//! ```text
//! Method:<METHOD>
//! Hashed Path:<base64(sha1(path))>
//! X-Ops-Content-Hash:<base64(sha1(body))>
//! X-Ops-Timestamp:<RFC 3339 UTC, seconds>
//! X-Ops-UserId:<client name>
//! ```
//!
//! The raw PKCS#1 v1.5 signature (no digest prefix) is base64 encoded and sent in
//! 60-character slices as `X-Ops-Authorization-1..N`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::{Digest, Sha1};

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{CHEF_VERSION, ChefProvider};

const SIGN_VERSION: &str = "version=1.0";
const AUTHORIZATION_CHUNK: usize = 60;

#[derive(Debug, thiserror::Error)]
pub(crate) enum SignError {
    #[error("private key is neither PKCS#1 nor PKCS#8 RSA PEM")]
    InvalidKey,
    #[error("RSA signing failed: {0}")]
    Rsa(#[from] rsa::Error),
}

impl From<SignError> for ProviderError {
    fn from(e: SignError) -> Self {
        ProviderError::SigningError {
            provider: "chef".to_string(),
            detail: e.to_string(),
        }
    }
}

/// Parse a `BEGIN RSA PRIVATE KEY` or `BEGIN PRIVATE KEY` PEM.
pub(crate) fn parse_private_key(pem: &str) -> Result<RsaPrivateKey, SignError> {
    let pem = pem.trim();
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|_| SignError::InvalidKey)
}

pub(crate) fn hash_base64(data: &[u8]) -> String {
    STANDARD.encode(Sha1::digest(data))
}

/// Collapse repeated slashes and drop a trailing slash (the root stays `/`).
pub(crate) fn canonical_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

pub(crate) fn canonical_request(
    method: &str,
    path: &str,
    content_hash: &str,
    timestamp: &str,
    user_id: &str,
) -> String {
    format!(
        "Method:{}\nHashed Path:{}\nX-Ops-Content-Hash:{content_hash}\nX-Ops-Timestamp:{timestamp}\nX-Ops-UserId:{user_id}",
        method.to_uppercase(),
        hash_base64(canonical_path(path).as_bytes()),
    )
}

/// `X-Ops-Timestamp` format.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn split_authorization(signature: &str) -> Vec<(String, String)> {
    signature
        .as_bytes()
        .chunks(AUTHORIZATION_CHUNK)
        .enumerate()
        .map(|(i, chunk)| {
            (
                format!("X-Ops-Authorization-{}", i + 1),
                String::from_utf8_lossy(chunk).into_owned(),
            )
        })
        .collect()
}

/// Sign `canonical` with the raw PKCS#1 v1.5 scheme and base64 the result.
pub(crate) fn sign_canonical(key: &RsaPrivateKey, canonical: &str) -> Result<String, SignError> {
    let signature = key.sign(Pkcs1v15Sign::new_unprefixed(), canonical.as_bytes())?;
    Ok(STANDARD.encode(signature))
}

impl ChefProvider {
    /// Every header a signed Chef request needs, in send order.
    ///
    /// `path` is the full request path as it reaches the server (query excluded).
    pub(crate) fn signed_headers(
        &self,
        method: &str,
        path: &str,
        body: &str,
        at: DateTime<Utc>,
    ) -> Result<Vec<(String, String)>, SignError> {
        let content_hash = hash_base64(body.as_bytes());
        let timestamp = format_timestamp(at);
        let canonical =
            canonical_request(method, path, &content_hash, &timestamp, &self.client_name);

        log::debug!("[chef] Canonical request:\n{}", truncate_for_log(&canonical));

        let signature = sign_canonical(&self.signing_key, &canonical)?;

        let mut headers = vec![
            ("X-Ops-Sign".to_string(), SIGN_VERSION.to_string()),
            ("X-Ops-Userid".to_string(), self.client_name.clone()),
            ("X-Ops-Timestamp".to_string(), timestamp),
            ("X-Ops-Content-Hash".to_string(), content_hash),
            ("X-Chef-Version".to_string(), CHEF_VERSION.to_string()),
        ];
        headers.extend(split_authorization(&signature));
        Ok(headers)
    }
}
