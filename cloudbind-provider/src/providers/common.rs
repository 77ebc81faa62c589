//! Shared helpers for provider implementations

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// Default connection timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default number of automatic retries for transient failures
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Create an HTTP client with the standard connect timeout and the given request timeout.
pub fn create_http_client(request_timeout: Duration) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .unwrap_or_else(|e| {
            log::error!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

/// Drop trailing slashes so paths can be appended with `format!("{base}{path}")`.
pub fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}

// ============ HMAC-SHA256 ============

#[cfg(feature = "route53")]
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    // HMAC accepts keys of any length, so `new_from_slice` cannot fail here.
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(key) else {
        return Vec::new();
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(feature = "route53")]
pub fn sha256_hex(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};

    hex::encode(Sha256::digest(data))
}
