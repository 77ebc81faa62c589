//! AWS Signature Version 4 for Route 53

use std::fmt::Write;

use crate::providers::common::{hmac_sha256, sha256_hex};
use crate::utils::log_sanitizer::{mask, truncate_for_log};

use super::Route53Provider;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// Route 53 is a global service signed against us-east-1.
const REGION: &str = "us-east-1";
const SERVICE: &str = "route53";
const SIGNED_HEADERS: &str = "host;x-amz-date";

/// Sort `key=value` pairs and encode them the way SigV4 expects.
pub(crate) fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (urlencoding::encode(k).into_owned(), urlencoding::encode(v).into_owned()))
        .collect();
    encoded.sort();
    encoded
        .iter()
        .fold(String::new(), |mut acc, (k, v)| {
            if !acc.is_empty() {
                acc.push('&');
            }
            let _ = write!(acc, "{k}={v}");
            acc
        })
}

impl Route53Provider {
    /// Build the `Authorization` header value.
    ///
    /// `amz_date` is the `x-amz-date` header (`%Y%m%dT%H%M%SZ`) and `host` the value the
    /// HTTP client will send as `Host`.
    pub(crate) fn sign(
        &self,
        method: &str,
        host: &str,
        path: &str,
        query: &str,
        payload: &str,
        amz_date: &str,
    ) -> String {
        let date = &amz_date[..amz_date.len().min(8)];

        let canonical_request = format!(
            "{method}\n{path}\n{query}\nhost:{host}\nx-amz-date:{amz_date}\n\n{SIGNED_HEADERS}\n{}",
            sha256_hex(payload.as_bytes())
        );
        log::debug!("[route53] CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

        let scope = format!("{date}/{REGION}/{SERVICE}/aws4_request");
        log::debug!("[route53] Signing as {} for {scope}", mask(&self.access_key_id));
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            sha256_hex(canonical_request.as_bytes())
        );

        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_access_key).as_bytes(),
            date.as_bytes(),
        );
        let k_region = hmac_sha256(&k_date, REGION.as_bytes());
        let k_service = hmac_sha256(&k_region, SERVICE.as_bytes());
        let k_signing = hmac_sha256(&k_service, b"aws4_request");
        let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

        format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            self.access_key_id
        )
    }
}
