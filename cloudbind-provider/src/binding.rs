//! Request binding and response extraction helpers
//!
//! Each provider method is a fixed combination of: an HTTP verb, a path template, a way
//! to bind arguments into the request (path segments, form fields, JSON/XML body), a way
//! to read the response, and an optional "not found" fallback. The helpers here cover the
//! shared pieces so provider code only states the combination.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::{ProviderError, Result};

/// Expand `{name}` placeholders in `template` with percent-encoded values.
///
/// ```
/// use cloudbind_provider::binding::expand_path;
///
/// let path = expand_path(
///     "/organizations/{orgname}/clients/{clientname}",
///     &[("orgname", "acme"), ("clientname", "web 01")],
///     "chef",
/// )
/// .unwrap();
/// assert_eq!(path, "/organizations/acme/clients/web%2001");
/// ```
pub fn expand_path(template: &str, params: &[(&str, &str)], provider: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: template.to_string(),
                detail: "unterminated path placeholder".to_string(),
            });
        };
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: name.to_string(),
                detail: format!("no value bound for path parameter in '{template}'"),
            })?;
        if value.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: name.to_string(),
                detail: "path parameter must not be empty".to_string(),
            });
        }
        out.push_str(&urlencoding::encode(value));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Ordered `application/x-www-form-urlencoded` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.push(key, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `k1=v1&k2=v2`, percent-encoding keys and values.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Read a single string field from a JSON object body.
pub fn extract_string_field(body: &str, field: &str, provider: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body).map_err(|e| ProviderError::ParseError {
        provider: provider.to_string(),
        detail: e.to_string(),
    })?;
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::ParseError {
            provider: provider.to_string(),
            detail: format!("response has no string field '{field}'"),
        })
}

/// Read the key set of a JSON object body (values are ignored).
pub fn extract_key_set(body: &str, provider: &str) -> Result<BTreeSet<String>> {
    let value: Value = serde_json::from_str(body).map_err(|e| ProviderError::ParseError {
        provider: provider.to_string(),
        detail: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map.into_iter().map(|(k, _)| k).collect()),
        other => Err(ProviderError::ParseError {
            provider: provider.to_string(),
            detail: format!("expected a JSON object, got {other}"),
        }),
    }
}

/// "Not found" fallbacks for binding results.
///
/// Only [`ProviderError::NotFound`] is absorbed; every other error propagates.
pub trait NotFoundExt<T> {
    /// `NotFound` becomes `Ok(None)`.
    fn none_on_not_found(self) -> Result<Option<T>>;
    /// `NotFound` becomes `Ok(false)`, success becomes `Ok(true)`.
    fn false_on_not_found(self) -> Result<bool>;
    /// `NotFound` becomes `Ok(())`, the success value is discarded.
    fn ignore_not_found(self) -> Result<()>;
}

impl<T> NotFoundExt<T> for Result<T> {
    fn none_on_not_found(self) -> Result<Option<T>> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.is_not_found() => {
                log::debug!("{e}; returning None");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn false_on_not_found(self) -> Result<bool> {
        match self {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn ignore_not_found(self) -> Result<()> {
        match self {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
