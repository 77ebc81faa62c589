//! Lenient number decoding
//!
//! GleSYS returns the same field as `512`, `"512"` or `512.0` depending on the endpoint
//! and platform. These helpers accept any of them.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64(self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(i as f64),
            Self::Float(f) => Some(f),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Deserialize a `u32` from a number or numeric string.
pub fn u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = NumberOrString::deserialize(deserializer)?;
    match raw {
        NumberOrString::Int(i) => u32::try_from(i).map_err(Error::custom),
        other => other
            .into_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
            .map(|f| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let v = f as u32;
                v
            })
            .ok_or_else(|| Error::custom("expected an unsigned integer")),
    }
}

/// Deserialize a `u64` from a number or numeric string.
pub fn u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(i) => u64::try_from(i).map_err(Error::custom),
        NumberOrString::Text(s) => s.trim().parse().map_err(Error::custom),
        NumberOrString::Float(_) => Err(Error::custom("expected an unsigned integer")),
    }
}

/// Deserialize a list of `u32` where each element may be a number or numeric string.
pub fn vec_u32<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Item(#[serde(deserialize_with = "u32")] u32);

    Ok(Vec::<Item>::deserialize(deserializer)?
        .into_iter()
        .map(|Item(v)| v)
        .collect())
}

/// Deserialize an optional `f64` from a number, numeric string or null.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.and_then(NumberOrString::into_f64))
}

/// Deserialize an `f64` from a number or numeric string.
pub fn f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    NumberOrString::deserialize(deserializer)?
        .into_f64()
        .ok_or_else(|| Error::custom("expected a number"))
}
