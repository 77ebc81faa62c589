//! Shared test helpers

#![allow(dead_code)]

use std::env;

use cloudbind_provider::{
    ChefProvider, GlesysProvider, ProviderClient, ProviderCredentials, Route53Provider,
    TerremarkProvider, create_provider,
};

/// Return early from a live test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// RSA key used to sign Chef requests against mock servers.
pub const CHEF_TEST_KEY: &str = include_str!("../fixtures/chef_client.pem");

/// Provider pointed at a mock server, without retries so error paths stay fast.
pub fn glesys_at(url: &str) -> GlesysProvider {
    GlesysProvider::builder("cl12345".to_string(), "secret".to_string())
        .endpoint(url)
        .max_retries(0)
        .build()
}

pub fn chef_at(url: &str) -> ChefProvider {
    ChefProvider::builder(url.to_string(), "admin".to_string(), CHEF_TEST_KEY)
        .max_retries(0)
        .build()
        .unwrap()
}

pub fn route53_at(url: &str) -> Route53Provider {
    Route53Provider::builder("AKIDEXAMPLE".to_string(), "secret".to_string())
        .endpoint(url)
        .max_retries(0)
        .build()
}

pub fn terremark_at(url: &str) -> TerremarkProvider {
    TerremarkProvider::builder("user@example.com".to_string(), "pass".to_string())
        .endpoint(url)
        .max_retries(0)
        .build()
}

/// Live provider built from environment variables through the factory.
pub struct LiveContext {
    pub client: ProviderClient,
}

impl LiveContext {
    fn from_credentials(credentials: ProviderCredentials) -> Option<Self> {
        let client = create_provider(credentials).ok()?;
        Some(Self { client })
    }

    pub fn glesys() -> Option<Self> {
        Self::from_credentials(ProviderCredentials::Glesys {
            username: env::var("GLESYS_USERNAME").ok()?,
            api_key: env::var("GLESYS_API_KEY").ok()?,
        })
    }

    pub fn chef() -> Option<Self> {
        let key_path = env::var("CHEF_PRIVATE_KEY_FILE").ok()?;
        Self::from_credentials(ProviderCredentials::Chef {
            server_url: env::var("CHEF_SERVER_URL").ok()?,
            client_name: env::var("CHEF_CLIENT_NAME").ok()?,
            private_key: std::fs::read_to_string(key_path).ok()?,
        })
    }

    pub fn route53() -> Option<Self> {
        Self::from_credentials(ProviderCredentials::Route53 {
            access_key_id: env::var("AWS_ACCESS_KEY_ID").ok()?,
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok()?,
        })
    }

    pub fn terremark() -> Option<Self> {
        Self::from_credentials(ProviderCredentials::Terremark {
            username: env::var("TERREMARK_USERNAME").ok()?,
            password: env::var("TERREMARK_PASSWORD").ok()?,
        })
    }
}
