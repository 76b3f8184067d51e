use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::domain::credentials::DEFAULT_COST;
use crate::domain::service::ServiceConfig;

/// Secret used when none is configured. Only fit for local development.
pub const DEV_TOKEN_SECRET: &str = "accounts-dev-secret-change-me";

/// Configuration for the accounts module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountsConfig {
    /// Env layers parse numeric-looking values, so scalars are accepted and
    /// kept as their textual form.
    #[serde(default = "default_token_secret", deserialize_with = "scalar_as_string")]
    pub token_secret: String,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AccountsConfig {
    pub fn uses_dev_secret(&self) -> bool {
        self.token_secret == DEV_TOKEN_SECRET
    }
}

impl From<AccountsConfig> for ServiceConfig {
    fn from(cfg: AccountsConfig) -> Self {
        Self {
            token_secret: cfg.token_secret,
            bcrypt_cost: cfg.bcrypt_cost,
        }
    }
}

fn default_token_secret() -> String {
    DEV_TOKEN_SECRET.to_string()
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_COST
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a scalar value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}
