use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// API credentials for L2 (HMAC) authentication
///
/// Returned by the derive/create API-key endpoints. `Debug` never prints the
/// values.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCreds {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    /// Base64 HMAC key
    #[serde(rename = "secret")]
    pub api_secret: String,
    #[serde(rename = "passphrase")]
    pub api_passphrase: String,
}

impl ApiCreds {
    pub fn new(api_key: String, api_secret: String, api_passphrase: String) -> Self {
        Self {
            api_key,
            api_secret,
            api_passphrase,
        }
    }

    /// Load from `POLY_API_KEY`, `POLY_API_SECRET` and `POLY_API_PASSPHRASE`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let var = |name: &str| {
            env::var(name)
                .map_err(|_| Error::Config(format!("{} environment variable not set", name)))
        };

        Ok(Self {
            api_key: var("POLY_API_KEY")?,
            api_secret: var("POLY_API_SECRET")?,
            api_passphrase: var("POLY_API_PASSPHRASE")?,
        })
    }
}

impl fmt::Debug for ApiCreds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCreds")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("api_passphrase", &"[REDACTED]")
            .finish()
    }
}
