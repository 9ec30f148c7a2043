//! Connection settings shared by a set of bound operations.

use std::fmt;

use serde::Deserialize;

/// Base URL and private token used to target and authenticate requests.
///
/// Neither field is validated. A missing or wrong value simply produces a
/// request the server will reject.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct Config {
    pub api_base_url: String,
    pub token: String,
}

/// Wire shape of `Config`; converted through `Config::new`.
#[derive(Deserialize)]
struct RawConfig {
    api_base_url: String,
    token: String,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Config::new(&raw.api_base_url, &raw.token)
    }
}

impl Config {
    pub fn new(api_base_url: &str, token: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
