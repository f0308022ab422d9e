use serde::{Deserialize, Serialize};

pub const BASE_URL_VAR: &str = "RECHNIK_API_URL";
pub const BOT_TOKEN_VAR: &str = "RECHNIK_BOT_TOKEN";
pub const TIMEOUT_VAR: &str = "RECHNIK_TIMEOUT_SECONDS";

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Vocabulary service connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `X-Bot-Token` when set
    pub bot_token: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(default_base_url);

        let bot_token = lookup(BOT_TOKEN_VAR).filter(|token| !token.is_empty());

        let timeout_seconds = lookup(TIMEOUT_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            bot_token,
            timeout_seconds,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bot_token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
