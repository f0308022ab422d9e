use std::time::Duration;

use anyhow::{Context, Result};
use rechnik_config::api::ApiConfig;
use rechnik_core::error::LoadError;
use rechnik_core::source::LemmaSource;
use rechnik_types::{LemmaDetail, LemmaSummary};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

/// `X-Bot-Token`, lower-cased as `HeaderName::from_static` requires
pub const BOT_TOKEN_HEADER: &str = "x-bot-token";

/// Queries shorter than this are not sent to the service.
const MIN_QUERY_CHARS: usize = 2;

/// Client for the vocabulary service REST API.
#[derive(Clone)]
pub struct VocabularyClient {
    base_url: String,
    client: reqwest::Client,
}

impl VocabularyClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.bot_token {
            let value = HeaderValue::from_str(token).context("Bot token is not a valid header")?;
            headers.insert(BOT_TOKEN_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Lemma with its full inflection set
    pub async fn lemma(&self, id: u64) -> Result<LemmaDetail> {
        tracing::info!("Fetching lemma {id}");
        self.get_json(&format!("vocabulary/{id}"), &[])
            .await
            .with_context(|| format!("Failed to fetch lemma {id}"))
    }

    /// Full-text search. Returns nothing for queries under two characters.
    pub async fn search(&self, query: &str) -> Result<Vec<LemmaSummary>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            tracing::debug!("Search query {query:?} too short, skipping");
            return Ok(Vec::new());
        }

        self.get_json("vocabulary/search", &[("q", query)])
            .await
            .with_context(|| format!("Search for {query:?} failed"))
    }

    /// Asks the service to synthesize `text` and returns the playable URL.
    pub async fn generate_audio(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            anyhow::bail!("Audio text is empty");
        }

        let response = self
            .client
            .post(self.url("audio/generate"))
            .json(&GenerateAudioRequest { text })
            .send()
            .await
            .context("Failed to send audio request")?
            .error_for_status()
            .context("Audio generation failed")?;

        let body: GenerateAudioResponse = response
            .json()
            .await
            .context("Failed to parse audio response")?;

        tracing::debug!("Generated audio {} for {text:?}", body.filename);
        Ok(self.audio_url(&body.filename))
    }

    /// URL of a generated audio file
    pub fn audio_url(&self, filename: &str) -> String {
        self.url(&format!("audio/{filename}"))
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .context("Failed to send request to vocabulary service")?
            .error_for_status()?;

        response
            .json::<T>()
            .await
            .context("Failed to parse vocabulary service response")
    }
}

#[async_trait::async_trait]
impl LemmaSource for VocabularyClient {
    async fn lemma(&self, id: u64) -> Result<LemmaDetail, LoadError> {
        VocabularyClient::lemma(self, id).await.map_err(|err| {
            let status = err
                .downcast_ref::<reqwest::Error>()
                .and_then(reqwest::Error::status);
            if status == Some(StatusCode::NOT_FOUND) {
                LoadError::NotFound(id)
            } else {
                LoadError::Remote(format!("{err:#}"))
            }
        })
    }
}

#[derive(Serialize)]
pub(crate) struct GenerateAudioRequest<'a> {
    pub text: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct GenerateAudioResponse {
    pub filename: String,
}
