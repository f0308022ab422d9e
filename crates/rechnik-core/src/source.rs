use std::path::{Path, PathBuf};

use rechnik_types::{InflectionRecord, LemmaDetail};
use serde::Deserialize;

use crate::error::LoadError;

/// Supplies lemma payloads to the presentation layer.
#[async_trait::async_trait]
pub trait LemmaSource: Send + Sync {
    /// Fetch one lemma with its full inflection set
    async fn lemma(&self, id: u64) -> Result<LemmaDetail, LoadError>;
}

/// Accepted shapes of a lemma JSON file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LemmaFile {
    One(LemmaDetail),
    Many(Vec<LemmaDetail>),
    /// Bare inflection set without lemma metadata
    Records(Vec<InflectionRecord>),
}

impl LemmaFile {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::InvalidFormat(e.to_string()))
    }

    pub fn into_lemmas(self) -> Vec<LemmaDetail> {
        match self {
            LemmaFile::One(lemma) => vec![lemma],
            LemmaFile::Many(lemmas) => lemmas,
            LemmaFile::Records(_) => Vec::new(),
        }
    }
}

/// Lemmas exported to a JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<LemmaFile, LoadError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(LoadError::FileNotFound(self.path.display().to_string()));
        }

        tracing::info!("Loading lemmas from file: {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path).await?;
        LemmaFile::from_json(&json)
    }
}

#[async_trait::async_trait]
impl LemmaSource for JsonFileSource {
    async fn lemma(&self, id: u64) -> Result<LemmaDetail, LoadError> {
        self.read()
            .await?
            .into_lemmas()
            .into_iter()
            .find(|lemma| lemma.id == id)
            .ok_or(LoadError::NotFound(id))
    }
}
