use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// One inflected surface form of a lemma, as supplied by the vocabulary service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflectionRecord {
    pub id: u64,
    pub form: String,
    #[serde(default)]
    pub accented_form: Option<String>,
    /// Grammatical annotation such as `1sg.pres` or `pl.def`
    #[serde(default, alias = "grammaticalInfo")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub difficulty_level: Option<DifficultyLevel>,
}

impl InflectionRecord {
    pub fn new(id: u64, form: impl Into<String>, tag: Option<&str>) -> Self {
        Self {
            id,
            form: form.into(),
            accented_form: None,
            tag: tag.map(str::to_string),
            difficulty_level: None,
        }
    }

    pub fn with_difficulty(mut self, level: DifficultyLevel) -> Self {
        self.difficulty_level = Some(level);
        self
    }

    pub fn with_accent(mut self, accented: impl Into<String>) -> Self {
        self.accented_form = Some(accented.into());
        self
    }

    /// Text handed to the audio collaborator: the stress-marked form when known.
    pub fn audio_text(&self) -> &str {
        self.accented_form
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.form)
    }

    /// Form shown to the learner. Same preference as audio.
    pub fn display_form(&self) -> &str {
        self.audio_text()
    }

    /// Missing difficulty counts as basic; `Unknown` does not.
    pub fn is_basic(&self) -> bool {
        matches!(self.difficulty_level, None | Some(DifficultyLevel::Basic))
    }
}

/// Free text on the service side, so parsing is case-insensitive and any
/// other value becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum DifficultyLevel {
    Basic,
    Intermediate,
    Advanced,
    Unknown,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Basic => "BASIC",
            DifficultyLevel::Intermediate => "INTERMEDIATE",
            DifficultyLevel::Advanced => "ADVANCED",
            DifficultyLevel::Unknown => "UNKNOWN",
        }
    }
}

impl From<String> for DifficultyLevel {
    fn from(value: String) -> Self {
        match value.trim().to_uppercase().as_str() {
            "BASIC" | "BEGINNER" => DifficultyLevel::Basic,
            "INTERMEDIATE" => DifficultyLevel::Intermediate,
            "ADVANCED" => DifficultyLevel::Advanced,
            _ => DifficultyLevel::Unknown,
        }
    }
}

/// A blank difficulty is the same as a missing one.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DifficultyLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .map(DifficultyLevel::from))
}

/// Closed part-of-speech set used by the vocabulary service.
///
/// Values the service might add later deserialize to `Unknown` instead of
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Numeral,
    Interjection,
    Particle,
    Interrogative,
    #[serde(other)]
    Unknown,
}

impl FromStr for PartOfSpeech {
    type Err = String;

    /// Accepts wire names and common abbreviations in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s.trim().to_uppercase().as_str() {
            "NOUN" => PartOfSpeech::Noun,
            "VERB" => PartOfSpeech::Verb,
            "ADJECTIVE" | "ADJ" => PartOfSpeech::Adjective,
            "ADVERB" | "ADV" => PartOfSpeech::Adverb,
            "PRONOUN" | "PRON" => PartOfSpeech::Pronoun,
            "PREPOSITION" | "PREP" => PartOfSpeech::Preposition,
            "CONJUNCTION" | "CONJ" => PartOfSpeech::Conjunction,
            "NUMERAL" | "NUM" => PartOfSpeech::Numeral,
            "INTERJECTION" | "INTJ" => PartOfSpeech::Interjection,
            "PARTICLE" => PartOfSpeech::Particle,
            "INTERROGATIVE" => PartOfSpeech::Interrogative,
            _ => return Err(format!("unknown part of speech {s:?}")),
        };
        Ok(pos)
    }
}

impl PartOfSpeech {

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adjective => "ADJECTIVE",
            PartOfSpeech::Adverb => "ADVERB",
            PartOfSpeech::Pronoun => "PRONOUN",
            PartOfSpeech::Preposition => "PREPOSITION",
            PartOfSpeech::Conjunction => "CONJUNCTION",
            PartOfSpeech::Numeral => "NUMERAL",
            PartOfSpeech::Interjection => "INTERJECTION",
            PartOfSpeech::Particle => "PARTICLE",
            PartOfSpeech::Interrogative => "INTERROGATIVE",
            PartOfSpeech::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.as_str();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first, chars.as_str().to_lowercase()),
            None => Ok(()),
        }
    }
}

/// Full lemma payload from `GET /vocabulary/{id}`. Only the fields the
/// inflection view reads are kept; the rest of the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmaDetail {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    #[serde(default)]
    pub inflections: Vec<InflectionRecord>,
}

/// Search hit from `GET /vocabulary/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmaSummary {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    #[serde(default)]
    pub inflection_count: u32,
}
