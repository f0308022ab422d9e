pub mod types;

pub use types::{DifficultyLevel, InflectionRecord, LemmaDetail, LemmaSummary, PartOfSpeech};
