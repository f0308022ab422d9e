mod client;

pub use client::{BOT_TOKEN_HEADER, VocabularyClient};
