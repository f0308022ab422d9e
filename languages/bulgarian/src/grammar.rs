//! Token grammar of inflection tags.
//!
//! Tags are dot-separated abbreviations (`1sg.pres`, `pl.def`, `masc`).
//! Segments outside the enumerated set are kept as [`Token::Other`] so legacy
//! free-text tags still parse.

use rechnik_core::tag::{DefaultTagParser, TagParser};

use crate::features::{Gender, Number, PersonNumber};

/// Bump when the enumerated token set changes.
pub const GRAMMAR_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    PersonNumber(PersonNumber),
    Number(Number),
    Definite,
    Indefinite,
    /// `masc`/`m`, `fem`/`f`, `neut`/`n`; never `Gender::Plural`
    Gender(Gender),
    Present,
    Past,
    Future,
    Aorist,
    Imperfect,
    Perfect,
    Imperative,
    Conditional,
    Other(String),
}

impl Token {
    /// Classifies one lower-case segment. [`Tag::parse`] swaps the original
    /// spelling back into `Other`.
    pub fn parse(segment: &str) -> Self {
        if let Some(pn) = PersonNumber::parse(segment) {
            return Token::PersonNumber(pn);
        }
        if let Some(number) = Number::from_abbrev(segment) {
            return Token::Number(number);
        }

        match segment {
            "def" => Token::Definite,
            "indef" => Token::Indefinite,
            "masc" | "m" => Token::Gender(Gender::Masculine),
            "fem" | "f" => Token::Gender(Gender::Feminine),
            "neut" | "n" => Token::Gender(Gender::Neuter),
            "pres" | "present" => Token::Present,
            "past" => Token::Past,
            "fut" | "future" => Token::Future,
            "aor" | "aorist" => Token::Aorist,
            "imperf" | "imperfect" => Token::Imperfect,
            "perf" | "perfect" => Token::Perfect,
            "imperative" | "imp" => Token::Imperative,
            "conditional" | "cond" => Token::Conditional,
            other => Token::Other(other.to_string()),
        }
    }
}

/// A parsed tag: the cleaned text, its raw segments and their tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    text: String,
    segments: Vec<String>,
    tokens: Vec<Token>,
}

impl Tag {
    pub fn parse(tag: Option<&str>) -> Self {
        let parser = DefaultTagParser;
        let Some(raw) = tag else {
            return Self::default();
        };

        let text = parser.clean(raw);
        let lowered = parser.tokenize(Some(&text));
        if lowered.is_empty() {
            return Self {
                text,
                ..Self::default()
            };
        }

        let segments: Vec<String> = text.split('.').map(str::to_string).collect();
        let tokens = lowered
            .iter()
            .zip(&segments)
            .map(|(lower, original)| match Token::parse(lower) {
                Token::Other(_) => Token::Other(original.clone()),
                token => token,
            })
            .collect();

        Self {
            text,
            segments,
            tokens,
        }
    }

    /// Trimmed tag with `!` removed, original case. NFKC-normalized, so
    /// full-width or compatibility characters come back in their plain form.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Original-case segment paired with its token.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.segments
            .iter()
            .map(String::as_str)
            .zip(self.tokens.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }
}
