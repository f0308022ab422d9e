//! Human-readable descriptions of tags, used by the flat list.
//!
//! Independent of the grid classifiers: it recognises a wider vocabulary
//! (future, perfect, conditional) and keeps unknown segments verbatim.

use crate::features::{Number, Person, PersonNumber};
use crate::grammar::{Tag, Token};

#[derive(Default)]
struct LabelParts<'t> {
    person: Option<&'static str>,
    number: Option<&'static str>,
    tense: Option<&'static str>,
    aspect: Option<&'static str>,
    mood: Option<&'static str>,
    other: Option<&'t str>,
}

/// Person digit followed by `s|p` and `g|l`, e.g. `1sl`. Only `sg` and `pl`
/// also name a number.
fn loose_person_number(segment: &str) -> Option<(Person, Option<Number>)> {
    let lower = segment.to_lowercase();
    let mut chars = lower.chars();
    let person = Person::from_digit(chars.next()?)?;
    let rest = chars.as_str();
    let mut suffix = rest.chars();
    match (suffix.next(), suffix.next(), suffix.next()) {
        (Some('s' | 'p'), Some('g' | 'l'), None) => Some((person, Number::from_abbrev(rest))),
        _ => None,
    }
}

/// Describes a tag in English, e.g. `"1sg.pres"` → `"1st person singular, present"`.
///
/// Returns the cleaned tag unchanged when no segment yields any text.
pub fn format_tag(tag: Option<&str>) -> String {
    let tag = Tag::parse(tag);
    if tag.is_empty() {
        return String::new();
    }

    let mut parts = LabelParts::default();
    for (raw, token) in tag.segments() {
        match token {
            Token::PersonNumber(pn) => {
                parts.person = Some(pn.person.as_str());
                parts.number = Some(pn.number.as_str());
            }
            Token::Present => parts.tense = Some("present"),
            Token::Past => parts.tense = Some("past"),
            Token::Future => parts.tense = Some("future"),
            Token::Aorist => parts.aspect = Some("aorist"),
            Token::Imperfect => parts.aspect = Some("imperfect"),
            Token::Perfect => parts.aspect = Some("perfect"),
            Token::Imperative => parts.mood = Some("imperative"),
            Token::Conditional => parts.mood = Some("conditional"),
            // Bare `sg`/`pl` carry no person, so they are not labelled here
            Token::Number(_)
            | Token::Definite
            | Token::Indefinite
            | Token::Gender(_)
            | Token::Other(_) => match loose_person_number(raw) {
                Some((person, number)) => {
                    parts.person = Some(person.as_str());
                    if let Some(number) = number {
                        parts.number = Some(number.as_str());
                    }
                }
                None => parts.other = Some(raw),
            },
        }
    }

    let mut result: Vec<String> = Vec::new();
    match (parts.person, parts.number) {
        (Some(person), Some(number)) => result.push(format!("{person} {number}")),
        (Some(person), None) => result.push(person.to_string()),
        (None, Some(number)) => result.push(number.to_string()),
        (None, None) => {}
    }
    result.extend(
        [parts.tense, parts.aspect, parts.mood]
            .into_iter()
            .flatten()
            .map(str::to_string),
    );
    if let Some(other) = parts.other.filter(|o| !o.is_empty()) {
        result.push(other.to_string());
    }

    if result.is_empty() {
        tag.text().to_string()
    } else {
        result.join(", ")
    }
}

/// Bulgarian pronoun for the first person/number marker found in the raw tag.
///
/// Scans for `1sg`, `2sg`, `3sg`, `1pl`, `2pl`, `3pl` in that order.
pub fn pronoun_hint(tag: &str) -> Option<&'static str> {
    let lower = tag.to_lowercase();
    ["1sg", "2sg", "3sg", "1pl", "2pl", "3pl"]
        .into_iter()
        .find(|key| lower.contains(*key))
        .and_then(PersonNumber::parse)
        .map(|pn| pn.pronoun())
}

/// [`format_tag`] followed by the pronoun hint in parentheses, when there is one.
pub fn format_with_pronoun(tag: Option<&str>) -> String {
    let Some(raw) = tag else {
        return String::new();
    };

    let formatted = format_tag(Some(raw));
    match pronoun_hint(raw) {
        Some(pronoun) if !formatted.is_empty() => format!("{formatted} ({pronoun})"),
        _ => formatted,
    }
}
