use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Person::First),
            '2' => Some(Person::Second),
            '3' => Some(Person::Third),
            _ => None,
        }
    }

    pub fn digit(&self) -> char {
        match self {
            Person::First => '1',
            Person::Second => '2',
            Person::Third => '3',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "1st person",
            Person::Second => "2nd person",
            Person::Third => "3rd person",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn from_abbrev(s: &str) -> Option<Self> {
        match s {
            "sg" => Some(Number::Singular),
            "pl" => Some(Number::Plural),
            _ => None,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Number::Singular => "sg",
            Number::Plural => "pl",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

/// Person and number of a finite verb form, e.g. `1sg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PersonNumber {
    pub person: Person,
    pub number: Number,
}

impl PersonNumber {
    pub fn new(person: Person, number: Number) -> Self {
        Self { person, number }
    }

    /// Parses exactly `{1,2,3}{sg,pl}`.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let person = Person::from_digit(chars.next()?)?;
        let number = Number::from_abbrev(chars.as_str())?;
        Some(Self { person, number })
    }

    /// Map key used by the verb table, e.g. `"1sg"`
    pub fn key(&self) -> String {
        format!("{}{}", self.person.digit(), self.number.abbrev())
    }

    /// Bulgarian personal pronoun for this slot.
    pub fn pronoun(&self) -> &'static str {
        match (self.person, self.number) {
            (Person::First, Number::Singular) => "аз",
            (Person::Second, Number::Singular) => "ти",
            (Person::Third, Number::Singular) => "той/тя/то",
            (Person::First, Number::Plural) => "ние",
            (Person::Second, Number::Plural) => "вие",
            (Person::Third, Number::Plural) => "те",
        }
    }
}

impl fmt::Display for PersonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.person.as_str(), self.number.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    PastAorist,
    PastImperfect,
}

impl Tense {
    /// Display order of the verb table blocks
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::PastAorist, Tense::PastImperfect];

    pub fn title(&self) -> &'static str {
        match self {
            Tense::Present => "Present",
            Tense::PastAorist => "Past aorist",
            Tense::PastImperfect => "Past imperfect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Imperative,
}

/// Verb classification: a tense, or the imperative mood which has no tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbForm {
    Tensed(Tense),
    Mood(Mood),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Definiteness {
    Indefinite,
    Definite,
}

impl Definiteness {
    pub const ALL: [Definiteness; 2] = [Definiteness::Indefinite, Definiteness::Definite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Definiteness::Indefinite => "indefinite",
            Definiteness::Definite => "definite",
        }
    }
}

/// Adjective agreement slot. `Plural` is the genderless plural row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Masculine,
        Gender::Feminine,
        Gender::Neuter,
        Gender::Plural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::Plural => "plural",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NounShape {
    pub number: Number,
    pub definiteness: Definiteness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AdjectiveShape {
    pub gender: Gender,
    pub definiteness: Definiteness,
}

/// One fully-populated axis value produced by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "axis", content = "value", rename_all = "snake_case")]
pub enum GrammaticalFeatures {
    PersonNumber(PersonNumber),
    Tense(Tense),
    Mood(Mood),
    NounShape(NounShape),
    AdjectiveShape(AdjectiveShape),
}

impl fmt::Display for GrammaticalFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammaticalFeatures::PersonNumber(pn) => write!(f, "person/number: {pn}"),
            GrammaticalFeatures::Tense(tense) => {
                write!(f, "tense: {}", tense.title().to_lowercase())
            }
            GrammaticalFeatures::Mood(Mood::Imperative) => write!(f, "mood: imperative"),
            GrammaticalFeatures::NounShape(shape) => write!(
                f,
                "noun: {} {}",
                shape.number.as_str(),
                shape.definiteness.as_str()
            ),
            GrammaticalFeatures::AdjectiveShape(shape) => write!(
                f,
                "adjective: {} {}",
                shape.gender.as_str(),
                shape.definiteness.as_str()
            ),
        }
    }
}
