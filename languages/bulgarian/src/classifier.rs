//! Per-family classifiers. Each is a pure function of the tag tokens and
//! returns either a complete value or `None`.

use rechnik_types::PartOfSpeech;

use crate::features::{
    AdjectiveShape, Definiteness, Gender, GrammaticalFeatures, Mood, NounShape, Number,
    PersonNumber, Tense, VerbForm,
};
use crate::grammar::{Tag, Token};

/// Which classifier family, and therefore which layout, a part of speech uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordFamily {
    Noun,
    /// Adjectives and pronouns share the gender grid
    Adjective,
    Verb,
    Other,
}

impl WordFamily {
    pub fn of(part_of_speech: Option<PartOfSpeech>) -> Self {
        match part_of_speech {
            Some(PartOfSpeech::Noun) => WordFamily::Noun,
            Some(PartOfSpeech::Verb) => WordFamily::Verb,
            Some(PartOfSpeech::Adjective | PartOfSpeech::Pronoun) => WordFamily::Adjective,
            _ => WordFamily::Other,
        }
    }
}

/// Definite only with `def` and without `indef`.
///
/// A tag with neither marker also comes out indefinite, which may really
/// mean "not annotated".
pub fn definiteness(tokens: &[Token]) -> Definiteness {
    if tokens.contains(&Token::Definite) && !tokens.contains(&Token::Indefinite) {
        Definiteness::Definite
    } else {
        Definiteness::Indefinite
    }
}

pub fn classify_noun(tokens: &[Token]) -> Option<NounShape> {
    let number = if tokens.contains(&Token::Number(Number::Singular)) {
        Number::Singular
    } else if tokens.contains(&Token::Number(Number::Plural)) {
        Number::Plural
    } else {
        return None;
    };

    Some(NounShape {
        number,
        definiteness: definiteness(tokens),
    })
}

pub fn classify_adjective(tokens: &[Token]) -> Option<AdjectiveShape> {
    let gender = [
        (Token::Gender(Gender::Masculine), Gender::Masculine),
        (Token::Gender(Gender::Feminine), Gender::Feminine),
        (Token::Gender(Gender::Neuter), Gender::Neuter),
        // `pl` names the plural row here, not a noun number
        (Token::Number(Number::Plural), Gender::Plural),
    ]
    .into_iter()
    .find(|(token, _)| tokens.contains(token))
    .map(|(_, gender)| gender)?;

    Some(AdjectiveShape {
        gender,
        definiteness: definiteness(tokens),
    })
}

/// Imperative wins over any tense marker.
pub fn classify_verb(tokens: &[Token]) -> Option<VerbForm> {
    if tokens.contains(&Token::Imperative) {
        return Some(VerbForm::Mood(Mood::Imperative));
    }

    let past = tokens.contains(&Token::Past);
    let tense = if tokens.contains(&Token::Present) {
        Tense::Present
    } else if past && tokens.contains(&Token::Aorist) {
        Tense::PastAorist
    } else if past && tokens.contains(&Token::Imperfect) {
        Tense::PastImperfect
    } else {
        return None;
    };

    Some(VerbForm::Tensed(tense))
}

pub fn classify_person_number(tokens: &[Token]) -> Option<PersonNumber> {
    tokens.iter().find_map(|token| match token {
        Token::PersonNumber(pn) => Some(*pn),
        _ => None,
    })
}

/// Classifier results for one tag under one word family.
///
/// Only the family's own axes are ever populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Analysis {
    pub noun: Option<NounShape>,
    pub adjective: Option<AdjectiveShape>,
    pub verb: Option<VerbForm>,
    pub person_number: Option<PersonNumber>,
}

impl Analysis {
    pub fn of(tag: &Tag, family: WordFamily) -> Self {
        let tokens = tag.tokens();
        match family {
            WordFamily::Noun => Self {
                noun: classify_noun(tokens),
                ..Self::default()
            },
            WordFamily::Adjective => Self {
                adjective: classify_adjective(tokens),
                ..Self::default()
            },
            WordFamily::Verb => Self {
                verb: classify_verb(tokens),
                person_number: classify_person_number(tokens),
                ..Self::default()
            },
            WordFamily::Other => Self::default(),
        }
    }

    /// Tense and person/number, when the form belongs in a tense block.
    pub fn tense_slot(&self) -> Option<(Tense, PersonNumber)> {
        match (self.verb?, self.person_number?) {
            (VerbForm::Tensed(tense), pn) => Some((tense, pn)),
            (VerbForm::Mood(_), _) => None,
        }
    }

    pub fn is_imperative(&self) -> bool {
        matches!(self.verb, Some(VerbForm::Mood(Mood::Imperative)))
    }

    pub fn features(&self) -> Vec<GrammaticalFeatures> {
        let mut features = Vec::new();
        if let Some(pn) = self.person_number {
            features.push(GrammaticalFeatures::PersonNumber(pn));
        }
        match self.verb {
            Some(VerbForm::Tensed(tense)) => features.push(GrammaticalFeatures::Tense(tense)),
            Some(VerbForm::Mood(mood)) => features.push(GrammaticalFeatures::Mood(mood)),
            None => {}
        }
        if let Some(noun) = self.noun {
            features.push(GrammaticalFeatures::NounShape(noun));
        }
        if let Some(adjective) = self.adjective {
            features.push(GrammaticalFeatures::AdjectiveShape(adjective));
        }
        features
    }
}

/// All feature values the part of speech's classifiers extract from a tag.
pub fn analyze(tag: Option<&str>, part_of_speech: Option<PartOfSpeech>) -> Vec<GrammaticalFeatures> {
    Analysis::of(&Tag::parse(tag), WordFamily::of(part_of_speech)).features()
}
