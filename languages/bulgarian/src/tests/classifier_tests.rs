use rechnik_types::PartOfSpeech;

use crate::classifier::{
    Analysis, WordFamily, analyze, classify_adjective, classify_noun, classify_person_number,
    classify_verb,
};
use crate::features::{
    AdjectiveShape, Definiteness, Gender, GrammaticalFeatures, Mood, NounShape, Number, Person,
    PersonNumber, Tense, VerbForm,
};
use crate::grammar::Tag;

fn tokens(tag: &str) -> Vec<crate::grammar::Token> {
    Tag::parse(Some(tag)).tokens().to_vec()
}

#[test]
fn test_every_person_number_tense_combination() {
    let tenses = [
        ("pres", Tense::Present),
        ("past.aor", Tense::PastAorist),
        ("past.imperf", Tense::PastImperfect),
    ];

    for person in Person::ALL {
        for number in Number::ALL {
            for (suffix, tense) in tenses {
                let pn = PersonNumber::new(person, number);
                let tag = format!("{}.{}", pn.key(), suffix);

                let features = analyze(Some(&tag), Some(PartOfSpeech::Verb));
                assert_eq!(
                    features,
                    vec![
                        GrammaticalFeatures::PersonNumber(pn),
                        GrammaticalFeatures::Tense(tense),
                    ],
                    "tag {tag}"
                );
            }
        }
    }
}

#[test]
fn test_first_singular_present() {
    let t = tokens("1sg.pres");
    assert_eq!(classify_verb(&t), Some(VerbForm::Tensed(Tense::Present)));
    assert_eq!(
        classify_person_number(&t),
        Some(PersonNumber::new(Person::First, Number::Singular))
    );
}

#[test]
fn test_second_plural_aorist() {
    let t = tokens("2pl.past.aor");
    assert_eq!(classify_verb(&t), Some(VerbForm::Tensed(Tense::PastAorist)));
    assert_eq!(
        classify_person_number(&t),
        Some(PersonNumber::new(Person::Second, Number::Plural))
    );
}

#[test]
fn test_imperative_excludes_tense() {
    assert_eq!(
        classify_verb(&tokens("imperative")),
        Some(VerbForm::Mood(Mood::Imperative))
    );
    assert_eq!(
        classify_verb(&tokens("2sg.pres.imp")),
        Some(VerbForm::Mood(Mood::Imperative))
    );

    let analysis = Analysis::of(&Tag::parse(Some("2sg.imp!")), WordFamily::Verb);
    assert!(analysis.is_imperative());
    assert_eq!(analysis.tense_slot(), None);
}

#[test]
fn test_verb_axes_fail_independently() {
    let tense_only = tokens("past.imperfect");
    assert_eq!(
        classify_verb(&tense_only),
        Some(VerbForm::Tensed(Tense::PastImperfect))
    );
    assert_eq!(classify_person_number(&tense_only), None);

    let person_only = tokens("3pl.fut");
    assert_eq!(classify_verb(&person_only), None);
    assert_eq!(
        classify_person_number(&person_only),
        Some(PersonNumber::new(Person::Third, Number::Plural))
    );

    // "aor" without "past" is not a tense
    assert_eq!(classify_verb(&tokens("1sg.aor")), None);
}

#[test]
fn test_masculine_definite_adjective() {
    assert_eq!(
        classify_adjective(&tokens("masc.def")),
        Some(AdjectiveShape {
            gender: Gender::Masculine,
            definiteness: Definiteness::Definite,
        })
    );
    assert_eq!(
        analyze(Some("masc.def"), Some(PartOfSpeech::Adjective)),
        vec![GrammaticalFeatures::AdjectiveShape(AdjectiveShape {
            gender: Gender::Masculine,
            definiteness: Definiteness::Definite,
        })]
    );
    // no noun number in that tag
    assert_eq!(classify_noun(&tokens("masc.def")), None);
}

#[test]
fn test_adjective_gender_aliases() {
    let gender = |tag: &str| classify_adjective(&tokens(tag)).map(|s| s.gender);
    assert_eq!(gender("f"), Some(Gender::Feminine));
    assert_eq!(gender("n.def"), Some(Gender::Neuter));
    assert_eq!(gender("pl.def"), Some(Gender::Plural));
    assert_eq!(gender("sg.def"), None);
    assert_eq!(gender("def"), None);
}

#[test]
fn test_singular_indefinite_noun() {
    assert_eq!(
        classify_noun(&tokens("sg.indef")),
        Some(NounShape {
            number: Number::Singular,
            definiteness: Definiteness::Indefinite,
        })
    );
}

#[test]
fn test_bare_plural_defaults_to_indefinite() {
    assert_eq!(
        classify_noun(&tokens("pl")),
        Some(NounShape {
            number: Number::Plural,
            definiteness: Definiteness::Indefinite,
        })
    );
}

#[test]
fn test_conflicting_definiteness_is_indefinite() {
    let shape = classify_noun(&tokens("sg.def.indef")).unwrap();
    assert_eq!(shape.definiteness, Definiteness::Indefinite);
}

#[test]
fn test_noun_requires_exact_number_token() {
    assert_eq!(classify_noun(&tokens("1sg.def")), None);
    assert_eq!(classify_noun(&tokens("def")), None);
    assert_eq!(classify_noun(&tokens("xyz123")), None);
}

#[test]
fn test_classification_is_idempotent() {
    for tag in ["1sg.pres", "masc.def", "pl", "xyz123", ""] {
        for pos in [
            Some(PartOfSpeech::Noun),
            Some(PartOfSpeech::Verb),
            Some(PartOfSpeech::Pronoun),
            None,
        ] {
            assert_eq!(analyze(Some(tag), pos), analyze(Some(tag), pos));
        }
    }
}

#[test]
fn test_word_family_dispatch() {
    assert_eq!(WordFamily::of(Some(PartOfSpeech::Noun)), WordFamily::Noun);
    assert_eq!(WordFamily::of(Some(PartOfSpeech::Verb)), WordFamily::Verb);
    assert_eq!(
        WordFamily::of(Some(PartOfSpeech::Adjective)),
        WordFamily::Adjective
    );
    assert_eq!(
        WordFamily::of(Some(PartOfSpeech::Pronoun)),
        WordFamily::Adjective
    );
    for pos in [
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Numeral,
        PartOfSpeech::Interjection,
        PartOfSpeech::Particle,
        PartOfSpeech::Interrogative,
        PartOfSpeech::Unknown,
    ] {
        assert_eq!(WordFamily::of(Some(pos)), WordFamily::Other);
    }
    assert_eq!(WordFamily::of(None), WordFamily::Other);
}

#[test]
fn test_other_family_has_no_features() {
    assert!(analyze(Some("1sg.pres"), Some(PartOfSpeech::Adverb)).is_empty());
    assert!(analyze(None, Some(PartOfSpeech::Noun)).is_empty());
}

#[test]
fn test_feature_descriptions() {
    let described: Vec<String> = analyze(Some("2pl.past.aor"), Some(PartOfSpeech::Verb))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        described,
        vec!["person/number: 2nd person plural", "tense: past aorist"]
    );

    let noun = analyze(Some("pl"), Some(PartOfSpeech::Noun));
    assert_eq!(noun[0].to_string(), "noun: plural indefinite");
}

#[test]
fn test_features_serialize_by_axis() {
    let features = analyze(Some("masc.def"), Some(PartOfSpeech::Adjective));
    let json = serde_json::to_value(&features).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "axis": "adjective_shape", "value": { "gender": "masculine", "definiteness": "definite" } }
        ])
    );
}
