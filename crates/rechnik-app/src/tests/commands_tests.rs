use std::path::Path;

use rechnik_core::source::LemmaFile;
use rechnik_core::state::ViewFilters;
use rechnik_lang_bulgarian::BulgarianAnalyzer;
use rechnik_types::{InflectionRecord, PartOfSpeech};

use crate::commands::{LemmaOutput, lemmas_from_file};

#[test]
fn test_bare_records_named_after_file() {
    let file = LemmaFile::Records(vec![InflectionRecord::new(1, "град", Some("sg"))]);

    let lemmas = lemmas_from_file(file, Path::new("data/град.json"), Some(PartOfSpeech::Noun));
    assert_eq!(lemmas.len(), 1);
    assert_eq!(lemmas[0].text, "град");
    assert_eq!(lemmas[0].part_of_speech, Some(PartOfSpeech::Noun));
}

#[test]
fn test_pos_flag_overrides_file() {
    let file = LemmaFile::from_json(
        r#"{ "id": 3, "text": "нов", "partOfSpeech": "NOUN", "inflections": [] }"#,
    )
    .unwrap();

    let lemmas = lemmas_from_file(file, Path::new("x.json"), Some(PartOfSpeech::Adjective));
    assert_eq!(lemmas[0].part_of_speech, Some(PartOfSpeech::Adjective));

    let file = LemmaFile::from_json(
        r#"{ "id": 3, "text": "нов", "partOfSpeech": "NOUN", "inflections": [] }"#,
    )
    .unwrap();
    let lemmas = lemmas_from_file(file, Path::new("x.json"), None);
    assert_eq!(lemmas[0].part_of_speech, Some(PartOfSpeech::Noun));
}

#[test]
fn test_json_output_shape() {
    let file = LemmaFile::from_json(
        r#"{
            "id": 9,
            "text": "град",
            "translation": "city",
            "partOfSpeech": "NOUN",
            "inflections": [
                { "id": 1, "form": "градът", "accentedForm": "гра\u0301дът", "grammaticalInfo": "sg.def" }
            ]
        }"#,
    )
    .unwrap();
    let lemmas = lemmas_from_file(file, Path::new("x.json"), None);

    let output = LemmaOutput::new(&BulgarianAnalyzer::new(), &lemmas[0], ViewFilters::default());
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["partOfSpeech"], "NOUN");
    assert_eq!(json["layout"]["layout"], "grid");
    let cell = &json["layout"]["data"]["rows"][0]["cells"][1];
    assert_eq!(cell["kind"], "form");
    assert_eq!(cell["form"], "градът");
    assert_eq!(cell["audio_text"], "гра\u{301}дът");
    assert_eq!(json["layout"]["data"]["rows"][1]["cells"][0]["kind"], "empty");
}
