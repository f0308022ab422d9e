use std::path::PathBuf;

use crate::error::LoadError;
use crate::source::{JsonFileSource, LemmaFile, LemmaSource};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rechnik-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn test_lemma_file_shapes() {
    let one = LemmaFile::from_json(r#"{"id": 1, "text": "стол", "inflections": []}"#).unwrap();
    assert!(matches!(one, LemmaFile::One(_)));

    let many = LemmaFile::from_json(r#"[{"id": 1, "text": "стол"}, {"id": 2, "text": "пиша"}]"#)
        .unwrap();
    assert_eq!(many.into_lemmas().len(), 2);

    let records =
        LemmaFile::from_json(r#"[{"id": 1, "form": "стол", "tag": "sg.indef"}]"#).unwrap();
    match records {
        LemmaFile::Records(records) => assert_eq!(records[0].form, "стол"),
        other => panic!("expected bare records, got {:?}", other),
    }
}

#[test]
fn test_lemma_file_rejects_garbage() {
    let err = LemmaFile::from_json("{\"nope\": true}").unwrap_err();
    assert!(matches!(err, LoadError::InvalidFormat(_)));
}

#[tokio::test]
async fn test_json_file_source_finds_lemma_by_id() {
    let path = temp_file(
        "lemmas.json",
        r#"[{"id": 1, "text": "стол"}, {"id": 2, "text": "пиша", "partOfSpeech": "VERB"}]"#,
    );
    let source = JsonFileSource::new(&path);

    let lemma = source.lemma(2).await.unwrap();
    assert_eq!(lemma.text, "пиша");

    let missing = source.lemma(9).await.unwrap_err();
    assert!(matches!(missing, LoadError::NotFound(9)));

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_json_file_source_missing_file() {
    let source = JsonFileSource::new("/definitely/not/here/lemmas.json");
    let err = source.read().await.unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
}
