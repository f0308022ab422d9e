use crate::tag::{DefaultTagParser, TagParser};

#[test]
fn test_tokenize_lowercases_and_splits() {
    let parser = DefaultTagParser;
    assert_eq!(parser.tokenize(Some("1SG.Pres")), vec!["1sg", "pres"]);
    assert_eq!(
        parser.tokenize(Some("2pl.past.aor")),
        vec!["2pl", "past", "aor"]
    );
}

#[test]
fn test_tokenize_strips_exclamation_marks_and_whitespace() {
    let parser = DefaultTagParser;
    assert_eq!(parser.tokenize(Some("  imperative! ")), vec!["imperative"]);
    assert_eq!(parser.tokenize(Some("2sg.!imp!")), vec!["2sg", "imp"]);
}

#[test]
fn test_tokenize_empty_inputs() {
    let parser = DefaultTagParser;
    assert!(parser.tokenize(None).is_empty());
    assert!(parser.tokenize(Some("")).is_empty());
    assert!(parser.tokenize(Some("   ")).is_empty());
    assert!(parser.tokenize(Some(" !! ")).is_empty());
}

#[test]
fn test_tokenize_normalizes_fullwidth_characters() {
    let parser = DefaultTagParser;
    assert_eq!(parser.tokenize(Some("１ｓｇ.ｐｒｅｓ")), vec!["1sg", "pres"]);
}

#[test]
fn test_clean_preserves_case() {
    let parser = DefaultTagParser;
    assert_eq!(parser.clean(" Foo.Bar! "), "Foo.Bar");
}
