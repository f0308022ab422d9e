use crate::formatter::{format_tag, format_with_pronoun, pronoun_hint};

#[test]
fn test_first_singular_present_label() {
    assert_eq!(format_tag(Some("1sg.pres")), "1st person singular, present");
    assert_eq!(
        format_with_pronoun(Some("1sg.pres")),
        "1st person singular, present (аз)"
    );
}

#[test]
fn test_second_plural_aorist_label() {
    assert_eq!(
        format_with_pronoun(Some("2pl.past.aor")),
        "2nd person plural, past, aorist (вие)"
    );
}

#[test]
fn test_fixed_part_order() {
    assert_eq!(
        format_tag(Some("cond.perf.fut.3pl")),
        "3rd person plural, future, perfect, conditional"
    );
    assert_eq!(format_tag(Some("imperative!")), "imperative");
}

#[test]
fn test_only_last_unknown_token_is_kept() {
    assert_eq!(format_tag(Some("foo.1sg.Bar")), "1st person singular, Bar");
    assert_eq!(format_tag(Some("masc.def")), "def");
}

#[test]
fn test_unknown_tag_kept_verbatim() {
    assert_eq!(format_tag(Some("xyz123")), "xyz123");
    assert_eq!(format_with_pronoun(Some("xyz123")), "xyz123");
}

#[test]
fn test_nothing_recognized_returns_cleaned_tag() {
    assert_eq!(format_tag(Some(" .. ")), "..");
}

#[test]
fn test_empty_tag_has_empty_label() {
    assert_eq!(format_tag(None), "");
    assert_eq!(format_tag(Some("  ")), "");
    assert_eq!(format_with_pronoun(None), "");
    assert_eq!(format_with_pronoun(Some("!")), "");
}

#[test]
fn test_pronoun_hints() {
    assert_eq!(pronoun_hint("1sg"), Some("аз"));
    assert_eq!(pronoun_hint("2SG.pres"), Some("ти"));
    assert_eq!(pronoun_hint("3sg.past.aor"), Some("той/тя/то"));
    assert_eq!(pronoun_hint("1pl"), Some("ние"));
    assert_eq!(pronoun_hint("2pl.imp"), Some("вие"));
    assert_eq!(pronoun_hint("3pl.pres"), Some("те"));
    assert_eq!(pronoun_hint("pl.def"), None);
}

#[test]
fn test_pronoun_hint_scans_raw_tag_in_priority_order() {
    // independent of tokenization: substrings count too
    assert_eq!(pronoun_hint("x3plx.1sg"), Some("аз"));
    assert_eq!(format_with_pronoun(Some("sg.def")), "def");
}

#[test]
fn test_bare_number_is_kept_as_unknown_segment() {
    assert_eq!(format_tag(Some("sg.indef")), "indef");
    assert_eq!(format_tag(Some("pl")), "pl");
    assert_eq!(format_tag(Some("def.PL")), "PL");
}

#[test]
fn test_loose_person_sets_person_without_number() {
    assert_eq!(format_tag(Some("1sl.pres")), "1st person, present");
    assert_eq!(format_with_pronoun(Some("1sl.pres")), "1st person, present");
    assert_eq!(format_tag(Some("3pg")), "3rd person");
    assert_eq!(format_tag(Some("4sg.pres")), "present, 4sg");
}
