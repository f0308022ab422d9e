use clap::Parser;
use rechnik_core::state::ViewFilters;
use rechnik_types::PartOfSpeech;

use crate::cli::{Cli, Command, parse_part_of_speech};

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["rechnik", "fetch", "42", "--all-tenses", "--json"]).unwrap();

    assert!(cli.json);
    assert!(cli.all_tenses);
    assert!(!cli.all_forms);
    assert!(matches!(cli.command, Command::Fetch { id: 42 }));
}

#[test]
fn test_filters_override_config() {
    let cli = Cli::try_parse_from(["rechnik", "--all-forms", "search", "пиша"]).unwrap();
    assert_eq!(cli.filters(ViewFilters::default()), ViewFilters::new(false, true));

    let cli = Cli::try_parse_from(["rechnik", "search", "пиша"]).unwrap();
    assert_eq!(
        cli.filters(ViewFilters::new(false, false)),
        ViewFilters::new(false, false)
    );
}

#[test]
fn test_part_of_speech_argument() {
    let cli = Cli::try_parse_from(["rechnik", "describe", "masc.def", "--pos", "adj"]).unwrap();
    match cli.command {
        Command::Describe { tag, pos } => {
            assert_eq!(tag, "masc.def");
            assert_eq!(pos, Some(PartOfSpeech::Adjective));
        }
        other => panic!("unexpected command {other:?}"),
    }

    assert!(Cli::try_parse_from(["rechnik", "describe", "pl", "--pos", "gerund"]).is_err());
}

#[test]
fn test_part_of_speech_parser_reports_value() {
    assert_eq!(parse_part_of_speech("Num"), Ok(PartOfSpeech::Numeral));
    assert_eq!(
        parse_part_of_speech("gerund"),
        Err("unknown part of speech \"gerund\"".to_string())
    );
}

#[test]
fn test_show_takes_path_and_config() {
    let cli = Cli::try_parse_from([
        "rechnik",
        "--config",
        "rechnik.json",
        "show",
        "lemmas.json",
        "--pos",
        "NOUN",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("rechnik.json")));
    match cli.command {
        Command::Show { file, pos } => {
            assert_eq!(file, std::path::PathBuf::from("lemmas.json"));
            assert_eq!(pos, Some(PartOfSpeech::Noun));
        }
        other => panic!("unexpected command {other:?}"),
    }
}
