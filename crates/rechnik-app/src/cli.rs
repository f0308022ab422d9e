use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rechnik_core::state::ViewFilters;
use rechnik_types::PartOfSpeech;

#[derive(Parser, Debug)]
#[command(name = "rechnik", about = "Bulgarian inflection tables", version)]
pub struct Cli {
    /// Include intermediate and advanced forms.
    #[arg(long, global = true)]
    pub all_forms: bool,

    /// Show every tense block and the imperative.
    #[arg(long, global = true)]
    pub all_tenses: bool,

    /// Emit JSON instead of human-readable tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON config file. Defaults to environment variables.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render lemmas stored in a JSON file.
    Show {
        /// Lemma, array of lemmas, or bare array of inflections.
        file: PathBuf,
        /// Part of speech for a bare inflection array, or to override the file.
        #[arg(long, value_parser = parse_part_of_speech)]
        pos: Option<PartOfSpeech>,
    },
    /// Fetch a lemma from the vocabulary service and render it.
    Fetch {
        id: u64,
    },
    /// Search the vocabulary service.
    Search {
        query: String,
    },
    /// Explain a grammatical tag.
    Describe {
        tag: String,
        #[arg(long, value_parser = parse_part_of_speech)]
        pos: Option<PartOfSpeech>,
    },
    /// List the audio text of every visible form of a lemma.
    Audio {
        id: u64,
        /// Ask the service to synthesize each form and print its URL.
        #[arg(long)]
        generate: bool,
    },
}

impl Cli {
    /// Configured toggles with the command-line overrides applied.
    pub fn filters(&self, configured: ViewFilters) -> ViewFilters {
        let mut filters = configured;
        if self.all_forms {
            filters.basic_only = false;
        }
        if self.all_tenses {
            filters.present_only = false;
        }
        filters
    }
}

pub fn parse_part_of_speech(value: &str) -> Result<PartOfSpeech, String> {
    value.parse()
}
