use rechnik_types::{InflectionRecord, PartOfSpeech};

use crate::layout::Layout;
use crate::state::ViewFilters;

/// Grammar-aware presentation of a lemma's inflections, implemented per language.
pub trait InflectionAnalyzer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "bg", ...)
    fn language_code(&self) -> &str;

    /// Human-readable description of a tag; empty for a missing tag
    fn describe(&self, tag: Option<&str>) -> String;

    /// Lay the inflection set out for display under the given filters
    fn layout<'a>(
        &self,
        records: &'a [InflectionRecord],
        part_of_speech: Option<PartOfSpeech>,
        filters: &ViewFilters,
    ) -> Layout<'a>;
}
