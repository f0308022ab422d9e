use rechnik_core::language::InflectionAnalyzer;
use rechnik_core::layout::Layout;
use rechnik_core::state::ViewFilters;
use rechnik_types::{InflectionRecord, PartOfSpeech};

use crate::classifier;
use crate::features::GrammaticalFeatures;
use crate::formatter;
use crate::grammar::GRAMMAR_VERSION;
use crate::view::InflectionView;

/// Bulgarian inflection analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct BulgarianAnalyzer;

impl BulgarianAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn grammar_version(&self) -> u32 {
        GRAMMAR_VERSION
    }

    /// Structured features of a tag for the given part of speech
    pub fn analyze(
        &self,
        tag: Option<&str>,
        part_of_speech: Option<PartOfSpeech>,
    ) -> Vec<GrammaticalFeatures> {
        classifier::analyze(tag, part_of_speech)
    }

    /// Classify an inflection set once for repeated layouts.
    pub fn view<'a>(
        &self,
        records: &'a [InflectionRecord],
        part_of_speech: Option<PartOfSpeech>,
    ) -> InflectionView<'a> {
        InflectionView::new(records, part_of_speech)
    }
}

impl InflectionAnalyzer for BulgarianAnalyzer {
    fn language_code(&self) -> &str {
        "bg"
    }

    fn describe(&self, tag: Option<&str>) -> String {
        formatter::format_with_pronoun(tag)
    }

    fn layout<'a>(
        &self,
        records: &'a [InflectionRecord],
        part_of_speech: Option<PartOfSpeech>,
        filters: &ViewFilters,
    ) -> Layout<'a> {
        self.view(records, part_of_speech).layout(filters)
    }
}
