//! Classifies an inflection set once and lays it out on demand.

use rechnik_core::layout::{Layout, ListEntry};
use rechnik_core::state::ViewFilters;
use rechnik_types::{InflectionRecord, PartOfSpeech};

use crate::classifier::{Analysis, WordFamily};
use crate::formatter::format_with_pronoun;
use crate::grammar::Tag;
use crate::grid::{self, VerbBlocks};

/// One record with everything derived from its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord<'a> {
    pub record: &'a InflectionRecord,
    pub analysis: Analysis,
    /// Human label with pronoun hint, shown by the flat list
    pub label: String,
}

impl<'a> ClassifiedRecord<'a> {
    pub fn new(record: &'a InflectionRecord, family: WordFamily) -> Self {
        let tag = Tag::parse(record.tag.as_deref());
        Self {
            record,
            analysis: Analysis::of(&tag, family),
            label: format_with_pronoun(record.tag.as_deref()),
        }
    }
}

/// Inflections of one lemma, classified for its part of speech.
///
/// Filter changes only re-project the stored classifications; records are
/// never re-parsed.
#[derive(Debug, Clone)]
pub struct InflectionView<'a> {
    part_of_speech: Option<PartOfSpeech>,
    family: WordFamily,
    entries: Vec<ClassifiedRecord<'a>>,
    verb: Option<VerbBlocks<'a>>,
}

impl<'a> InflectionView<'a> {
    pub fn new(records: &'a [InflectionRecord], part_of_speech: Option<PartOfSpeech>) -> Self {
        let family = WordFamily::of(part_of_speech);
        let entries: Vec<ClassifiedRecord<'a>> = records
            .iter()
            .map(|record| ClassifiedRecord::new(record, family))
            .collect();

        // The verb table ignores the difficulty filter, so it is built once.
        let verb = match family {
            WordFamily::Verb => grid::verb_blocks(&entries),
            _ => None,
        };

        tracing::debug!(
            "Classified {} inflections as {:?} ({:?})",
            entries.len(),
            family,
            part_of_speech
        );

        Self {
            part_of_speech,
            family,
            entries,
            verb,
        }
    }

    pub fn family(&self) -> WordFamily {
        self.family
    }

    pub fn entries(&self) -> &[ClassifiedRecord<'a>] {
        &self.entries
    }

    pub fn verb_blocks(&self) -> Option<&VerbBlocks<'a>> {
        self.verb.as_ref()
    }

    /// Picks the layout for the part of speech, falling back to the flat
    /// list whenever the chosen grid would have no classified form.
    pub fn layout(&self, filters: &ViewFilters) -> Layout<'a> {
        let structured = match self.family {
            WordFamily::Noun => grid::noun_grid(self.admitted(filters)).map(Layout::Grid),
            WordFamily::Adjective => {
                let title = match self.part_of_speech {
                    Some(PartOfSpeech::Pronoun) => "Pronoun",
                    _ => "Adjective",
                };
                grid::adjective_grid(title, self.admitted(filters)).map(Layout::Grid)
            }
            WordFamily::Verb => self
                .verb
                .as_ref()
                .map(|blocks| Layout::Verb(blocks.project(filters.present_only))),
            WordFamily::Other => None,
        };

        structured.unwrap_or_else(|| {
            if self.family != WordFamily::Other {
                tracing::debug!(
                    "No classified forms for {:?} grid, showing flat list",
                    self.family
                );
            }
            Layout::List(self.list(filters))
        })
    }

    /// Flat list of the records the difficulty filter admits, in input order.
    pub fn list(&self, filters: &ViewFilters) -> Vec<ListEntry<'a>> {
        self.admitted(filters)
            .map(|entry| ListEntry::new(entry.record, entry.label.clone()))
            .collect()
    }

    fn admitted<'s>(
        &'s self,
        filters: &'s ViewFilters,
    ) -> impl Iterator<Item = &'s ClassifiedRecord<'a>> + 's {
        self.entries
            .iter()
            .filter(move |entry| filters.admits(entry.record))
    }
}
