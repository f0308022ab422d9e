//! Builds the fixed-shape grids from classified records.
//!
//! Builders return `None` when no record classified, so the caller can fall
//! back to the flat list instead of showing an empty grid.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use rechnik_core::layout::{Cell, Grid, GridRow, ListEntry, VerbTable};
use rechnik_types::InflectionRecord;

use crate::features::{Definiteness, Gender, Number, Person, PersonNumber, Tense};
use crate::view::ClassifiedRecord;

/// A closed set of values laid out along one side of a grid.
pub trait Axis: Copy + Eq + Hash + 'static {
    /// Values in display order
    fn values() -> &'static [Self];
    fn label(self) -> &'static str;
}

impl Axis for Number {
    fn values() -> &'static [Self] {
        &Number::ALL
    }
    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Axis for Definiteness {
    fn values() -> &'static [Self] {
        &Definiteness::ALL
    }
    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Axis for Gender {
    fn values() -> &'static [Self] {
        &Gender::ALL
    }
    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Axis for Person {
    fn values() -> &'static [Self] {
        &Person::ALL
    }
    fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Places records into a `R × C` matrix. The first record for a cell wins.
fn matrix<'a, R: Axis, C: Axis>(
    title: impl Into<String>,
    placed: impl IntoIterator<Item = (R, C, &'a InflectionRecord)>,
) -> (Grid<'a>, usize) {
    let mut cells: HashMap<(R, C), &'a InflectionRecord> = HashMap::new();
    let mut classified = 0;
    for (row, column, record) in placed {
        classified += 1;
        cells.entry((row, column)).or_insert(record);
    }

    let rows = R::values()
        .iter()
        .map(|&row| GridRow {
            label: row.label(),
            hints: Vec::new(),
            cells: C::values()
                .iter()
                .map(|&column| Cell::from_option(cells.get(&(row, column)).copied()))
                .collect(),
        })
        .collect();

    let grid = Grid {
        title: title.into(),
        columns: C::values().iter().map(|c| c.label()).collect(),
        rows,
    };
    (grid, classified)
}

/// Number × definiteness. Every row is shown.
pub fn noun_grid<'a, 'r>(
    entries: impl IntoIterator<Item = &'r ClassifiedRecord<'a>>,
) -> Option<Grid<'a>>
where
    'a: 'r,
{
    let placed = entries.into_iter().filter_map(|entry| {
        entry
            .analysis
            .noun
            .map(|shape| (shape.number, shape.definiteness, entry.record))
    });

    let (grid, classified) = matrix("Noun", placed);
    (classified > 0).then_some(grid)
}

/// Gender × definiteness, masculine → feminine → neuter → plural.
///
/// Rows with no form in either column are left out.
pub fn adjective_grid<'a, 'r>(
    title: &str,
    entries: impl IntoIterator<Item = &'r ClassifiedRecord<'a>>,
) -> Option<Grid<'a>>
where
    'a: 'r,
{
    let placed = entries.into_iter().filter_map(|entry| {
        entry
            .analysis
            .adjective
            .map(|shape| (shape.gender, shape.definiteness, entry.record))
    });

    let (mut grid, classified) = matrix(title, placed);
    if classified == 0 {
        return None;
    }
    grid.rows.retain(|row| !row.is_empty());
    Some(grid)
}

/// Every tense block of a verb plus its imperative forms.
///
/// Built once per inflection set; [`VerbBlocks::project`] picks what the
/// tense filter shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbBlocks<'a> {
    /// Forms per tense keyed by `"{person}{number}"`, e.g. `"1sg"`
    pub by_tense: BTreeMap<Tense, HashMap<String, &'a InflectionRecord>>,
    pub tenses: Vec<Grid<'a>>,
    pub imperative: Vec<ListEntry<'a>>,
}

impl<'a> VerbBlocks<'a> {
    /// The form for a tense and key such as `"3pl"`.
    pub fn form(&self, tense: Tense, key: &str) -> Option<&'a InflectionRecord> {
        self.by_tense.get(&tense)?.get(key).copied()
    }

    /// Present block only, or all blocks with the imperative bucket last.
    pub fn project(&self, present_only: bool) -> VerbTable<'a> {
        if present_only {
            return VerbTable {
                tenses: self.tenses.iter().take(1).cloned().collect(),
                imperative: None,
            };
        }

        let imperative = (!self.imperative.is_empty()).then(|| self.imperative.clone());
        VerbTable {
            tenses: self.tenses.clone(),
            imperative,
        }
    }
}

/// Groups verb forms by tense; `None` if no form landed in any tense block.
pub fn verb_blocks<'a, 'r>(
    entries: impl IntoIterator<Item = &'r ClassifiedRecord<'a>>,
) -> Option<VerbBlocks<'a>>
where
    'a: 'r,
{
    let mut by_tense: BTreeMap<Tense, HashMap<String, &'a InflectionRecord>> = Tense::ALL
        .iter()
        .map(|&tense| (tense, HashMap::new()))
        .collect();
    let mut imperative = Vec::new();
    let mut placed = 0;

    for entry in entries {
        if entry.analysis.is_imperative() {
            imperative.push(ListEntry::new(entry.record, entry.label.clone()));
            continue;
        }
        if let Some((tense, pn)) = entry.analysis.tense_slot() {
            placed += 1;
            by_tense
                .entry(tense)
                .or_default()
                .entry(pn.key())
                .or_insert(entry.record);
        }
    }

    if placed == 0 {
        return None;
    }

    let tenses = Tense::ALL
        .iter()
        .map(|tense| tense_grid(*tense, &by_tense[tense]))
        .collect();

    Some(VerbBlocks {
        by_tense,
        tenses,
        imperative,
    })
}

/// Person rows × number columns, each slot labelled with its pronoun.
fn tense_grid<'a>(tense: Tense, forms: &HashMap<String, &'a InflectionRecord>) -> Grid<'a> {
    let rows = Person::ALL
        .iter()
        .map(|&person| {
            let slots: Vec<PersonNumber> = Number::ALL
                .iter()
                .map(|&number| PersonNumber::new(person, number))
                .collect();
            GridRow {
                label: person.label(),
                hints: slots.iter().map(PersonNumber::pronoun).collect(),
                cells: slots
                    .iter()
                    .map(|pn| Cell::from_option(forms.get(&pn.key()).copied()))
                    .collect(),
            }
        })
        .collect();

    Grid {
        title: tense.title().to_string(),
        columns: Number::ALL.iter().map(|n| n.label()).collect(),
        rows,
    }
}
