//! Rendering-agnostic output of the inflection engine.
//!
//! Everything here borrows the caller's records, so a layout never outlives
//! the slice it was built from.

use rechnik_types::InflectionRecord;
use serde::Serialize;

/// One grid cell: either explicitly empty or a single form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell<'a> {
    Empty,
    Form {
        #[serde(flatten)]
        record: &'a InflectionRecord,
        audio_text: &'a str,
    },
}

impl<'a> Cell<'a> {
    pub fn form(record: &'a InflectionRecord) -> Self {
        Cell::Form {
            record,
            audio_text: record.audio_text(),
        }
    }

    pub fn from_option(record: Option<&'a InflectionRecord>) -> Self {
        record.map_or(Cell::Empty, Cell::form)
    }

    pub fn record(&self) -> Option<&'a InflectionRecord> {
        match self {
            Cell::Empty => None,
            Cell::Form { record, .. } => Some(*record),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow<'a> {
    pub label: &'static str,
    /// Per-column hint shown next to the cell (verb pronouns), else empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<&'static str>,
    pub cells: Vec<Cell<'a>>,
}

impl<'a> GridRow<'a> {
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

/// Fixed-shape matrix keyed by two linguistic axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid<'a> {
    pub title: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<GridRow<'a>>,
}

impl<'a> Grid<'a> {
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell<'a>> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Looks a cell up by its row and column labels.
    pub fn cell_at(&self, row: &str, column: &str) -> Option<&Cell<'a>> {
        let column = self.columns.iter().position(|c| *c == column)?;
        self.rows
            .iter()
            .find(|r| r.label == row)
            .and_then(|r| r.cells.get(column))
    }

    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| !c.is_empty())
            .count()
    }
}

/// Flat-list row: the form plus its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry<'a> {
    #[serde(flatten)]
    pub record: &'a InflectionRecord,
    pub label: String,
    pub audio_text: &'a str,
}

impl<'a> ListEntry<'a> {
    pub fn new(record: &'a InflectionRecord, label: String) -> Self {
        Self {
            record,
            label,
            audio_text: record.audio_text(),
        }
    }
}

/// Tense blocks in display order plus the imperative bucket, if shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbTable<'a> {
    pub tenses: Vec<Grid<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imperative: Option<Vec<ListEntry<'a>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", content = "data", rename_all = "snake_case")]
pub enum Layout<'a> {
    Grid(Grid<'a>),
    Verb(VerbTable<'a>),
    List(Vec<ListEntry<'a>>),
}

impl<'a> Layout<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Layout::Grid(_) => "grid",
            Layout::Verb(_) => "verb",
            Layout::List(_) => "list",
        }
    }

    /// Every form the layout shows, in display order.
    pub fn visible_records(&self) -> Vec<&'a InflectionRecord> {
        match self {
            Layout::Grid(grid) => grid_records(grid),
            Layout::Verb(table) => {
                let mut records: Vec<_> = table.tenses.iter().flat_map(grid_records).collect();
                if let Some(imperative) = &table.imperative {
                    records.extend(imperative.iter().map(|e| e.record));
                }
                records
            }
            Layout::List(entries) => entries.iter().map(|e| e.record).collect(),
        }
    }
}

fn grid_records<'a>(grid: &Grid<'a>) -> Vec<&'a InflectionRecord> {
    grid.rows
        .iter()
        .flat_map(|r| r.cells.iter())
        .filter_map(Cell::record)
        .collect()
}
