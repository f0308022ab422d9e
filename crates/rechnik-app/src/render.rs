//! Plain-text rendering of layouts and service results.

use rechnik_core::layout::{Cell, Grid, Layout, ListEntry};
use rechnik_types::{LemmaDetail, LemmaSummary};

/// Shown in grid cells with no form
pub const EMPTY_MARKER: &str = "—";

/// Display width; combining stress marks take no column.
fn width(text: &str) -> usize {
    text.chars()
        .filter(|c| !('\u{300}'..='\u{36f}').contains(c))
        .count()
}

fn pad(text: &str, to: usize) -> String {
    format!("{text}{}", " ".repeat(to.saturating_sub(width(text))))
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| pad(cell, *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Left-aligned columns under a dashed rule.
pub fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell));
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn cell_text(cell: &Cell<'_>) -> String {
    cell.record()
        .map_or_else(|| EMPTY_MARKER.to_string(), |r| r.display_form().to_string())
}

/// Title line and table. Rows with pronoun hints get a pronoun column
/// before each form column.
pub fn grid(grid: &Grid<'_>) -> String {
    let hinted = grid.rows.iter().any(|row| !row.hints.is_empty());

    let mut headers = vec![String::new()];
    for column in &grid.columns {
        if hinted {
            headers.push(String::new());
        }
        headers.push(column.to_string());
    }

    let rows: Vec<Vec<String>> = grid
        .rows
        .iter()
        .map(|row| {
            let mut line = vec![row.label.to_string()];
            for (i, cell) in row.cells.iter().enumerate() {
                if hinted {
                    line.push(row.hints.get(i).copied().unwrap_or_default().to_string());
                }
                line.push(cell_text(cell));
            }
            line
        })
        .collect();

    format!("{}\n{}", grid.title, table(&headers, &rows))
}

pub fn list(entries: &[ListEntry<'_>]) -> String {
    if entries.is_empty() {
        return "No inflections.\n".to_string();
    }

    let headers = ["FORM".to_string(), "DESCRIPTION".to_string()];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.record.display_form().to_string(), e.label.clone()])
        .collect();
    table(&headers, &rows)
}

/// Tense blocks in order, then the imperative section when shown.
pub fn layout(layout: &Layout<'_>) -> String {
    match layout {
        Layout::Grid(g) => grid(g),
        Layout::List(entries) => list(entries),
        Layout::Verb(verb) => {
            let mut sections: Vec<String> = verb.tenses.iter().map(|g| grid(g)).collect();
            if let Some(imperative) = &verb.imperative {
                sections.push(format!("Imperative\n{}", list(imperative)));
            }
            sections.join("\n")
        }
    }
}

/// `пиша (Verb): to write`
pub fn lemma_header(lemma: &LemmaDetail) -> String {
    let mut header = lemma.text.clone();
    if let Some(pos) = lemma.part_of_speech {
        header.push_str(&format!(" ({pos})"));
    }
    if !lemma.translation.is_empty() {
        header.push_str(&format!(": {}", lemma.translation));
    }
    header
}

pub fn lemma(lemma: &LemmaDetail, inflections: &Layout<'_>) -> String {
    format!("{}\n\n{}", lemma_header(lemma), layout(inflections))
}

pub fn search_results(query: &str, hits: &[LemmaSummary]) -> String {
    if hits.is_empty() {
        return format!("No lemmas matched \"{query}\".\n");
    }

    let headers = ["ID", "TEXT", "POS", "TRANSLATION", "FORMS"].map(String::from);
    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|hit| {
            vec![
                hit.id.to_string(),
                hit.text.clone(),
                hit.part_of_speech
                    .map(|pos| pos.to_string())
                    .unwrap_or_default(),
                hit.translation.clone(),
                hit.inflection_count.to_string(),
            ]
        })
        .collect();
    table(&headers, &rows)
}
