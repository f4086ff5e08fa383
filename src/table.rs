// src/table.rs

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Collapse every whitespace run (spaces, tabs, newlines) to a single space
/// and trim both ends. Every piece of text compared or returned by the
/// resolution pipeline goes through this first.
pub fn normalize_text(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// One calendar row as rendered: the leading label cell, the `td` data
/// cells, and the full cell sequence in document order (`th` and `td`
/// mixed). `all_cells` exists because some tables render data cells as `th`,
/// leaving `cells` empty; extraction falls back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub cells: Vec<String>,
    pub all_cells: Vec<String>,
}

impl Row {
    /// Row whose leading cell is structurally separated from its data cells
    /// (the common `th` label + `td` data layout).
    pub fn new(label: impl Into<String>, cells: Vec<String>) -> Self {
        let label = label.into();
        let mut all_cells = Vec::with_capacity(cells.len() + 1);
        all_cells.push(label.clone());
        all_cells.extend(cells.iter().cloned());
        Self {
            label,
            cells,
            all_cells,
        }
    }
}

/// Point-in-time capture of the rendered calendar table. Header order
/// defines column index semantics; the snapshot is read-only for the
/// duration of one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl TableSnapshot {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.rows.is_empty()
    }
}
