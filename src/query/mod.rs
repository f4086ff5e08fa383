// src/query/mod.rs

pub mod extract;

use crate::resolve::{resolve_column, resolve_row};
use crate::table::TableSnapshot;
use thiserror::Error;
use tracing::debug;

/// Why a single (row, date) pair failed to resolve. These never abort the
/// batch; the orchestrator converts each into a `CellResult::Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("column not found for date '{0}'")]
    ColumnNotFound(String),
    #[error("row not found for label '{0}'")]
    RowNotFound(String),
    #[error("column index out of range (j={index}, cells={cell_count})")]
    IndexMismatch { index: isize, cell_count: usize },
    #[error("cell not found")]
    CellNotFound,
}

/// Outcome of one (row, date) query: the normalized cell text, or the
/// reason it could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellResult {
    Symbol(String),
    Failure(QueryError),
}

/// One entry of the batch result. Outcomes keep the orchestrator's
/// row-major insertion order, so a rendered report is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub row_label: String,
    pub date_label: String,
    pub result: CellResult,
}

/// Resolve every (row label, date label) pair against the snapshot, rows
/// outer, dates inner. Exactly one outcome per pair; a pair that fails to
/// resolve records its error and the batch continues.
pub fn run(
    snapshot: &TableSnapshot,
    row_labels: &[String],
    date_labels: &[String],
) -> Vec<QueryOutcome> {
    let mut outcomes = Vec::with_capacity(row_labels.len() * date_labels.len());
    for row_label in row_labels {
        for date_label in date_labels {
            let result = match resolve_cell(snapshot, row_label, date_label) {
                Ok(text) => CellResult::Symbol(text),
                Err(err) => {
                    debug!(row = %row_label, date = %date_label, %err, "query failed");
                    CellResult::Failure(err)
                }
            };
            outcomes.push(QueryOutcome {
                row_label: row_label.clone(),
                date_label: date_label.clone(),
                result,
            });
        }
    }
    outcomes
}

fn resolve_cell(
    snapshot: &TableSnapshot,
    row_label: &str,
    date_label: &str,
) -> Result<String, QueryError> {
    let col_index = resolve_column(&snapshot.headers, date_label)
        .ok_or_else(|| QueryError::ColumnNotFound(date_label.to_string()))?;
    let row = resolve_row(&snapshot.rows, row_label)
        .ok_or_else(|| QueryError::RowNotFound(row_label.to_string()))?;
    extract::extract(row, &snapshot.headers, col_index)
}
