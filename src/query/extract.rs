// src/query/extract.rs

use crate::query::QueryError;
use crate::table::{normalize_text, Row};

/// Pull the cell text at `col_index` out of a resolved row.
///
/// When the row's data cells are structurally separated from its label
/// (`cells` non-empty), the column index is shifted down by one iff the
/// header row carries one extra label-only entry the data cells do not
/// (`cells.len() + 1 == headers.len()`). An index that then falls outside
/// the data cells means the header/data count invariant did not hold for
/// this row, which is reported as `IndexMismatch` rather than silently
/// misaligning.
///
/// When `cells` is empty the row rendered label and data in one undivided
/// run; extraction falls back to the combined `all_cells` sequence. The
/// index is shifted up by one iff that sequence is one longer than the
/// headers (label occupies slot 0 but the headers carry no label column),
/// so the row's own label is never returned as a cell value.
pub fn extract(row: &Row, headers: &[String], col_index: usize) -> Result<String, QueryError> {
    if !row.cells.is_empty() {
        let j = if row.cells.len() + 1 == headers.len() {
            col_index as isize - 1
        } else {
            col_index as isize
        };
        if j >= 0 && (j as usize) < row.cells.len() {
            return Ok(normalize_text(&row.cells[j as usize]));
        }
        return Err(QueryError::IndexMismatch {
            index: j,
            cell_count: row.cells.len(),
        });
    }

    let j = if row.all_cells.len() == headers.len() + 1 {
        col_index + 1
    } else {
        col_index
    };
    if j < row.all_cells.len() {
        return Ok(normalize_text(&row.all_cells[j]));
    }
    Err(QueryError::CellNotFound)
}
