// src/resolve/row.rs

use crate::table::{normalize_text, Row};

/// Find the row a category label refers to: the first row whose normalized
/// leading label contains `row_label` as a substring. Rows without any
/// leading-label text never match and are skipped. Returns `None` when no
/// row matches.
pub fn resolve_row<'a>(rows: &'a [Row], row_label: &str) -> Option<&'a Row> {
    rows.iter().find(|r| {
        let label = normalize_text(&r.label);
        !label.is_empty() && label.contains(row_label)
    })
}
