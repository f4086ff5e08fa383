// src/fetch/mod.rs

use crate::table::{Row, TableSnapshot};
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

const POLL_DELAY: Duration = Duration::from_secs(5);

/// Failure to obtain a snapshot at all. This is the one error that is fatal
/// to a run; everything downstream of a snapshot degrades per query pair.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no populated calendar table appeared within {0:?}")]
    TableNotReady(Duration),
}

/// Poll `url` until it serves a populated calendar table, or `budget` runs
/// out. Calendar pages render their table from script after load, so early
/// responses often carry an empty or absent table; each poll re-gets and
/// re-parses the page.
pub async fn fetch_snapshot(client: &Client, url: &str, budget: Duration) -> Result<TableSnapshot> {
    let attempts = (budget.as_millis() / POLL_DELAY.as_millis()).max(1) as usize;
    for attempt in 1..=attempts {
        match fetch_page(client, url).await {
            Ok(html) => {
                if let Some(snapshot) = parse_table(&html) {
                    debug!(
                        headers = snapshot.headers.len(),
                        rows = snapshot.rows.len(),
                        "table parsed"
                    );
                    return Ok(snapshot);
                }
                debug!(attempt, "page served but table not populated yet");
            }
            Err(err) if attempt < attempts => {
                warn!(attempt, %err, "page fetch failed; retrying");
            }
            Err(err) => return Err(err),
        }
        if attempt < attempts {
            sleep(POLL_DELAY).await;
        }
    }
    Err(FetchError::TableNotReady(budget).into())
}

async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let html = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("reading body from {url}"))?;
    Ok(html)
}

/// Parse the first calendar table out of a rendered page. Returns `None`
/// when no table element exists or the table carries no headers or rows,
/// which callers treat as "not rendered yet".
pub fn parse_table(html: &str) -> Option<TableSnapshot> {
    let table_sel = Selector::parse("table, div[role='table']").expect("table selector");
    let thead_th_sel = Selector::parse("thead th").expect("thead selector");
    let tr_sel = Selector::parse("tr").expect("tr selector");
    let tbody_tr_sel = Selector::parse("tbody tr").expect("tbody tr selector");
    let th_sel = Selector::parse("th").expect("th selector");
    let td_sel = Selector::parse("td").expect("td selector");
    let cell_sel = Selector::parse("th, td").expect("cell selector");

    let doc = Html::parse_document(html);
    let table = doc.select(&table_sel).next()?;

    // headers from thead, else the first row's th/td cells
    let mut headers: Vec<String> = table.select(&thead_th_sel).map(cell_text).collect();
    let mut header_row_id = None;
    if headers.is_empty() {
        let first_row = table.select(&tr_sel).next()?;
        headers = first_row.select(&cell_sel).map(cell_text).collect();
        header_row_id = Some(first_row.id());
    }

    // data rows from tbody, else every table row; the parser inserts an
    // implicit tbody around bare tr elements, so a header row borrowed from
    // the body must be excluded by identity
    let mut row_elems: Vec<ElementRef> = table.select(&tbody_tr_sel).collect();
    if row_elems.is_empty() {
        row_elems = table.select(&tr_sel).collect();
    }
    if let Some(id) = header_row_id {
        row_elems.retain(|tr| tr.id() != id);
    }

    let rows: Vec<Row> = row_elems
        .into_iter()
        .filter_map(|tr| {
            let label = tr
                .select(&th_sel)
                .next()
                .or_else(|| tr.select(&td_sel).next())
                .map(cell_text)?;
            let cells: Vec<String> = tr.select(&td_sel).map(cell_text).collect();
            let all_cells: Vec<String> = tr.select(&cell_sel).map(cell_text).collect();
            Some(Row {
                label,
                cells,
                all_cells,
            })
        })
        .collect();

    let snapshot = TableSnapshot { headers, rows };
    if snapshot.is_empty() {
        return None;
    }
    Some(snapshot)
}

fn cell_text(el: ElementRef) -> String {
    el.text().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thead_tbody_layout() {
        let html = r#"
            <table>
              <thead><tr><th>区分</th><th>11/1</th><th>11/2</th></tr></thead>
              <tbody>
                <tr><th>キャンプ宿泊</th><td>〇</td><td>×</td></tr>
                <tr><th>キャンプ日帰り</th><td>△</td><td>×</td></tr>
              </tbody>
            </table>"#;
        let snap = parse_table(html).unwrap();
        assert_eq!(snap.headers, vec!["区分", "11/1", "11/2"]);
        assert_eq!(snap.rows.len(), 2);
        assert_eq!(snap.rows[0].label, "キャンプ宿泊");
        assert_eq!(snap.rows[0].cells, vec!["〇", "×"]);
        assert_eq!(snap.rows[0].all_cells, vec!["キャンプ宿泊", "〇", "×"]);
    }

    #[test]
    fn falls_back_to_first_row_headers() {
        let html = r#"
            <table>
              <tr><td>区分</td><td>11/1</td></tr>
              <tr><td>キャンプ宿泊</td><td>〇</td></tr>
            </table>"#;
        let snap = parse_table(html).unwrap();
        assert_eq!(snap.headers, vec!["区分", "11/1"]);
        // the header row is not repeated as a data row
        assert_eq!(snap.rows.len(), 1);
        assert_eq!(snap.rows[0].label, "キャンプ宿泊");
        // all cells are td here, so the label doubles as cells[0]
        assert_eq!(snap.rows[0].cells, vec!["キャンプ宿泊", "〇"]);
    }

    #[test]
    fn th_only_row_has_empty_cells_but_full_all_cells() {
        let html = r#"
            <table>
              <thead><tr><th>11/1</th><th>11/2</th></tr></thead>
              <tbody>
                <tr><th>キャンプ日帰り</th><th>△</th><th>×</th></tr>
              </tbody>
            </table>"#;
        let snap = parse_table(html).unwrap();
        assert!(snap.rows[0].cells.is_empty());
        assert_eq!(snap.rows[0].all_cells, vec!["キャンプ日帰り", "△", "×"]);
    }

    #[test]
    fn page_without_table_is_none() {
        assert!(parse_table("<html><body><p>loading…</p></body></html>").is_none());
    }

    #[test]
    fn empty_table_is_none() {
        assert!(parse_table("<table></table>").is_none());
    }

    #[test]
    fn rows_without_any_cell_are_dropped() {
        let html = r#"
            <table>
              <thead><tr><th>11/1</th></tr></thead>
              <tbody><tr></tr><tr><td>〇</td></tr></tbody>
            </table>"#;
        let snap = parse_table(html).unwrap();
        assert_eq!(snap.rows.len(), 1);
    }
}
