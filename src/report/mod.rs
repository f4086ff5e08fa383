// src/report/mod.rs

use crate::query::{CellResult, QueryOutcome};
use std::collections::HashSet;

/// Title line of every rendered notification.
pub const REPORT_TITLE: &str = "ふもとっぱら空き検知(Messaging API版)";

/// Inputs the aggregator needs besides the outcomes themselves: the queried
/// date labels (echoed in the report), the availability-marker vocabulary
/// of the source table, and the page URL for the trailing reference line.
pub struct ReportContext<'a> {
    pub date_labels: &'a [String],
    pub markers: &'a HashSet<String>,
    pub page_url: &'a str,
}

/// Rendered outcome of one run. `Vacancy` carries the multi-section report
/// (sent whenever anything is available or errored). `NoVacancy` carries a
/// one-line summary for the log plus a short notice text; whether that
/// notice is actually delivered is the caller's notify-on-empty policy, not
/// the aggregator's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Vacancy(String),
    NoVacancy { summary: String, notice: String },
}

/// Partition outcomes into available / errored / unavailable against the
/// injected marker set and render the report text. Pure and deterministic:
/// outcomes are consumed in the order the orchestrator produced them.
pub fn render(outcomes: &[QueryOutcome], ctx: &ReportContext<'_>) -> Report {
    let mut alerts = Vec::new();
    let mut errors = Vec::new();
    for o in outcomes {
        match &o.result {
            CellResult::Symbol(text) if ctx.markers.contains(text.as_str()) => {
                alerts.push(format!("{} の {}: {}", o.date_label, o.row_label, text));
            }
            CellResult::Symbol(_) => {}
            CellResult::Failure(err) => {
                errors.push(format!("{} の {}: ERROR: {}", o.date_label, o.row_label, err));
            }
        }
    }

    let dates_line = format!("対象日: {}", ctx.date_labels.join(", "));

    if !alerts.is_empty() || !errors.is_empty() {
        let mut lines = vec![REPORT_TITLE.to_string(), dates_line];
        if !alerts.is_empty() {
            lines.push("【空きあり】".to_string());
            lines.extend(alerts.iter().map(|a| format!("・{a}")));
        }
        if !errors.is_empty() {
            lines.push("【取得エラー】(参考)".to_string());
            lines.extend(errors.iter().map(|e| format!("・{e}")));
        }
        lines.push(format!("確認: {}", ctx.page_url));
        return Report::Vacancy(lines.join("\n"));
    }

    // reaching here means every outcome was an unavailable Symbol
    let listing = outcomes
        .iter()
        .filter_map(|o| match &o.result {
            CellResult::Symbol(s) => {
                Some(format!("{} の {}: {}", o.date_label, o.row_label, s))
            }
            CellResult::Failure(_) => None,
        })
        .collect::<Vec<_>>()
        .join(", ");
    let notice = format!(
        "{REPORT_TITLE}\n{dates_line}\n【空き無し】\n確認: {}",
        ctx.page_url
    );
    Report::NoVacancy {
        summary: format!("空き無し: {listing}"),
        notice,
    }
}
