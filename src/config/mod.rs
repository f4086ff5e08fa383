// src/config/mod.rs

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_PAGE_URL: &str = "https://reserve.fumotoppara.net/reserved/reserved-calendar-list";
const DEFAULT_DATE_LABEL: &str = "11/1";
const DEFAULT_ROWS: &str = "キャンプ宿泊,キャンプ日帰り";
const DEFAULT_SYMBOLS: &str = "〇,○,△";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub page_url: String,
    pub date_labels: Vec<String>,
    pub row_labels: Vec<String>,
    pub line_token: String,
    pub timeout: Duration,
    pub always_notify: bool,
    pub available_markers: HashSet<String>,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `TARGET_DATE_LABELS` (comma separated) wins over the single
    /// `TARGET_DATE_LABEL`. Everything has a default except a malformed
    /// `TIMEOUT_MS`, which is a hard error.
    pub fn from_env() -> Result<Self> {
        let date_labels = match env_trimmed("TARGET_DATE_LABELS") {
            Some(labels) => split_csv(&labels),
            None => vec![env_trimmed("TARGET_DATE_LABEL")
                .unwrap_or_else(|| DEFAULT_DATE_LABEL.to_string())],
        };
        let row_labels = split_csv(
            &env_trimmed("TARGET_ROWS").unwrap_or_else(|| DEFAULT_ROWS.to_string()),
        );
        let available_markers = split_csv(
            &env_trimmed("AVAILABLE_SYMBOLS").unwrap_or_else(|| DEFAULT_SYMBOLS.to_string()),
        )
        .into_iter()
        .collect();

        let timeout_ms = match env_trimmed("TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("parsing TIMEOUT_MS '{raw}'"))?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let page_url = env_trimmed("PAGE_URL").unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
        Url::parse(&page_url).with_context(|| format!("parsing PAGE_URL '{page_url}'"))?;

        Ok(Self {
            page_url,
            date_labels,
            row_labels,
            line_token: env_trimmed("LINE_CHANNEL_ACCESS_TOKEN").unwrap_or_default(),
            timeout: Duration::from_millis(timeout_ms),
            always_notify: env_trimmed("ALWAYS_NOTIFY")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            available_markers,
        })
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated value, trimming entries and dropping empties.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `1`, `true`, `yes` (any case) are truthy; everything else is not.
pub fn is_truthy(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
