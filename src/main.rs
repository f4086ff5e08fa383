use anyhow::Result;
use campwatch::{
    config::Config,
    fetch, notify,
    query,
    report::{self, Report, ReportContext},
};
use reqwest::Client;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let config = Config::from_env()?;
    info!(
        url = %config.page_url,
        rows = config.row_labels.len(),
        dates = config.date_labels.len(),
        "watching calendar"
    );

    // ─── 3) acquire a table snapshot ─────────────────────────────────
    let client = Client::new();
    let snapshot = fetch::fetch_snapshot(&client, &config.page_url, config.timeout).await?;

    // ─── 4) resolve every (row, date) pair ───────────────────────────
    let outcomes = query::run(&snapshot, &config.row_labels, &config.date_labels);
    info!(queries = outcomes.len(), "batch resolved");

    // ─── 5) render + deliver the report ──────────────────────────────
    let ctx = ReportContext {
        date_labels: &config.date_labels,
        markers: &config.available_markers,
        page_url: &config.page_url,
    };
    match report::render(&outcomes, &ctx) {
        Report::Vacancy(message) => {
            println!("{message}");
            if let Err(err) = notify::line_broadcast(&client, &config.line_token, &message).await {
                error!(%err, "notification delivery failed");
            }
        }
        Report::NoVacancy { summary, notice } => {
            println!("{summary}");
            if config.always_notify {
                if let Err(err) =
                    notify::line_broadcast(&client, &config.line_token, &notice).await
                {
                    error!(%err, "notification delivery failed");
                }
            }
        }
    }

    info!("done");
    Ok(())
}
