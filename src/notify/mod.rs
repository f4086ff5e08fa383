// src/notify/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::warn;

const BROADCAST_URL: &str = "https://api.line.me/v2/bot/message/broadcast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct BroadcastBody<'a> {
    messages: Vec<TextMessage<'a>>,
}

#[derive(Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Send `message` through the LINE Messaging API broadcast endpoint.
///
/// An empty token means delivery is not configured; that is logged and
/// treated as success so a missing secret never fails a run.
pub async fn line_broadcast(client: &Client, token: &str, message: &str) -> Result<()> {
    if token.is_empty() {
        warn!("LINE_CHANNEL_ACCESS_TOKEN is not set; skipping notification");
        return Ok(());
    }

    let body = BroadcastBody {
        messages: vec![TextMessage {
            kind: "text",
            text: message,
        }],
    };
    let resp = client
        .post(BROADCAST_URL)
        .bearer_auth(token)
        .json(&body)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .context("sending LINE broadcast")?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        anyhow::bail!("LINE broadcast failed: {status} {text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn broadcast_body_matches_messaging_api_shape() {
        let body = BroadcastBody {
            messages: vec![TextMessage {
                kind: "text",
                text: "空きあり",
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "messages": [{ "type": "text", "text": "空きあり" }] })
        );
    }
}
