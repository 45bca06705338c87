//! Incoming-webhook notifications.
//!
//! Sending is fire-and-forget: the outcome is a plain string, empty on
//! success and a human-readable reason otherwise. Nothing here can undo a
//! local edit.

use crate::models::record::{DailyLatestRecord, Timestamp};
use crate::utils::time::{format_clock, format_hhmm};
use chrono::NaiveDate;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct TextObject<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SectionBlock<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextObject<'a>,
}

#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    text: &'a str,
    blocks: [SectionBlock<'a>; 1],
}

impl<'a> WebhookPayload<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            blocks: [SectionBlock {
                kind: "section",
                text: TextObject {
                    kind: "mrkdwn",
                    text,
                },
            }],
        }
    }
}

/// Describe what changed between two views of the same day.
/// `None` when the latest values are identical.
pub fn build_update_message(
    context: &str,
    date: NaiveDate,
    before: &DailyLatestRecord,
    after: &DailyLatestRecord,
) -> Option<String> {
    let mut changes = Vec::new();

    if before.start != after.start {
        changes.push(format!("Start: {}", display_time(after.start.as_ref())));
    }
    if before.stop != after.stop {
        changes.push(format!("Stop: {}", display_time(after.stop.as_ref())));
    }
    if before.break_time_length_min != after.break_time_length_min {
        let shown = after
            .break_time_length_min
            .map(|m| format_clock(i64::from(m)))
            .unwrap_or_else(|| "-".to_string());
        changes.push(format!("Break: {shown}"));
    }
    if before.memo != after.memo {
        changes.push(format!("Memo: {}", after.memo));
    }

    if changes.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(changes.len() + 2);
    if !context.is_empty() {
        lines.push(context.to_string());
    }
    lines.push(format!("*{}*", date.format("%Y-%m-%d")));
    lines.extend(changes);
    Some(lines.join("\n"))
}

fn display_time(ts: Option<&Timestamp>) -> String {
    ts.map(format_hhmm).unwrap_or_else(|| "-".to_string())
}

/// Map the webhook's answer to the outcome string. Any 2xx status counts
/// as HTTP-ok; the body must still be exactly `ok`.
pub fn interpret_webhook_response(status: u16, body: &str) -> String {
    if !(200..300).contains(&status) {
        return format!("Webhook responded with HTTP {status}: {}", body.trim());
    }
    if body != "ok" {
        return format!("Webhook responded with an unexpected body: {}", body.trim());
    }
    String::new()
}

/// Post `text` to the incoming webhook at `url`.
pub fn send_to_slack(url: &str, text: &str) -> String {
    let client = match reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(c) => c,
        Err(e) => return format!("Cannot create HTTP client: {e}"),
    };

    debug!(url, "posting webhook notification");
    let outcome = match client.post(url).json(&WebhookPayload::new(text)).send() {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.text() {
                Ok(body) => interpret_webhook_response(status, &body),
                Err(e) => format!("Cannot read webhook response: {e}"),
            }
        }
        Err(e) => format!("Cannot reach webhook: {e}"),
    };

    if !outcome.is_empty() {
        warn!(reason = %outcome, "webhook notification failed");
    }
    outcome
}
