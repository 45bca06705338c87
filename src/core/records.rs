use crate::config::Config;
use crate::core::latest::get_latest_of;
use crate::core::reducer::{RecordsAction, reduce_records};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records, save_changed};
use crate::errors::AppResult;
use crate::models::record::{DailyLatestRecord, Timestamp, day_key};
use crate::notify::{build_update_message, send_to_slack};
use crate::ui::messages::warning;
use crate::utils::time::format_hhmm;
use chrono::NaiveDate;
use tracing::info;

/// What an edit did to its day.
#[derive(Debug)]
pub struct EditOutcome {
    pub changed: bool,
    pub before: DailyLatestRecord,
    pub after: DailyLatestRecord,
}

/// High-level business logic for commands that edit one day.
pub struct RecordsLogic;

impl RecordsLogic {
    /// Run `actions` (all targeting `date`) through the reducer, persist the
    /// difference, audit it and, if configured, notify the webhook.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        operation: &str,
        date: NaiveDate,
        actions: Vec<RecordsAction>,
        notify: bool,
    ) -> AppResult<EditOutcome> {
        let default_break = cfg.settings.default_break_time_length_min;
        let key = day_key(date);

        let before_state = load_records(&pool.conn)?;
        let before = get_latest_of(before_state.get(&key), default_break);

        let after_state = actions
            .into_iter()
            .fold(before_state.clone(), reduce_records);
        let after = get_latest_of(after_state.get(&key), default_break);

        let written = save_changed(&mut pool.conn, &before_state, &after_state)?;
        for k in &written {
            ttlog_quiet(&pool.conn, operation, k, &describe(&after));
        }
        info!(operation, day = %key, written = written.len(), "records updated");

        if notify && !written.is_empty() {
            Self::notify(cfg, date, &before, &after);
        }

        Ok(EditOutcome {
            changed: !written.is_empty(),
            before,
            after,
        })
    }

    fn notify(cfg: &Config, date: NaiveDate, before: &DailyLatestRecord, after: &DailyLatestRecord) {
        let slack = &cfg.settings.slack;
        if slack.incoming_webhook_url.is_empty() {
            return;
        }

        let Some(text) = build_update_message(&slack.context, date, before, after) else {
            return;
        };

        let failure = send_to_slack(&slack.incoming_webhook_url, &text);
        if !failure.is_empty() {
            warning(format!("Notification not delivered: {failure}"));
        }
    }
}

fn describe(latest: &DailyLatestRecord) -> String {
    let clock = |ts: Option<&Timestamp>| ts.map(format_hhmm).unwrap_or_else(|| "--:--".into());
    let brk = latest
        .break_time_length_min
        .map(|m| format!("{m}m"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "start={} stop={} break={} memo={:?}",
        clock(latest.start.as_ref()),
        clock(latest.stop.as_ref()),
        brk,
        latest.memo
    )
}
