//! Reconciliation of an imported snapshot with the local state.
//!
//! Records merge append-only: when both sides carry a day and a field's
//! history differs, the local history comes first and the imported one is
//! appended after it. Nothing is ever removed or deduplicated, so
//! `merge(a, b)` and `merge(b, a)` differ whenever `a != b`.

use crate::models::record::{DailyRecord, RecordsState};
use crate::models::settings::{SettingsState, SlackSettings};

pub fn merge_records_state(current: &RecordsState, imported: &RecordsState) -> RecordsState {
    let mut merged = current.clone();

    for (key, theirs) in imported {
        let record = match current.get(key) {
            Some(ours) => merge_daily_record(ours, theirs),
            None => theirs.clone(),
        };
        merged.insert(key.clone(), record);
    }

    merged
}

pub fn merge_daily_record(current: &DailyRecord, imported: &DailyRecord) -> DailyRecord {
    DailyRecord {
        starts: merge_history(&current.starts, &imported.starts),
        stops: merge_history(&current.stops, &imported.stops),
        memos: merge_history(&current.memos, &imported.memos),
        break_time_lengths_min: match (
            &current.break_time_lengths_min,
            &imported.break_time_lengths_min,
        ) {
            (None, None) => None,
            (ours, theirs) => Some(merge_history(
                ours.as_deref().unwrap_or_default(),
                theirs.as_deref().unwrap_or_default(),
            )),
        },
    }
}

fn merge_history<T: Clone + PartialEq>(current: &[T], imported: &[T]) -> Vec<T> {
    if current == imported {
        return current.to_vec();
    }
    current.iter().chain(imported).cloned().collect()
}

/// Local values win unless they are empty and the import has something.
/// The language always follows the import.
pub fn merge_settings_state(current: &SettingsState, imported: &SettingsState) -> SettingsState {
    SettingsState {
        send_to_mail_address: prefer_non_empty(
            &current.send_to_mail_address,
            &imported.send_to_mail_address,
        ),
        slack: SlackSettings {
            incoming_webhook_url: prefer_non_empty(
                &current.slack.incoming_webhook_url,
                &imported.slack.incoming_webhook_url,
            ),
            context: prefer_non_empty(&current.slack.context, &imported.slack.context),
        },
        lang: imported.lang,
        default_break_time_length_min: current
            .default_break_time_length_min
            .or(imported.default_break_time_length_min),
    }
}

fn prefer_non_empty(current: &str, imported: &str) -> String {
    if current.is_empty() {
        imported.to_string()
    } else {
        current.to_string()
    }
}
