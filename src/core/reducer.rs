//! State transitions for records and settings.
//!
//! Reducers consume the previous snapshot and return the next one, so a
//! snapshot handed to a reducer can no longer be observed by anyone else.
//! Callers that need the previous state (e.g. to persist the difference)
//! clone it first.

use crate::models::record::{DailyRecord, RecordsState, TargetIndex, Timestamp, make_record_key};
use crate::models::settings::{Lang, SettingsState};
use std::collections::btree_map::Entry;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordsAction {
    /// Record `now` as the latest start of its day.
    Start { now: Timestamp },
    /// Record `now` as the latest stop of its day.
    Stop { now: Timestamp },
    /// Replace the latest memo of the day containing `now`.
    UpdateLatestMemo { now: Timestamp, memo: String },
    UpdateStartTime { time: Timestamp, target: TargetIndex },
    UpdateStopTime { time: Timestamp, target: TargetIndex },
    UpdateMemo {
        date: Timestamp,
        memo: String,
        target: TargetIndex,
    },
    UpdateBreakTimeLengthMin {
        date: Timestamp,
        break_time_length_min: u32,
        target: TargetIndex,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    UpdateSendToMailAddress(String),
    UpdateSlackIncomingWebhookUrl(String),
    UpdateSlackContext(String),
    UpdateLang(Lang),
    UpdateDefaultBreakTimeLengthMin(u32),
    ClearDefaultBreakTimeLengthMin,
}

/// Which history list of a [`DailyRecord`] an update touches.
enum FieldValue {
    Start(Timestamp),
    Stop(Timestamp),
    Memo(String),
    BreakTimeLengthMin(u32),
}

pub fn reduce_records(state: RecordsState, action: RecordsAction) -> RecordsState {
    match action {
        RecordsAction::Start { now } => {
            update_field(state, &now, FieldValue::Start(now), TargetIndex::Latest)
        }
        RecordsAction::Stop { now } => {
            update_field(state, &now, FieldValue::Stop(now), TargetIndex::Latest)
        }
        RecordsAction::UpdateLatestMemo { now, memo } => {
            update_field(state, &now, FieldValue::Memo(memo), TargetIndex::Latest)
        }
        RecordsAction::UpdateStartTime { time, target } => {
            update_field(state, &time, FieldValue::Start(time), target)
        }
        RecordsAction::UpdateStopTime { time, target } => {
            update_field(state, &time, FieldValue::Stop(time), target)
        }
        RecordsAction::UpdateMemo { date, memo, target } => {
            update_field(state, &date, FieldValue::Memo(memo), target)
        }
        RecordsAction::UpdateBreakTimeLengthMin {
            date,
            break_time_length_min,
            target,
        } => update_field(
            state,
            &date,
            FieldValue::BreakTimeLengthMin(break_time_length_min),
            target,
        ),
    }
}

pub fn reduce_settings(state: SettingsState, action: SettingsAction) -> SettingsState {
    match action {
        SettingsAction::UpdateSendToMailAddress(address) => SettingsState {
            send_to_mail_address: address,
            ..state
        },
        SettingsAction::UpdateSlackIncomingWebhookUrl(url) => {
            let mut slack = state.slack;
            slack.incoming_webhook_url = url;
            SettingsState { slack, ..state }
        }
        SettingsAction::UpdateSlackContext(context) => {
            let mut slack = state.slack;
            slack.context = context;
            SettingsState { slack, ..state }
        }
        SettingsAction::UpdateLang(lang) => SettingsState { lang, ..state },
        SettingsAction::UpdateDefaultBreakTimeLengthMin(minutes) => SettingsState {
            default_break_time_length_min: Some(minutes),
            ..state
        },
        SettingsAction::ClearDefaultBreakTimeLengthMin => SettingsState {
            default_break_time_length_min: None,
            ..state
        },
    }
}

fn update_field(
    mut state: RecordsState,
    date: &Timestamp,
    value: FieldValue,
    target: TargetIndex,
) -> RecordsState {
    let record = match state.entry(make_record_key(date)) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let mut record = DailyRecord::new();
            match value {
                FieldValue::Start(t) => record.starts.push(t),
                FieldValue::Stop(t) => record.stops.push(t),
                FieldValue::Memo(m) => record.memos.push(m),
                FieldValue::BreakTimeLengthMin(b) => record.break_time_lengths_min = Some(vec![b]),
            }
            entry.insert(record);
            return state;
        }
    };

    match value {
        FieldValue::Start(t) => update_or_append(&mut record.starts, t, target),
        FieldValue::Stop(t) => update_or_append(&mut record.stops, t, target),
        FieldValue::Memo(m) => update_or_append(&mut record.memos, m, target),
        FieldValue::BreakTimeLengthMin(b) => update_or_append(
            record.break_time_lengths_min.get_or_insert_with(Vec::new),
            b,
            target,
        ),
    }

    state
}

/// Overwrite the targeted entry when it differs, append when the target is
/// out of bounds. Equal values leave the list untouched.
fn update_or_append<T: PartialEq>(list: &mut Vec<T>, value: T, target: TargetIndex) {
    let idx = match target {
        TargetIndex::At(i) => Some(i),
        TargetIndex::Latest => list.len().checked_sub(1),
    };

    match idx.and_then(|i| list.get_mut(i)) {
        Some(current) if *current == value => {}
        Some(current) => *current = value,
        None => list.push(value),
    }
}
