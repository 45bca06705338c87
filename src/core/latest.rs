//! Latest-value resolution: the effective values of a day are the last
//! entries of each field's edit history.

use crate::models::record::{DailyLatestRecord, DailyRecord, Timestamp};

pub fn get_latest_start_time_of(record: &DailyRecord) -> Option<Timestamp> {
    record.starts.last().copied()
}

pub fn get_latest_stop_time_of(record: &DailyRecord) -> Option<Timestamp> {
    record.stops.last().copied()
}

pub fn get_latest_memo_of(record: &DailyRecord) -> String {
    record.memos.last().cloned().unwrap_or_default()
}

/// Break length resolution: last recorded entry, then the settings default,
/// then nothing.
pub fn get_latest_break_time_length_min_of(
    record: &DailyRecord,
    default_break_time_length_min: Option<u32>,
) -> Option<u32> {
    record
        .break_time_lengths_min
        .as_ref()
        .and_then(|lengths| lengths.last().copied())
        .or(default_break_time_length_min)
}

pub fn get_latest_of(
    record: Option<&DailyRecord>,
    default_break_time_length_min: Option<u32>,
) -> DailyLatestRecord {
    match record {
        Some(r) => DailyLatestRecord {
            start: get_latest_start_time_of(r),
            stop: get_latest_stop_time_of(r),
            memo: get_latest_memo_of(r),
            break_time_length_min: get_latest_break_time_length_min_of(
                r,
                default_break_time_length_min,
            ),
        },
        None => DailyLatestRecord {
            start: None,
            stop: None,
            memo: String::new(),
            break_time_length_min: default_break_time_length_min,
        },
    }
}
