use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Instant of a start/stop edit, always interpreted in the local calendar.
pub type Timestamp = DateTime<Local>;

/// Canonical `YYYYMMDD` identity of a calendar day.
pub type DayKey = String;

/// Every edit ever made for one calendar day.
///
/// Each list is an independent edit history for its own field: the last
/// element is the effective value, earlier elements are superseded edits.
/// There is no positional link between `starts[i]` and `stops[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub starts: Vec<Timestamp>,
    pub stops: Vec<Timestamp>,
    pub memos: Vec<String>,
    /// Absent on records written before break lengths were tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_time_lengths_min: Option<Vec<u32>>,
}

impl DailyRecord {
    /// A record created by an edit: every history present and empty.
    ///
    /// `Default` leaves the break history absent instead, which is how
    /// records stored before break lengths were tracked deserialize.
    /// Both resolve to the settings default until a break is recorded.
    pub fn new() -> Self {
        Self {
            break_time_lengths_min: Some(Vec::new()),
            ..Self::default()
        }
    }
}

/// Day-key → record mapping; the whole persisted history.
pub type RecordsState = BTreeMap<DayKey, DailyRecord>;

/// Effective values of one day, derived on demand from a [`DailyRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyLatestRecord {
    pub start: Option<Timestamp>,
    pub stop: Option<Timestamp>,
    pub memo: String,
    pub break_time_length_min: Option<u32>,
}

/// Position inside a field's history that an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetIndex {
    /// Overwrite the last entry, or append when the history is empty.
    #[default]
    Latest,
    /// Overwrite the entry at this position, or append when out of bounds.
    At(usize),
}

impl From<Option<usize>> for TargetIndex {
    fn from(idx: Option<usize>) -> Self {
        match idx {
            Some(i) => TargetIndex::At(i),
            None => TargetIndex::Latest,
        }
    }
}

/// Format a timestamp as its day-key (`YYYYMMDD`, local calendar).
pub fn make_record_key(date: &Timestamp) -> DayKey {
    day_key(date.date_naive())
}

pub fn day_key(date: NaiveDate) -> DayKey {
    date.format("%Y%m%d").to_string()
}

/// Whether `key` is a canonical day-key: eight digits naming a real date.
pub fn is_day_key(key: &str) -> bool {
    key.len() == 8
        && key.bytes().all(|b| b.is_ascii_digit())
        && NaiveDate::parse_from_str(key, "%Y%m%d").is_ok()
}
