use crate::core::calculator::working_time::{
    WorkingTimeStats, calc_working_time_stats, get_median_time_of,
};
use crate::core::latest::get_latest_of;
use crate::models::record::{DailyLatestRecord, RecordsState};
use chrono::{Datelike, NaiveDate};

/// Figures shown under a month's listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// `HH:mm`, or empty when no day has a start.
    pub median_start: String,
    /// `HH:mm`, or empty when no day has a stop.
    pub median_stop: String,
    pub working_time: WorkingTimeStats,
}

/// `YYYYMM` prefix shared by every day-key of `month`.
pub fn month_key(month: NaiveDate) -> String {
    month.format("%Y%m").to_string()
}

/// Records whose day-key falls inside the month of `month`.
pub fn get_monthly_records_of(month: NaiveDate, state: &RecordsState) -> RecordsState {
    let prefix = month_key(month);
    state
        .iter()
        .filter(|(key, _)| key.get(..6) == Some(prefix.as_str()))
        .map(|(key, record)| (key.clone(), record.clone()))
        .collect()
}

/// Every calendar day of the month starting at `first_day_of_month`, ascending.
pub fn get_days_in_month(first_day_of_month: NaiveDate) -> Vec<NaiveDate> {
    let (year, month) = (first_day_of_month.year(), first_day_of_month.month());
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

pub fn summarize_month(
    month: NaiveDate,
    state: &RecordsState,
    default_break_time_length_min: Option<u32>,
) -> MonthlySummary {
    let latests: Vec<DailyLatestRecord> = get_monthly_records_of(month, state)
        .values()
        .map(|record| get_latest_of(Some(record), default_break_time_length_min))
        .collect();

    let starts: Vec<_> = latests.iter().filter_map(|l| l.start).collect();
    let stops: Vec<_> = latests.iter().filter_map(|l| l.stop).collect();

    MonthlySummary {
        median_start: get_median_time_of(&starts),
        median_stop: get_median_time_of(&stops),
        working_time: calc_working_time_stats(&latests),
    }
}
