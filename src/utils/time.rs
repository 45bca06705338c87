//! Time utilities: parsing HH:MM, minutes-of-day, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use crate::models::record::Timestamp;
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Combine a calendar date and an `HH:MM` time into a local timestamp.
pub fn local_timestamp(date: NaiveDate, time: &str) -> AppResult<Timestamp> {
    let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
    date.and_time(t)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{date} {time} does not exist locally")))
}

/// Local midnight of `date`, used when only the day of an edit matters.
pub fn start_of_day(date: NaiveDate) -> AppResult<Timestamp> {
    local_timestamp(date, "00:00")
}

pub fn minutes_of_day(ts: &Timestamp) -> i64 {
    i64::from(ts.hour()) * 60 + i64::from(ts.minute())
}

/// `HH:mm`, zero padded (clock times and break lengths).
pub fn format_clock(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// `H:MM` with unpadded hours (working-time totals and medians).
pub fn format_duration(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

pub fn format_hhmm(ts: &Timestamp) -> String {
    ts.format("%H:%M").to_string()
}
