use crate::models::record::{DailyLatestRecord, Timestamp};
use crate::utils::time::{format_clock, minutes_of_day};

/// Outcome of aggregating working time over a set of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingTimeStats {
    /// Some day lacked a break length, no day qualified, or a day went
    /// negative: nothing trustworthy to show.
    NoResult,
    Computed { total_min: i64, median_min: i64 },
}

/// Worked minutes of a single day, or `None` unless start, stop and break
/// length are all known. A stop before the start yields a negative value.
pub fn calc_working_time_min(latest: &DailyLatestRecord) -> Option<i64> {
    let (start, stop, break_min) = (latest.start?, latest.stop?, latest.break_time_length_min?);
    Some((stop - start).num_minutes() - i64::from(break_min))
}

/// Median with the even case rounded down (floor of the two middle values'
/// average). `None` for an empty slice.
pub fn get_median_of(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]).div_euclid(2))
    } else {
        Some(sorted[mid])
    }
}

/// Median clock time (`HH:mm`) of the given instants; empty string when
/// there is nothing to compute.
pub fn get_median_time_of(times: &[Timestamp]) -> String {
    let minutes: Vec<i64> = times.iter().map(minutes_of_day).collect();
    get_median_of(&minutes).map(format_clock).unwrap_or_default()
}

/// Total and median working time over days that have both a start and a
/// stop.
pub fn calc_working_time_stats(days: &[DailyLatestRecord]) -> WorkingTimeStats {
    let mut worked = Vec::new();

    for day in days {
        let (Some(start), Some(stop)) = (&day.start, &day.stop) else {
            continue;
        };
        let Some(break_min) = day.break_time_length_min else {
            return WorkingTimeStats::NoResult;
        };
        let minutes = minutes_of_day(stop) - minutes_of_day(start) - i64::from(break_min);
        if minutes < 0 {
            return WorkingTimeStats::NoResult;
        }
        worked.push(minutes);
    }

    match get_median_of(&worked) {
        Some(median_min) => WorkingTimeStats::Computed {
            total_min: worked.iter().sum(),
            median_min,
        },
        None => WorkingTimeStats::NoResult,
    }
}
