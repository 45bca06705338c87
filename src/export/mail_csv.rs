// src/export/mail_csv.rs

use crate::core::calculator::monthly::{get_days_in_month, get_monthly_records_of};
use crate::core::latest::get_latest_of;
use crate::errors::{AppError, AppResult};
use crate::models::record::{DailyLatestRecord, RecordsState, day_key};
use crate::utils::time::{format_clock, format_hhmm};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// One row per calendar day of the month, every field quoted, no header:
/// `"YYYY-MM-DD","start","stop","memo","break"`.
pub fn format_specified_month_records_as_csv_for_mail(
    month: NaiveDate,
    records: &RecordsState,
    default_break_time_length_min: Option<u32>,
) -> AppResult<String> {
    let monthly = get_monthly_records_of(month, records);

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for day in get_days_in_month(month) {
        let latest = get_latest_of(monthly.get(&day_key(day)), default_break_time_length_min);
        wtr.write_record(csv_row(day, &latest))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    Ok(text.trim_end_matches('\n').to_string())
}

fn csv_row(day: NaiveDate, latest: &DailyLatestRecord) -> [String; 5] {
    [
        day.format("%Y-%m-%d").to_string(),
        latest.start.as_ref().map(format_hhmm).unwrap_or_default(),
        latest.stop.as_ref().map(format_hhmm).unwrap_or_default(),
        single_line(&latest.memo),
        latest
            .break_time_length_min
            .map(|m| format_clock(i64::from(m)))
            .unwrap_or_default(),
    ]
}

/// Line breaks inside a memo would split its day over several CSV lines.
fn single_line(memo: &str) -> String {
    memo.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
