use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// First day of the month written as `YYYY-MM`.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

/// `--month` value, defaulting to the current month.
pub fn resolve_month(month: Option<&str>) -> AppResult<NaiveDate> {
    match month {
        Some(m) => parse_month(m),
        None => {
            let t = today();
            parse_month(&t.format("%Y-%m").to_string())
        }
    }
}
