// src/export/mailto.rs

use chrono::NaiveDate;

pub fn mail_subject(month: NaiveDate) -> String {
    format!("Working time {}", month.format("%Y-%m"))
}

/// `mailto:` link carrying the month's CSV as the message body.
pub fn build_mailto_link(address: &str, month: NaiveDate, csv: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(&mail_subject(month)),
        urlencoding::encode(csv)
    )
}
