// src/export/mod.rs

pub mod exchange;
pub(crate) mod fs_utils;
pub mod mail_csv;
pub mod mailto;

pub use exchange::{EXPORT_VERSION, ExportedState, format_state_for_export, parse_exported_state};
pub use mail_csv::format_specified_month_records_as_csv_for_mail;
