use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::mail_csv::format_specified_month_records_as_csv_for_mail;
use crate::export::mailto::build_mailto_link;
use crate::ui::messages::{success, warning};
use crate::utils::date::resolve_month;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle `csv` (write the month's CSV) and `mail` (print a mailto: link).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let month_arg = match cmd {
        Commands::Csv { month, .. } | Commands::Mail { month } => month.as_deref(),
        _ => return Ok(()),
    };
    let month = resolve_month(month_arg)?;

    let pool = DbPool::new(cfg.database_path())?;
    let records = load_records(&pool.conn)?;
    let csv = format_specified_month_records_as_csv_for_mail(
        month,
        &records,
        cfg.settings.default_break_time_length_min,
    )?;

    match cmd {
        Commands::Csv {
            file: Some(file),
            force,
            ..
        } => {
            let path = expand_tilde(file);
            ensure_writable(&path, *force)?;
            fs::write(&path, format!("{csv}\n"))?;
            success(format!("CSV written to {}", path.display()));
        }
        Commands::Csv { file: None, .. } => println!("{csv}"),
        _ => {
            let address = &cfg.settings.send_to_mail_address;
            if address.is_empty() {
                warning("No mail address configured (worktime config --mail ADDRESS).");
            }
            println!("{}", build_mailto_link(address, month, &csv));
        }
    }
    Ok(())
}
