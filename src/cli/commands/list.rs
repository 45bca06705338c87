use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly::{
    MonthlySummary, get_days_in_month, get_monthly_records_of, summarize_month,
};
use crate::core::calculator::working_time::{WorkingTimeStats, calc_working_time_min};
use crate::core::latest::get_latest_of;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::record::{DailyLatestRecord, Timestamp, day_key};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, EMPTY_CLOCK, NO_RESULT, RESET};
use crate::utils::date::resolve_month;
use crate::utils::table::Table;
use crate::utils::time::{format_clock, format_duration, format_hhmm};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let month = resolve_month(month.as_deref())?;
        let default_break = cfg.settings.default_break_time_length_min;

        let pool = DbPool::new(cfg.database_path())?;
        let records = load_records(&pool.conn)?;
        let monthly = get_monthly_records_of(month, &records);

        header(month.format("%Y-%m"));

        let mut table = Table::new(["Date", "Start", "Stop", "Break", "Worked", "Memo"]);
        for day in get_days_in_month(month) {
            let latest = get_latest_of(monthly.get(&day_key(day)), default_break);
            table.add_row(day_row(day, &latest));
        }
        print!("{}", table.render());

        print_summary(&summarize_month(month, &records, default_break));
    }
    Ok(())
}

fn day_row(day: NaiveDate, latest: &DailyLatestRecord) -> Vec<String> {
    let clock = |ts: Option<&Timestamp>| {
        ts.map(format_hhmm).unwrap_or_else(|| EMPTY_CLOCK.to_string())
    };

    let worked = match calc_working_time_min(latest) {
        Some(m) => format_duration(m),
        None => NO_RESULT.to_string(),
    };

    vec![
        day.format("%Y-%m-%d %a").to_string(),
        clock(latest.start.as_ref()),
        clock(latest.stop.as_ref()),
        latest
            .break_time_length_min
            .map(|m| format_clock(i64::from(m)))
            .unwrap_or_else(|| EMPTY_CLOCK.to_string()),
        worked,
        latest.memo.clone(),
    ]
}

fn print_summary(summary: &MonthlySummary) {
    let or_none = |s: &str| {
        if s.is_empty() {
            NO_RESULT.to_string()
        } else {
            s.to_string()
        }
    };

    let (total, median) = match summary.working_time {
        WorkingTimeStats::Computed {
            total_min,
            median_min,
        } => (format_duration(total_min), format_duration(median_min)),
        WorkingTimeStats::NoResult => (NO_RESULT.to_string(), NO_RESULT.to_string()),
    };

    println!();
    println!("{CYAN}Median start        :{RESET} {}", or_none(&summary.median_start));
    println!("{CYAN}Median stop         :{RESET} {}", or_none(&summary.median_stop));
    println!("{CYAN}Total working time  :{RESET} {total}");
    println!("{CYAN}Median working time :{RESET} {median}");
}
