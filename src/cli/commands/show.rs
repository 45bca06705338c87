use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::latest::get_latest_of;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::record::{Timestamp, day_key};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, EMPTY_CLOCK, GREY, RESET};
use crate::utils::date::{require_date, today};
use crate::utils::time::{format_clock, format_hhmm};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let day = match date {
            Some(d) => require_date(d)?,
            None => today(),
        };

        let pool = DbPool::new(cfg.database_path())?;
        let records = load_records(&pool.conn)?;
        let record = records.get(&day_key(day));
        let latest = get_latest_of(record, cfg.settings.default_break_time_length_min);

        header(day.format("%Y-%m-%d (%a)"));

        let clock = |ts: Option<&Timestamp>| {
            ts.map(format_hhmm).unwrap_or_else(|| EMPTY_CLOCK.to_string())
        };
        println!("{CYAN}Start:{RESET} {}", clock(latest.start.as_ref()));
        println!("{CYAN}Stop :{RESET} {}", clock(latest.stop.as_ref()));
        println!(
            "{CYAN}Break:{RESET} {}",
            latest
                .break_time_length_min
                .map(|m| format_clock(i64::from(m)))
                .unwrap_or_else(|| EMPTY_CLOCK.to_string())
        );
        println!("{CYAN}Memo :{RESET} {}", latest.memo);

        let Some(record) = record else {
            println!("\n{GREY}No edits recorded for this day.{RESET}");
            return Ok(());
        };

        println!("\nHistory:");
        let times = |list: &[Timestamp]| {
            list.iter().map(format_hhmm).collect::<Vec<_>>().join(" → ")
        };
        println!("  starts: {}", times(&record.starts));
        println!("  stops : {}", times(&record.stops));
        println!("  memos : {:?}", record.memos);
        match &record.break_time_lengths_min {
            Some(b) => println!("  breaks: {b:?}"),
            None => println!("  breaks: {GREY}(none){RESET}"),
        }
    }
    Ok(())
}
