use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::core::reducer::RecordsAction;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::format_hhmm;
use chrono::Local;

/// Handle `start` and `stop`: stamp the current time on today's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let now = Local::now();

    let (operation, action, no_notify) = match cmd {
        Commands::Start { no_notify } => ("start", RecordsAction::Start { now }, *no_notify),
        Commands::Stop { no_notify } => ("stop", RecordsAction::Stop { now }, *no_notify),
        _ => return Ok(()),
    };

    let mut pool = DbPool::new(cfg.database_path())?;
    let outcome = RecordsLogic::apply(
        &mut pool,
        cfg,
        operation,
        now.date_naive(),
        vec![action],
        !no_notify,
    )?;

    if outcome.changed {
        success(format!(
            "{} recorded at {} on {}.",
            if operation == "start" { "Start" } else { "Stop" },
            format_hhmm(&now),
            now.format("%Y-%m-%d")
        ));
    } else {
        info("Nothing changed.");
    }
    Ok(())
}
