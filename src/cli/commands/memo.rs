use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::core::reducer::RecordsAction;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::TargetIndex;
use crate::ui::messages::{info, success};
use crate::utils::date::require_date;
use crate::utils::time::start_of_day;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Memo {
        text,
        date,
        index,
        no_notify,
    } = cmd
    {
        let (day, action) = match date {
            Some(d) => {
                let day = require_date(d)?;
                let action = RecordsAction::UpdateMemo {
                    date: start_of_day(day)?,
                    memo: text.clone(),
                    target: TargetIndex::from(*index),
                };
                (day, action)
            }
            None => {
                let now = Local::now();
                let action = RecordsAction::UpdateLatestMemo {
                    now,
                    memo: text.clone(),
                };
                (now.date_naive(), action)
            }
        };

        let mut pool = DbPool::new(cfg.database_path())?;
        let outcome = RecordsLogic::apply(&mut pool, cfg, "memo", day, vec![action], !no_notify)?;

        if outcome.changed {
            success(format!("Memo updated for {day}."));
        } else {
            info("Nothing changed.");
        }
    }
    Ok(())
}
