use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::core::reducer::RecordsAction;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record::TargetIndex;
use crate::ui::messages::{info, success};
use crate::utils::date::require_date;
use crate::utils::time::{local_timestamp, start_of_day};

/// Edit any field of a given day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date,
        start,
        stop,
        break_min,
        memo,
        index,
        no_notify,
    } = cmd
    {
        let day = require_date(date)?;
        let target = TargetIndex::from(*index);
        let mut actions = Vec::new();

        if let Some(s) = start {
            actions.push(RecordsAction::UpdateStartTime {
                time: local_timestamp(day, s)?,
                target,
            });
        }
        if let Some(s) = stop {
            actions.push(RecordsAction::UpdateStopTime {
                time: local_timestamp(day, s)?,
                target,
            });
        }
        if let Some(minutes) = break_min {
            actions.push(RecordsAction::UpdateBreakTimeLengthMin {
                date: start_of_day(day)?,
                break_time_length_min: *minutes,
                target,
            });
        }
        if let Some(text) = memo {
            actions.push(RecordsAction::UpdateMemo {
                date: start_of_day(day)?,
                memo: text.clone(),
                target,
            });
        }

        if actions.is_empty() {
            return Err(AppError::Usage(
                "Nothing to do: specify at least --start, --stop, --break or --memo.".into(),
            ));
        }

        let mut pool = DbPool::new(cfg.database_path())?;
        let outcome = RecordsLogic::apply(&mut pool, cfg, "edit", day, actions, !no_notify)?;

        if outcome.changed {
            success(format!("{day} updated."));
        } else {
            info(format!("{day}: nothing changed."));
        }
    }
    Ok(())
}
