use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::exchange::ExchangeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &mut Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(cfg.database_path())?;
        let outcome =
            ExchangeLogic::import_from_file(&mut pool, cfg, config_path, &expand_tilde(file))?;

        success(format!(
            "Import completed: {} day(s) merged, settings {}.",
            outcome.days_written,
            if outcome.settings_changed {
                "updated"
            } else {
                "unchanged"
            }
        ));
    }
    Ok(())
}
