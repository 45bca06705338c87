use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::exchange::ExchangeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let mut pool = DbPool::new(cfg.database_path())?;
        ExchangeLogic::export_to_file(&mut pool, cfg, &expand_tilde(file), *force)?;
    }
    Ok(())
}
