use crate::config::Config;
use crate::core::merge::{merge_records_state, merge_settings_state};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records, save_changed};
use crate::errors::AppResult;
use crate::export::exchange::{format_state_for_export, parse_exported_state};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Summary of an import, for the caller to report.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub days_written: usize,
    pub settings_changed: bool,
}

/// Whole-state export and import (restore) flows.
pub struct ExchangeLogic;

impl ExchangeLogic {
    pub fn export_to_file(pool: &mut DbPool, cfg: &Config, file: &Path, force: bool) -> AppResult<()> {
        ensure_writable(file, force)?;

        let records = load_records(&pool.conn)?;
        let envelope = format_state_for_export(&records, &cfg.settings);
        let text = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(file, text)?;

        ttlog_quiet(
            &pool.conn,
            "export",
            &file.display().to_string(),
            &format!("{} day(s) exported", records.len()),
        );
        success(format!(
            "Exported {} day(s) to {}",
            records.len(),
            file.display()
        ));
        Ok(())
    }

    /// Parse `file` and merge it into the local records and settings.
    /// Settings are written back to `config_path` only when they changed.
    pub fn import_from_file(
        pool: &mut DbPool,
        cfg: &mut Config,
        config_path: &Path,
        file: &Path,
    ) -> AppResult<ImportOutcome> {
        let text = fs::read_to_string(file)?;
        let imported = parse_exported_state(&text)?;
        info(format!(
            "Importing state created at {}",
            imported.create_time.format("%Y-%m-%d %H:%M")
        ));

        let current = load_records(&pool.conn)?;
        let merged = merge_records_state(&current, &imported.records);
        let written = save_changed(&mut pool.conn, &current, &merged)?;

        let settings = merge_settings_state(&cfg.settings, &imported.settings);
        let settings_changed = settings != cfg.settings;
        if settings_changed {
            cfg.settings = settings;
            cfg.save(config_path)?;
        }

        ttlog_quiet(
            &pool.conn,
            "import",
            &file.display().to_string(),
            &format!(
                "{} day(s) merged, settings {}",
                written.len(),
                if settings_changed { "updated" } else { "unchanged" }
            ),
        );

        Ok(ImportOutcome {
            days_written: written.len(),
            settings_changed,
        })
    }
}
