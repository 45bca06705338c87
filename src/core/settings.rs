use crate::config::Config;
use crate::core::reducer::{SettingsAction, reduce_settings};
use crate::errors::AppResult;
use std::path::Path;
use tracing::info;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Apply settings actions in order and save the configuration if
    /// anything changed. Returns whether the file was written.
    pub fn apply(cfg: &mut Config, config_path: &Path, actions: Vec<SettingsAction>) -> AppResult<bool> {
        let next = actions
            .into_iter()
            .fold(cfg.settings.clone(), reduce_settings);

        if next == cfg.settings {
            return Ok(false);
        }

        cfg.settings = next;
        cfg.save(config_path)?;
        info!(path = %config_path.display(), "settings saved");
        Ok(true)
    }
}
