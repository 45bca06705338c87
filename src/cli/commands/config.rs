use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reducer::SettingsAction;
use crate::core::settings::SettingsLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &mut Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        mail,
        slack_url,
        slack_context,
        lang,
        default_break,
        clear_default_break,
    } = cmd
    {
        let mut actions = Vec::new();
        if let Some(address) = mail {
            actions.push(SettingsAction::UpdateSendToMailAddress(address.clone()));
        }
        if let Some(url) = slack_url {
            actions.push(SettingsAction::UpdateSlackIncomingWebhookUrl(url.clone()));
        }
        if let Some(context) = slack_context {
            actions.push(SettingsAction::UpdateSlackContext(context.clone()));
        }
        if let Some(l) = lang {
            actions.push(SettingsAction::UpdateLang(*l));
        }
        if let Some(minutes) = default_break {
            actions.push(SettingsAction::UpdateDefaultBreakTimeLengthMin(*minutes));
        }
        if *clear_default_break {
            actions.push(SettingsAction::ClearDefaultBreakTimeLengthMin);
        }

        if !actions.is_empty() {
            let count = actions.len();
            if SettingsLogic::apply(cfg, config_path, actions)? {
                let pool = DbPool::new(cfg.database_path())?;
                ttlog_quiet(
                    &pool.conn,
                    "settings",
                    "",
                    &format!("{count} setting(s) changed"),
                );
                success(format!("Settings saved to {}", config_path.display()));
            } else {
                info("Settings already up to date.");
            }
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&*cfg)?);
        }

        if *edit_config {
            edit_file(config_path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.unwrap_or(&default_editor);

    match Command::new(editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor}'"));
            return Ok(());
        }
        _ if editor == default_editor => {
            return Err(AppError::Config(format!("editor '{editor}' failed")));
        }
        _ => warning(format!(
            "Editor '{editor}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited using fallback '{default_editor}'"
            ));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "fallback editor '{default_editor}' failed"
        ))),
    }
}
