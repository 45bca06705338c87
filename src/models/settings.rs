use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ja,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackSettings {
    #[serde(default)]
    pub incoming_webhook_url: String,
    /// Free text prepended to every notification (e.g. a channel mention).
    #[serde(default)]
    pub context: String,
}

/// User preferences that travel with exported state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    #[serde(default)]
    pub send_to_mail_address: String,
    #[serde(default)]
    pub slack: SlackSettings,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_break_time_length_min: Option<u32>,
}
