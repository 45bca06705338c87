// src/export/exchange.rs

use crate::errors::ExchangeError;
use crate::models::record::{RecordsState, Timestamp, is_day_key};
use crate::models::settings::SettingsState;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Only envelope version this build reads and writes.
pub const EXPORT_VERSION: u64 = 202003;

const REQUIRED_PROPERTIES: [&str; 4] = ["version", "createTime", "records", "settings"];

/// Versioned envelope used to move the whole state between installations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedState {
    pub version: u64,
    pub create_time: Timestamp,
    pub records: RecordsState,
    pub settings: SettingsState,
}

pub fn format_state_for_export(records: &RecordsState, settings: &SettingsState) -> ExportedState {
    ExportedState {
        version: EXPORT_VERSION,
        create_time: Local::now(),
        records: records.clone(),
        settings: settings.clone(),
    }
}

/// Validate and decode an exported state text.
///
/// Checks run in order: JSON syntax, presence of every top-level property,
/// version, then the shape of records and settings.
pub fn parse_exported_state(text: &str) -> Result<ExportedState, ExchangeError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ExchangeError::InvalidText)?;

    let Value::Object(map) = &value else {
        return Err(ExchangeError::NoRequiredProperty(REQUIRED_PROPERTIES[0]));
    };

    if let Some(missing) = REQUIRED_PROPERTIES
        .iter()
        .find(|prop| !map.contains_key(**prop))
    {
        return Err(ExchangeError::NoRequiredProperty(*missing));
    }

    if !map.get("version").is_some_and(is_export_version) {
        return Err(ExchangeError::InvalidVersion);
    }

    // normalise `202003.0` so it deserializes into the integer field
    let mut value = value;
    value["version"] = Value::from(EXPORT_VERSION);

    let state: ExportedState =
        serde_json::from_value(value).map_err(|e| ExchangeError::InvalidContent(e.to_string()))?;

    if let Some(key) = state.records.keys().find(|key| !is_day_key(key)) {
        return Err(ExchangeError::InvalidContent(format!(
            "record key {key:?} is not a YYYYMMDD day"
        )));
    }

    Ok(state)
}

/// `202003` and `202003.0` are the same JSON number.
fn is_export_version(version: &Value) -> bool {
    match version.as_u64() {
        Some(v) => v == EXPORT_VERSION,
        None => version.as_f64() == Some(EXPORT_VERSION as f64),
    }
}
