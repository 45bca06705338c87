use crate::errors::{AppError, AppResult};
use crate::models::record::{DailyRecord, RecordsState};
use chrono::Local;
use rusqlite::{Connection, Row, params};
use serde::de::DeserializeOwned;

/// Raw column values of one `daily_records` row.
struct RecordRow {
    day_key: String,
    starts: String,
    stops: String,
    memos: String,
    break_time_lengths_min: Option<String>,
}

fn map_row(row: &Row) -> rusqlite::Result<RecordRow> {
    Ok(RecordRow {
        day_key: row.get("day_key")?,
        starts: row.get("starts")?,
        stops: row.get("stops")?,
        memos: row.get("memos")?,
        break_time_lengths_min: row.get("break_time_lengths_min")?,
    })
}

fn decode_list<T: DeserializeOwned>(day_key: &str, column: &str, raw: &str) -> AppResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::CorruptRecord(format!("{day_key}.{column}: {e}")))
}

impl RecordRow {
    fn into_record(self) -> AppResult<(String, DailyRecord)> {
        let key = self.day_key;
        let record = DailyRecord {
            starts: decode_list(&key, "starts", &self.starts)?,
            stops: decode_list(&key, "stops", &self.stops)?,
            memos: decode_list(&key, "memos", &self.memos)?,
            break_time_lengths_min: self
                .break_time_lengths_min
                .as_deref()
                .map(|raw| decode_list(&key, "break_time_lengths_min", raw))
                .transpose()?,
        };
        Ok((key, record))
    }
}

/// Load the complete records state.
pub fn load_records(conn: &Connection) -> AppResult<RecordsState> {
    let mut stmt = conn.prepare(
        "SELECT day_key, starts, stops, memos, break_time_lengths_min
         FROM daily_records
         ORDER BY day_key ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut state = RecordsState::new();
    for r in rows {
        let (key, record) = r?.into_record()?;
        state.insert(key, record);
    }
    Ok(state)
}

pub fn upsert_record(conn: &Connection, day_key: &str, record: &DailyRecord) -> AppResult<()> {
    let breaks = record
        .break_time_lengths_min
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        r#"
        INSERT INTO daily_records (day_key, starts, stops, memos, break_time_lengths_min, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT(day_key) DO UPDATE SET
            starts = excluded.starts,
            stops = excluded.stops,
            memos = excluded.memos,
            break_time_lengths_min = excluded.break_time_lengths_min,
            updated_at = excluded.updated_at
        "#,
        params![
            day_key,
            serde_json::to_string(&record.starts)?,
            serde_json::to_string(&record.stops)?,
            serde_json::to_string(&record.memos)?,
            breaks,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Persist every day whose record differs between `before` and `after`.
/// Returns the day-keys written. Days are never deleted.
pub fn save_changed(
    conn: &mut Connection,
    before: &RecordsState,
    after: &RecordsState,
) -> AppResult<Vec<String>> {
    let changed: Vec<(&String, &DailyRecord)> = after
        .iter()
        .filter(|(key, record)| before.get(*key) != Some(*record))
        .collect();

    if changed.is_empty() {
        return Ok(Vec::new());
    }

    let tx = conn.transaction()?;
    for (key, record) in &changed {
        upsert_record(&tx, key, record)?;
    }
    tx.commit()?;

    Ok(changed.into_iter().map(|(key, _)| key.clone()).collect())
}
