use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// One row per day-key; every history list is a JSON array.
fn create_daily_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_records (
            day_key                 TEXT PRIMARY KEY CHECK(length(day_key) = 8),
            starts                  TEXT NOT NULL DEFAULT '[]',
            stops                   TEXT NOT NULL DEFAULT '[]',
            memos                   TEXT NOT NULL DEFAULT '[]',
            break_time_lengths_min  TEXT,
            updated_at              TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Databases created before break lengths were tracked lack the column;
/// their rows keep it NULL, i.e. "no break history".
fn migrate_add_break_column(conn: &Connection) -> Result<()> {
    if has_column(conn, "daily_records", "break_time_lengths_min")? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE daily_records ADD COLUMN break_time_lengths_min TEXT;")?;
    info!("added break_time_lengths_min column to daily_records");
    Ok(())
}

pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if table_exists(conn, "daily_records")? {
        migrate_add_break_column(conn)?;
    } else {
        create_daily_records_table(conn)?;
        info!("created daily_records table");
    }

    Ok(())
}
