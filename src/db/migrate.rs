//! Versioned schema migrations. Each applied step is recorded in the `log`
//! table as `operation = 'migration_applied'`, `target = <version>`.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_CATALOG: &str = "20260301_0001_create_catalog";
const ADD_OPENING_HOURS: &str = "20260412_0002_add_opening_hours";

/// Ensure that the `log` table exists (migrations are recorded there).
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn locations_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('locations')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_catalog(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            building     TEXT NOT NULL DEFAULT '',
            block        TEXT NOT NULL DEFAULT '',
            road         TEXT NOT NULL DEFAULT '',
            address      TEXT NOT NULL DEFAULT '',
            postal_code  TEXT NOT NULL DEFAULT '',
            latitude     REAL NOT NULL,
            longitude    REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS facilities (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            location_id    INTEGER NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
            facility_type  TEXT NOT NULL,
            floor          TEXT,
            description    TEXT,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_facilities_location ON facilities(location_id);
        "#,
    )
}

fn add_opening_hours(conn: &Connection) -> Result<()> {
    // tolerate catalogs where the columns were added by hand
    if !locations_has_column(conn, "opens_at")? {
        conn.execute("ALTER TABLE locations ADD COLUMN opens_at TEXT", [])?;
    }
    if !locations_has_column(conn, "closes_at")? {
        conn.execute("ALTER TABLE locations ADD COLUMN closes_at TEXT", [])?;
    }
    Ok(())
}

fn apply(
    conn: &Connection,
    version: &str,
    message: &str,
    step: fn(&Connection) -> Result<()>,
) -> AppResult<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    step(conn).map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;
    mark_applied(conn, version, message)?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

/// Public entry point: run all pending migrations, in order.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    apply(
        conn,
        CREATE_CATALOG,
        "Created locations and facilities tables",
        create_catalog,
    )?;
    apply(
        conn,
        ADD_OPENING_HOURS,
        "Added opens_at/closes_at to locations",
        add_opening_hours,
    )?;

    Ok(())
}
