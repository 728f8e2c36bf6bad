//! Schema definition and verification for the `notes` table.
//!
//! # Responsibility
//! - Hold the canonical single-table schema.
//! - Verify that an opened database carries that schema.
//!
//! # Invariants
//! - `notes.id` uses AUTOINCREMENT so row ids are never reused after delete.
//! - Verification reads catalog data only; it never mutates the database.

use super::{DbError, DbResult};
use rusqlite::Connection;

/// Canonical schema. Provisioning is owned by the host (CLI `init`, tests);
/// the repository layer assumes it pre-exists.
pub const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL
);";

const NOTES_TABLE: &str = "notes";
const NOTES_COLUMNS: [&str; 3] = ["id", "title", "content"];

/// Creates the `notes` table when absent. Idempotent.
pub fn provision_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Fails with `DbError::MissingTable`/`MissingColumn` when the opened
/// database does not carry the expected shape.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    if !table_exists(conn, NOTES_TABLE)? {
        return Err(DbError::MissingTable(NOTES_TABLE));
    }

    for column in NOTES_COLUMNS {
        if !table_has_column(conn, NOTES_TABLE, column)? {
            return Err(DbError::MissingColumn {
                table: NOTES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
