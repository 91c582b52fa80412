//! `students` table bootstrap.

use super::DbResult;
use log::info;
use rusqlite::Connection;

/// Backing table name.
pub const STUDENTS_TABLE: &str = "students";

const STUDENTS_DDL: &str = include_str!("students.sql");

/// Creates the `students` table when it does not exist yet.
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(STUDENTS_DDL)?;
    info!("event=schema_init module=db status=ok table={STUDENTS_TABLE}");
    Ok(())
}
