//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map insert/fetch/delete/update calls onto fixed parameterized statements
//!   against the `students` table.
//! - Translate row counts and result sets into booleans, records or errors.
//!
//! # Invariants
//! - A connection is opened per call and dropped before the call returns,
//!   on success and on every error path.
//! - `fetch_student` reports zero rows as `NotFound`; insert/delete/update
//!   report zero affected rows as `Ok(false)`.
//! - No retries, no transactions spanning calls, no in-memory state besides
//!   the immutable `DbConfig`.

use crate::config::DbConfig;
use crate::db::{open_connection, DbError};
use crate::model::student::{Student, StudentId};
use log::{error, info, warn};
use rusqlite::{params, Connection, Params};
use std::error::Error;
use std::fmt::{Display, Formatter};

const INSERT_SQL: &str =
    "INSERT INTO students (student_id, first_name, last_name) VALUES (?1, ?2, ?3);";
const FETCH_SQL: &str = "SELECT first_name, last_name FROM students WHERE student_id = ?1;";
const DELETE_SQL: &str = "DELETE FROM students WHERE student_id = ?1;";
const UPDATE_FIRST_NAME_SQL: &str = "UPDATE students SET first_name = ?1 WHERE student_id = ?2;";
const UPDATE_LAST_NAME_SQL: &str = "UPDATE students SET last_name = ?1 WHERE student_id = ?2;";

pub type DaoResult<T> = Result<T, DaoError>;

/// Error taxonomy for student data access.
#[derive(Debug)]
pub enum DaoError {
    /// Caller input was rejected before touching storage.
    InvalidInput(String),
    /// `fetch_student` matched no row.
    NotFound(StudentId),
    /// Connect/prepare/execute failure from the backing store.
    Storage(DbError),
}

impl Display for DaoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DaoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidInput(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for DaoError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for DaoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Data-access contract for student records.
pub trait StudentRepository {
    /// Inserts `student`; `None` is rejected as invalid input.
    ///
    /// Returns `Ok(false)` when the statement affected no rows. A duplicate
    /// key surfaces as `DaoError::Storage`.
    fn insert_student(&self, student: Option<&Student>) -> DaoResult<bool>;

    /// Loads the record stored under `student_id`.
    fn fetch_student(&self, student_id: StudentId) -> DaoResult<Student>;

    /// Deletes the row for `student_id`; `Ok(false)` when nothing matched.
    fn delete_student(&self, student_id: StudentId) -> DaoResult<bool>;

    /// Overwrites `first_name`; `Ok(false)` when nothing matched.
    fn update_student_first_name(
        &self,
        student_id: StudentId,
        first_name: &str,
    ) -> DaoResult<bool>;

    /// Overwrites `last_name`; `Ok(false)` when nothing matched.
    fn update_student_last_name(&self, student_id: StudentId, last_name: &str) -> DaoResult<bool>;
}

/// SQLite-backed student repository.
///
/// Holds only connection settings; safe to share behind `&` across threads.
#[derive(Debug, Clone)]
pub struct SqliteStudentRepository {
    config: DbConfig,
}

impl SqliteStudentRepository {
    pub fn new(config: DbConfig) -> Self {
        info!(
            "event=repo_init module=repo status=ok url={} user={}",
            config.url, config.username
        );
        Self { config }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    fn connect(&self, event: &str, student_id: StudentId) -> DaoResult<Connection> {
        open_connection(&self.config).map_err(|err| {
            error!("event={event} module=repo status=error student_id={student_id} error={err}");
            DaoError::from(err)
        })
    }

    /// Runs one mutating statement and returns the affected row count.
    fn execute<P: Params>(
        &self,
        event: &str,
        student_id: StudentId,
        sql: &str,
        params: P,
    ) -> DaoResult<usize> {
        let conn = self.connect(event, student_id)?;
        let result = conn.prepare(sql).and_then(|mut stmt| stmt.execute(params));
        drop(conn);

        result.map_err(|err| {
            error!("event={event} module=repo status=error student_id={student_id} error={err}");
            DaoError::from(err)
        })
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn insert_student(&self, student: Option<&Student>) -> DaoResult<bool> {
        let Some(student) = student else {
            error!("event=student_insert module=repo status=error error_code=invalid_input");
            return Err(DaoError::InvalidInput(
                "student record cannot be absent".to_string(),
            ));
        };

        let changed = self.execute(
            "student_insert",
            student.student_id,
            INSERT_SQL,
            params![
                student.student_id,
                student.first_name.as_str(),
                student.last_name.as_str(),
            ],
        )?;

        let student_id = student.student_id;
        if changed == 0 {
            info!("event=student_insert module=repo status=no_rows student_id={student_id}");
            return Ok(false);
        }
        info!("event=student_insert module=repo status=ok student_id={student_id} rows={changed}");
        Ok(true)
    }

    fn fetch_student(&self, student_id: StudentId) -> DaoResult<Student> {
        let conn = self.connect("student_fetch", student_id)?;
        let result = query_student(&conn, student_id);
        drop(conn);

        match result {
            Ok(Some(student)) => {
                info!("event=student_fetch module=repo status=ok student_id={student_id}");
                Ok(student)
            }
            Ok(None) => {
                warn!("event=student_fetch module=repo status=not_found student_id={student_id}");
                Err(DaoError::NotFound(student_id))
            }
            Err(err) => {
                error!(
                    "event=student_fetch module=repo status=error student_id={student_id} error={err}"
                );
                Err(err.into())
            }
        }
    }

    fn delete_student(&self, student_id: StudentId) -> DaoResult<bool> {
        let changed = self.execute("student_delete", student_id, DELETE_SQL, [student_id])?;
        Ok(report_mutation("student_delete", student_id, changed))
    }

    fn update_student_first_name(
        &self,
        student_id: StudentId,
        first_name: &str,
    ) -> DaoResult<bool> {
        let changed = self.execute(
            "student_update_first_name",
            student_id,
            UPDATE_FIRST_NAME_SQL,
            params![first_name, student_id],
        )?;
        Ok(report_mutation("student_update_first_name", student_id, changed))
    }

    fn update_student_last_name(&self, student_id: StudentId, last_name: &str) -> DaoResult<bool> {
        let changed = self.execute(
            "student_update_last_name",
            student_id,
            UPDATE_LAST_NAME_SQL,
            params![last_name, student_id],
        )?;
        Ok(report_mutation("student_update_last_name", student_id, changed))
    }
}

/// Delete/update outcome; zero rows means no row matched the key.
fn report_mutation(event: &str, student_id: StudentId, changed: usize) -> bool {
    if changed > 0 {
        info!("event={event} module=repo status=ok student_id={student_id} rows={changed}");
        true
    } else {
        warn!("event={event} module=repo status=not_found student_id={student_id}");
        false
    }
}

fn query_student(conn: &Connection, student_id: StudentId) -> rusqlite::Result<Option<Student>> {
    let mut stmt = conn.prepare(FETCH_SQL)?;
    let mut rows = stmt.query([student_id])?;
    match rows.next()? {
        Some(row) => Ok(Some(Student::new(
            student_id,
            row.get::<_, String>("first_name")?,
            row.get::<_, String>("last_name")?,
        ))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::{DaoError, SqliteStudentRepository, StudentRepository};
    use crate::config::DbConfig;
    use crate::db::DbError;

    fn unreachable_repo() -> SqliteStudentRepository {
        let dir = std::env::temp_dir().join(format!(
            "student-core-missing-{}/nested/students.db",
            std::process::id()
        ));
        let config = DbConfig::new(dir.to_string_lossy(), "user", "pass").unwrap();
        SqliteStudentRepository::new(config)
    }

    #[test]
    fn insert_none_is_invalid_input_without_storage_access() {
        let repo = unreachable_repo();
        let err = repo.insert_student(None).unwrap_err();
        assert!(matches!(err, DaoError::InvalidInput(_)));
    }

    #[test]
    fn unreachable_store_surfaces_open_fault() {
        let repo = unreachable_repo();
        let err = repo.delete_student(7).unwrap_err();
        assert!(matches!(err, DaoError::Storage(DbError::Open { .. })));

        let err = repo.fetch_student(7).unwrap_err();
        assert!(matches!(err, DaoError::Storage(DbError::Open { .. })));
    }

    #[test]
    fn not_found_display_names_the_id() {
        assert_eq!(DaoError::NotFound(42).to_string(), "student not found: 42");
    }
}
