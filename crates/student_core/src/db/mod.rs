//! SQLite connection bootstrap for the student store.
//!
//! # Responsibility
//! - Open one fresh connection per caller from `DbConfig`.
//! - Create the `students` table on request.
//!
//! # Invariants
//! - Connections are never cached or shared; the caller owns and drops them.
//! - Table bootstrap is idempotent and unversioned.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;

pub use open::open_connection;
pub use schema::{init_schema, STUDENTS_TABLE};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The store at `url` could not be reached or opened.
    Open {
        url: String,
        source: rusqlite::Error,
    },
    /// Prepare/bind/execute failure on an open connection.
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Underlying driver error regardless of the failing phase.
    pub fn sqlite_error(&self) -> &rusqlite::Error {
        match self {
            Self::Open { source, .. } => source,
            Self::Sqlite(err) => err,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { url, source } => write!(f, "failed to open database `{url}`: {source}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.sqlite_error())
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
