//! Data-access layer for student records.
//! One entity, one table, one connection per operation.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{ConfigError, ConfigResult, DbConfig};
pub use db::{init_schema, open_connection, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::student::{Student, StudentId};
pub use repo::student_repo::{DaoError, DaoResult, SqliteStudentRepository, StudentRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
