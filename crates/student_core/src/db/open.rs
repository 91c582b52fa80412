//! Per-call connection acquisition.
//!
//! # Responsibility
//! - Open a connection to the configured store address.
//! - Emit `db_open` events with duration and status.
//!
//! # Invariants
//! - No pooling: each call yields an independent connection.
//! - Passwords are never logged.

use super::{DbError, DbResult};
use crate::config::DbConfig;
use log::{error, info};
use rusqlite::Connection;
use std::time::Instant;

/// Opens a fresh connection for `config.url`.
///
/// `url` may be a plain file path or a SQLite `file:` URI. SQLite has no
/// user authentication, so `username`/`password` are only carried for the
/// configuration contract; the username is logged for context.
///
/// # Errors
/// - Returns `DbError::Open` when the store cannot be opened.
pub fn open_connection(config: &DbConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start user={}", config.username);

    match Connection::open(&config.url) {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok user={} duration_ms={}",
                config.username,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(source) => {
            error!(
                "event=db_open module=db status=error url={} user={} duration_ms={} error_code=db_open_failed error={}",
                config.url,
                config.username,
                started_at.elapsed().as_millis(),
                source
            );
            Err(DbError::Open {
                url: config.url.clone(),
                source,
            })
        }
    }
}
