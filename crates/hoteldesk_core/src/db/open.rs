//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and optional statement echo.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.
//! - Opening a missing database file creates it.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and applies all pending migrations.
///
/// # Side effects
/// - Creates the file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with_echo(path, false)
}

/// Like [`open_db`], optionally logging every executed SQL statement.
///
/// Echo is active before the schema bootstrap runs, so migration DDL is
/// echoed as well. Statements are logged at `info` under `event=sql_echo`.
pub fn open_db_with_echo(path: impl AsRef<Path>, echo: bool) -> DbResult<Connection> {
    open_with("file", echo, || Connection::open(path))
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_in_memory_with_echo(false)
}

/// In-memory variant of [`open_db_with_echo`].
pub fn open_db_in_memory_with_echo(echo: bool) -> DbResult<Connection> {
    open_with("memory", echo, Connection::open_in_memory)
}

fn echo_statement(sql: &str) {
    let sql = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    info!("event=sql_echo module=db sql={sql}");
    #[cfg(test)]
    tests::ECHOED.with(|echoed| echoed.borrow_mut().push(sql));
}

fn open_with(
    mode: &'static str,
    echo: bool,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let mut conn = match open() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    if echo {
        conn.trace(Some(echo_statement as fn(&str)));
    }

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
