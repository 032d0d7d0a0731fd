//! Database connection management.
//!
//! A connection is opened once per run and dropped when the caller is done
//! with it; dropping a `rusqlite::Connection` finalizes its statements and
//! closes the handle.

use std::fmt;
use std::path::{Path, PathBuf};

use registrar_common::Result;
use rusqlite::Connection;

use crate::db_error;

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    /// A database file on disk, created if it does not exist.
    File(PathBuf),
    /// A private in-memory database that disappears with its connection.
    Memory,
}

impl fmt::Display for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

/// Open a connection to the given target.
pub fn open(target: &DbTarget) -> Result<Connection> {
    match target {
        DbTarget::File(path) => open_file(path),
        DbTarget::Memory => open_in_memory(),
    }
}

/// Open a database file, creating it if necessary.
///
/// Fails if the parent directory does not exist or the file is not a
/// SQLite database.
pub fn open_file(path: &Path) -> Result<Connection> {
    tracing::debug!("Opening database at {}", path.display());
    let conn = Connection::open(path).map_err(db_error)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database.
pub fn open_in_memory() -> Result<Connection> {
    tracing::debug!("Opening in-memory database");
    let conn = Connection::open_in_memory().map_err(db_error)?;
    configure(&conn)?;
    Ok(conn)
}

/// Per-connection settings.
///
/// SQLite leaves foreign keys off unless asked, and the registration table
/// depends on them. Reading `sqlite_master` forces the file header to be
/// checked, so a file that is not a database is rejected at open time.
fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(db_error)?;
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(db_error)?;
    Ok(())
}
