//! Registrar-DB: schema, sample dataset, and query operations
//!
//! This crate provides database functionality for registrar using SQLite
//! through rusqlite. There is no pool: the seed-and-report routine works
//! against a single connection from start to finish.
//!
//! # Modules
//!
//! - `connection` - Opening and configuring the connection
//! - `schema` - Dropping and recreating the three tables
//! - `models` - Rust models matching database schema
//! - `queries` - Per-table insert, lookup, listing and count operations
//! - `seed` - The fixed sample dataset
//!
//! # Example
//!
//! ```
//! use registrar_db::{connection, schema, seed};
//! use registrar_db::queries::students;
//!
//! let conn = connection::open_in_memory().unwrap();
//! schema::reset(&conn).unwrap();
//! seed::insert_dataset(&conn, &seed::sample_dataset()).unwrap();
//!
//! assert_eq!(students::count_students(&conn).unwrap(), 10);
//! ```

pub mod connection;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;

use registrar_common::Error;

/// Convert a rusqlite error into the common error type.
///
/// SQLite reports primary-key and foreign-key failures with the
/// `ConstraintViolation` code; those become [`Error::Constraint`].
pub(crate) fn db_error(e: rusqlite::Error) -> Error {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::constraint(e.to_string())
        }
        _ => Error::database(e.to_string()),
    }
}
