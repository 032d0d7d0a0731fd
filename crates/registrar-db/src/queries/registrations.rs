//! Registration database queries.
//!
//! Inserts rely on the foreign keys declared in the schema: a registration
//! naming a missing course or student is rejected by SQLite with a
//! constraint violation and nothing is written.

use registrar_common::{CourseId, RegistrationId, Result, StudentId};
use rusqlite::Connection;

use crate::db_error;
use crate::models::Registration;

/// Insert a single registration.
///
/// # Returns
///
/// * `Ok(())` - The row was inserted
/// * `Err(Error::Constraint)` - Duplicate ID, or the course or student does not exist
/// * `Err(Error::Database)` - Any other database failure
pub fn insert_registration(conn: &Connection, registration: &Registration) -> Result<()> {
    conn.execute(
        "INSERT INTO Registration (RegistrationId, CourseId, StudentId) VALUES (?1, ?2, ?3)",
        rusqlite::params![
            registration.id.as_str(),
            registration.course_id.as_ref().map(CourseId::as_str),
            registration.student_id.as_ref().map(StudentId::as_str),
        ],
    )
    .map_err(db_error)?;
    Ok(())
}

/// Get a registration by ID.
pub fn get_registration(conn: &Connection, id: &RegistrationId) -> Result<Option<Registration>> {
    let result = conn.query_row(
        "SELECT * FROM Registration WHERE RegistrationId = ?1",
        [id.as_str()],
        Registration::from_row,
    );
    match result {
        Ok(r) => Ok(Some(r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(db_error(e)),
    }
}

/// List every registration in table-scan order.
pub fn list_registrations(conn: &Connection) -> Result<Vec<Registration>> {
    let mut stmt = conn
        .prepare("SELECT * FROM Registration")
        .map_err(db_error)?;
    let registrations = stmt
        .query_map([], Registration::from_row)
        .map_err(db_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_error)?;
    Ok(registrations)
}

/// Count all registrations.
pub fn count_registrations(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM Registration", [], |row| row.get(0))
        .map_err(db_error)
}

/// Registrations whose course or student does not exist.
///
/// A NULL reference is not dangling: SQLite only checks foreign keys on
/// non-NULL values.
///
/// Always empty while foreign keys are enforced; rows can only get here if
/// they were written by a connection that had enforcement switched off.
pub fn find_orphans(conn: &Connection) -> Result<Vec<Registration>> {
    let mut stmt = conn
        .prepare(
            "SELECT r.RegistrationId, r.CourseId, r.StudentId
             FROM Registration r
             LEFT JOIN Course c ON c.CourseId = r.CourseId
             LEFT JOIN Student s ON s.StudentId = r.StudentId
             WHERE (r.CourseId IS NOT NULL AND c.CourseId IS NULL)
                OR (r.StudentId IS NOT NULL AND s.StudentId IS NULL)
             ORDER BY r.rowid",
        )
        .map_err(db_error)?;
    let orphans = stmt
        .query_map([], Registration::from_row)
        .map_err(db_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_error)?;
    Ok(orphans)
}
