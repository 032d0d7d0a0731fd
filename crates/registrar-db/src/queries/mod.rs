//! Database query modules, one per table:
//! - students: `Student` rows
//! - courses: `Course` rows
//! - registrations: `Registration` rows and referential checks

pub mod courses;
pub mod registrations;
pub mod students;

use registrar_common::Result;
use rusqlite::Connection;

use crate::models::TableCounts;

/// Count the rows of all three tables.
pub fn count_all(conn: &Connection) -> Result<TableCounts> {
    Ok(TableCounts {
        students: students::count_students(conn)?,
        courses: courses::count_courses(conn)?,
        registrations: registrations::count_registrations(conn)?,
    })
}
