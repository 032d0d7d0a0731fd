//! Course database queries.

use registrar_common::{CourseId, Result};
use rusqlite::Connection;

use crate::db_error;
use crate::models::Course;

/// Insert a single course.
pub fn insert_course(conn: &Connection, course: &Course) -> Result<()> {
    conn.execute(
        "INSERT INTO Course (CourseId, CourseName, CourseTitle) VALUES (?1, ?2, ?3)",
        rusqlite::params![course.id.as_str(), course.name, course.title],
    )
    .map_err(db_error)?;
    Ok(())
}

/// Get a course by ID.
pub fn get_course(conn: &Connection, id: &CourseId) -> Result<Option<Course>> {
    let result = conn.query_row(
        "SELECT * FROM Course WHERE CourseId = ?1",
        [id.as_str()],
        Course::from_row,
    );
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(db_error(e)),
    }
}

/// List every course in table-scan order.
pub fn list_courses(conn: &Connection) -> Result<Vec<Course>> {
    let mut stmt = conn.prepare("SELECT * FROM Course").map_err(db_error)?;
    let courses = stmt
        .query_map([], Course::from_row)
        .map_err(db_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_error)?;
    Ok(courses)
}

/// Count all courses.
pub fn count_courses(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM Course", [], |row| row.get(0))
        .map_err(db_error)
}
