//! Table definitions and the drop-then-create reset.
//!
//! The schema is rebuilt from scratch on every run; there is no version
//! tracking. Only the primary keys and foreign keys constrain rows. Parents are created before children and dropped after them so
//! the foreign keys on `Registration` never point at a missing table.

use registrar_common::Result;
use rusqlite::Connection;

use crate::db_error;

const CREATE_STUDENT: &str = "CREATE TABLE Student (
    StudentId VARCHAR(10) PRIMARY KEY,
    FirstName VARCHAR(50),
    LastName  VARCHAR(50),
    Location  VARCHAR(100)
)";

const CREATE_COURSE: &str = "CREATE TABLE Course (
    CourseId    VARCHAR(10) PRIMARY KEY,
    CourseName  VARCHAR(50),
    CourseTitle VARCHAR(50)
)";

const CREATE_REGISTRATION: &str = "CREATE TABLE Registration (
    RegistrationId VARCHAR(10) PRIMARY KEY,
    CourseId       VARCHAR(10),
    StudentId      VARCHAR(10),
    FOREIGN KEY (CourseId) REFERENCES Course(CourseId),
    FOREIGN KEY (StudentId) REFERENCES Student(StudentId)
)";

/// Tables in creation order.
pub const TABLES: [&str; 3] = ["Student", "Course", "Registration"];

/// Drop all three tables, children first. Missing tables are skipped.
pub fn drop_tables(conn: &Connection) -> Result<()> {
    for table in TABLES.iter().rev() {
        tracing::debug!("Dropping table {}", table);
        conn.execute(&format!("DROP TABLE IF EXISTS {table}"), [])
            .map_err(db_error)?;
    }
    Ok(())
}

/// Create all three tables, parents first.
pub fn create_tables(conn: &Connection) -> Result<()> {
    for (table, ddl) in TABLES
        .iter()
        .zip([CREATE_STUDENT, CREATE_COURSE, CREATE_REGISTRATION])
    {
        tracing::debug!("Creating table {}", table);
        conn.execute(ddl, []).map_err(db_error)?;
    }
    Ok(())
}

/// Drop and recreate the schema, leaving three empty tables.
pub fn reset(conn: &Connection) -> Result<()> {
    drop_tables(conn)?;
    create_tables(conn)
}

/// Whether a table with this name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )
        .map_err(db_error)?;
    Ok(count > 0)
}
