//! Rust models matching the database schema.
//!
//! Rows are read by column name, so the models do not depend on the column
//! order a `SELECT *` happens to return. Only primary keys are `NOT NULL` in
//! the schema; every other column maps to an `Option`.

use registrar_common::{CourseId, RegistrationId, StudentId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A row of the `Student` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
}

impl Student {
    pub fn new(id: &str, first_name: &str, last_name: &str, location: &str) -> Self {
        Self {
            id: StudentId::from(id),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            location: Some(location.to_string()),
        }
    }

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: StudentId::new(row.get::<_, String>("StudentId")?),
            first_name: row.get("FirstName")?,
            last_name: row.get("LastName")?,
            location: row.get("Location")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

/// A row of the `Course` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: Option<String>,
    pub title: Option<String>,
}

impl Course {
    pub fn new(id: &str, name: &str, title: &str) -> Self {
        Self {
            id: CourseId::from(id),
            name: Some(name.to_string()),
            title: Some(title.to_string()),
        }
    }

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: CourseId::new(row.get::<_, String>("CourseId")?),
            name: row.get("CourseName")?,
            title: row.get("CourseTitle")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// A row of the `Registration` table: one student enrolled in one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub course_id: Option<CourseId>,
    pub student_id: Option<StudentId>,
}

impl Registration {
    pub fn new(id: &str, course_id: &str, student_id: &str) -> Self {
        Self {
            id: RegistrationId::from(id),
            course_id: Some(CourseId::from(course_id)),
            student_id: Some(StudentId::from(student_id)),
        }
    }

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: RegistrationId::new(row.get::<_, String>("RegistrationId")?),
            course_id: row.get::<_, Option<String>>("CourseId")?.map(CourseId::new),
            student_id: row.get::<_, Option<String>>("StudentId")?.map(StudentId::new),
        })
    }
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

/// Row counts of the three tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub students: i64,
    pub courses: i64,
    pub registrations: i64,
}

impl std::fmt::Display for TableCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} students, {} courses, {} registrations",
            self.students, self.courses, self.registrations
        )
    }
}
