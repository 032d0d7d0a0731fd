//! Rendering of the three table queries.
//!
//! Text output is one line per row, students first, then courses, then
//! registrations, each table in the order SQLite scans it. JSON output is a
//! single document holding the same three lists. A NULL column is written
//! as `NULL` in text and `null` in JSON.

use anyhow::Result;
use registrar_db::models::{Course, Registration, Student};
use registrar_db::queries::{courses, registrations, students};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// How query results are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Text form of a nullable column.
pub fn or_null<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NULL".to_string(),
    }
}

pub fn student_line(student: &Student) -> String {
    format!(
        "Student: {}, {} {}, {}",
        student.id,
        or_null(&student.first_name),
        or_null(&student.last_name),
        or_null(&student.location)
    )
}

pub fn course_line(course: &Course) -> String {
    format!(
        "Course: {}, {}, {}",
        course.id,
        or_null(&course.name),
        or_null(&course.title)
    )
}

pub fn registration_line(registration: &Registration) -> String {
    format!(
        "Registration: {}, Course: {}, Student: {}",
        registration.id,
        or_null(&registration.course_id),
        or_null(&registration.student_id)
    )
}

/// Contents of all three tables.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub registrations: Vec<Registration>,
}

impl Report {
    /// Run `SELECT * FROM` each table, students first.
    pub fn query(conn: &Connection) -> Result<Self> {
        Ok(Self {
            students: students::list_students(conn)?,
            courses: courses::list_courses(conn)?,
            registrations: registrations::list_registrations(conn)?,
        })
    }

    /// Every text line, in output order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.students
            .iter()
            .map(student_line)
            .chain(self.courses.iter().map(course_line))
            .chain(self.registrations.iter().map(registration_line))
    }

    pub fn row_count(&self) -> usize {
        self.students.len() + self.courses.len() + self.registrations.len()
    }

    pub fn write_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for line in self.lines() {
                    writeln!(out, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
