//! The fixed sample dataset.
//!
//! Ten students, four courses and twelve registrations. Every registration
//! points at a course and student defined above it, and every student but
//! two has exactly one registration (S1 and S2 have two).

use registrar_common::Result;
use rusqlite::Connection;

use crate::models::{Course, Registration, Student, TableCounts};
use crate::queries::{courses, registrations, students};

const STUDENTS: &[(&str, &str, &str, &str)] = &[
    ("S1", "John", "Doe", "New York"),
    ("S2", "Jane", "Smith", "Los Angeles"),
    ("S3", "Robert", "Brown", "Chicago"),
    ("S4", "Linda", "Johnson", "Houston"),
    ("S5", "Michael", "Williams", "Phoenix"),
    ("S6", "Elizabeth", "Jones", "Philadelphia"),
    ("S7", "David", "Garcia", "San Antonio"),
    ("S8", "Sarah", "Martinez", "San Diego"),
    ("S9", "Daniel", "Rodriguez", "Dallas"),
    ("S10", "Emily", "Taylor", "San Jose"),
];

const COURSES: &[(&str, &str, &str)] = &[
    ("C1", "Math", "Algebra 101"),
    ("C2", "Science", "Biology 101"),
    ("C3", "English", "Literature 101"),
    ("C4", "History", "World History 101"),
];

const REGISTRATIONS: &[(&str, &str, &str)] = &[
    ("R1", "C1", "S1"),
    ("R2", "C2", "S2"),
    ("R3", "C3", "S3"),
    ("R4", "C4", "S4"),
    ("R5", "C1", "S5"),
    ("R6", "C2", "S6"),
    ("R7", "C3", "S7"),
    ("R8", "C4", "S8"),
    ("R9", "C1", "S9"),
    ("R10", "C2", "S10"),
    ("R11", "C3", "S1"),
    ("R12", "C4", "S2"),
];

/// Rows to load into the three tables, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub registrations: Vec<Registration>,
}

impl Dataset {
    /// Row counts the tables should have once this dataset is loaded into
    /// an empty schema.
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            students: self.students.len() as i64,
            courses: self.courses.len() as i64,
            registrations: self.registrations.len() as i64,
        }
    }
}

/// The built-in sample dataset.
pub fn sample_dataset() -> Dataset {
    Dataset {
        students: STUDENTS
            .iter()
            .map(|&(id, first, last, location)| Student::new(id, first, last, location))
            .collect(),
        courses: COURSES
            .iter()
            .map(|&(id, name, title)| Course::new(id, name, title))
            .collect(),
        registrations: REGISTRATIONS
            .iter()
            .map(|&(id, course, student)| Registration::new(id, course, student))
            .collect(),
    }
}

/// Insert a dataset one row per statement: students, then courses, then
/// registrations.
///
/// Each statement autocommits, so a failure part-way leaves the rows that
/// were already inserted in place.
pub fn insert_dataset(conn: &Connection, dataset: &Dataset) -> Result<TableCounts> {
    for student in &dataset.students {
        students::insert_student(conn, student)?;
    }
    tracing::info!("Inserted {} students", dataset.students.len());

    for course in &dataset.courses {
        courses::insert_course(conn, course)?;
    }
    tracing::info!("Inserted {} courses", dataset.courses.len());

    for registration in &dataset.registrations {
        registrations::insert_registration(conn, registration)?;
    }
    tracing::info!("Inserted {} registrations", dataset.registrations.len());

    Ok(dataset.counts())
}
