//! Student database queries.

use registrar_common::{Result, StudentId};
use rusqlite::Connection;

use crate::db_error;
use crate::models::Student;

/// Insert a single student.
///
/// # Returns
///
/// * `Ok(())` - The row was inserted
/// * `Err(Error::Constraint)` - A student with this ID already exists
/// * `Err(Error::Database)` - Any other database failure
pub fn insert_student(conn: &Connection, student: &Student) -> Result<()> {
    conn.execute(
        "INSERT INTO Student (StudentId, FirstName, LastName, Location)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            student.id.as_str(),
            student.first_name,
            student.last_name,
            student.location,
        ],
    )
    .map_err(db_error)?;
    Ok(())
}

/// Get a student by ID.
pub fn get_student(conn: &Connection, id: &StudentId) -> Result<Option<Student>> {
    let result = conn.query_row(
        "SELECT * FROM Student WHERE StudentId = ?1",
        [id.as_str()],
        Student::from_row,
    );
    match result {
        Ok(s) => Ok(Some(s)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(db_error(e)),
    }
}

/// List every student in table-scan order.
pub fn list_students(conn: &Connection) -> Result<Vec<Student>> {
    let mut stmt = conn.prepare("SELECT * FROM Student").map_err(db_error)?;
    let students = stmt
        .query_map([], Student::from_row)
        .map_err(db_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_error)?;
    Ok(students)
}

/// Count all students.
pub fn count_students(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM Student", [], |row| row.get(0))
        .map_err(db_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::open_in_memory;
    use crate::schema;

    fn setup() -> Connection {
        let conn = open_in_memory().unwrap();
        schema::reset(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_get_student() {
        let conn = setup();
        let student = Student::new("S1", "John", "Doe", "New York");
        insert_student(&conn, &student).unwrap();

        let found = get_student(&conn, &StudentId::from("S1")).unwrap();
        assert_eq!(found, Some(student));
    }

    #[test]
    fn test_get_student_not_found() {
        let conn = setup();
        let found = get_student(&conn, &StudentId::from("S99")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_duplicate_student_is_constraint_violation() {
        let conn = setup();
        insert_student(&conn, &Student::new("S1", "John", "Doe", "New York")).unwrap();

        let err = insert_student(&conn, &Student::new("S1", "Jane", "Smith", "Los Angeles"))
            .unwrap_err();
        assert!(err.is_constraint());

        let kept = get_student(&conn, &StudentId::from("S1")).unwrap().unwrap();
        assert_eq!(kept.first_name.as_deref(), Some("John"));
    }

    #[test]
    fn test_non_key_columns_nullable() {
        let conn = setup();
        conn.execute(
            "INSERT INTO Student (StudentId, FirstName, LastName) VALUES ('S1', 'John', 'Doe')",
            [],
        )
        .unwrap();

        let found = get_student(&conn, &StudentId::from("S1")).unwrap().unwrap();
        assert_eq!(found.last_name.as_deref(), Some("Doe"));
        assert_eq!(found.location, None);
    }

    #[test]
    fn test_list_students_in_insertion_order() {
        let conn = setup();
        insert_student(&conn, &Student::new("S2", "Jane", "Smith", "Los Angeles")).unwrap();
        insert_student(&conn, &Student::new("S1", "John", "Doe", "New York")).unwrap();

        let ids: Vec<String> = list_students(&conn)
            .unwrap()
            .into_iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(ids, vec!["S2", "S1"]);
        assert_eq!(count_students(&conn).unwrap(), 2);
    }

    #[test]
    fn test_list_students_without_table() {
        let conn = open_in_memory().unwrap();
        assert!(list_students(&conn).is_err());
    }
}
