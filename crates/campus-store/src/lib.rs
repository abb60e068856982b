//! # campus-store
//!
//! `DuckDB` row store for the Campus registries.
//!
//! Persists a loaded [`University`] as five flat tables:
//! - `students`, `instructors`: one row per registry entry
//! - `student_grades`: latest grade per (student, course)
//! - `instructor_courses`: student count per (instructor, course)
//! - `major_courses`: required (`R`) and elective (`E`) courses per major
//!
//! Every [`CampusStore::replace_all`] overwrites the previous contents, so
//! the store always mirrors the last successful run.

pub mod error;
pub mod schema;

pub use error::StoreError;

use std::path::Path;

use campus_core::enums::CourseFlag;
use campus_core::report::{CourseGrade, InstructorSummary};
use campus_engine::University;
use duckdb::{Connection, params};

/// Embedded row store backed by a single `DuckDB` file.
pub struct CampusStore {
    conn: Connection,
}

impl CampusStore {
    /// Open or create a store file, creating tables that don't exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuckDb`] if the file cannot be opened or schema creation fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuckDb`] if schema creation fails.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Access the underlying `DuckDB` connection.
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(schema::CREATE_STUDENTS)?;
        self.conn.execute_batch(schema::CREATE_INSTRUCTORS)?;
        self.conn.execute_batch(schema::CREATE_STUDENT_GRADES)?;
        self.conn.execute_batch(schema::CREATE_INSTRUCTOR_COURSES)?;
        self.conn.execute_batch(schema::CREATE_MAJOR_COURSES)?;
        Ok(())
    }

    /// Replace every table with the registries of `university`.
    ///
    /// Runs in one transaction: on error the previous contents stay intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuckDb`] if clearing, appending, or committing fails.
    pub fn replace_all(&mut self, university: &University) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        for table in schema::TABLES {
            tx.execute_batch(&format!("DELETE FROM {table};"))?;
        }
        append_university(&tx, university)?;
        tx.commit()?;

        tracing::info!(
            students = university.students().len(),
            instructors = university.instructors().len(),
            majors = university.majors().len(),
            "store replaced"
        );
        Ok(())
    }

    /// Instructor summary rows read back from the store, ordered by
    /// instructor id then course.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuckDb`] if the query fails, or
    /// [`StoreError::CountOutOfRange`] for a corrupt count.
    pub fn instructor_summary(&self) -> Result<Vec<InstructorSummary>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT i.cwid, i.name, i.dept, c.course, c.students
             FROM instructors i
             JOIN instructor_courses c ON c.instructor_cwid = i.cwid
             ORDER BY i.cwid, c.course",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let students: i64 = row.get(4)?;
            out.push(InstructorSummary {
                cwid: row.get(0)?,
                name: row.get(1)?,
                department: row.get(2)?,
                course: row.get(3)?,
                students: u32::try_from(students).map_err(|_| StoreError::CountOutOfRange {
                    table: "instructor_courses",
                    value: students,
                })?,
            });
        }
        Ok(out)
    }

    /// Stored grades of one student, ordered by course. Empty for an
    /// unknown student.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuckDb`] if the query fails.
    pub fn student_grades(&self, cwid: &str) -> Result<Vec<CourseGrade>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT course, grade FROM student_grades
             WHERE student_cwid = ?
             ORDER BY course",
        )?;
        let grades = stmt
            .query_map(params![cwid], |row| {
                Ok(CourseGrade {
                    course: row.get(0)?,
                    grade: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(grades)
    }

    /// Number of rows in one of [`schema::TABLES`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuckDb`] if the table does not exist.
    pub fn row_count(&self, table: &str) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT count(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count.unsigned_abs())
    }
}

fn append_university(conn: &Connection, university: &University) -> Result<(), StoreError> {
    let mut students = conn.appender("students")?;
    let mut grades = conn.appender("student_grades")?;
    for student in university.students().values() {
        students.append_row(params![student.cwid, student.name, student.major])?;
        for (course, grade) in &student.grades {
            grades.append_row(params![student.cwid, course, grade])?;
        }
    }
    students.flush()?;
    grades.flush()?;

    let mut instructors = conn.appender("instructors")?;
    let mut courses = conn.appender("instructor_courses")?;
    for instructor in university.instructors().values() {
        instructors.append_row(params![
            instructor.cwid,
            instructor.name,
            instructor.department
        ])?;
        for course in &instructor.courses_taught {
            courses.append_row(params![
                instructor.cwid,
                course,
                i64::from(instructor.students_in(course))
            ])?;
        }
    }
    instructors.flush()?;
    courses.flush()?;

    let mut majors = conn.appender("major_courses")?;
    for major in university.majors().values() {
        let required = major.required_courses.iter().map(|c| (CourseFlag::Required, c));
        let electives = major.elective_courses.iter().map(|c| (CourseFlag::Elective, c));
        for (flag, course) in required.chain(electives) {
            majors.append_row(params![major.name, flag.code(), course])?;
        }
    }
    majors.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use campus_core::RecordFormat;
    use campus_engine::SourceSet;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn university(grades: &str) -> (TempDir, University) {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, body: &str| fs::write(dir.path().join(name), body).unwrap();
        write("students.txt", "1;Avin;CS\n2;Random;FE\n");
        write("instructors.txt", "100;Prof1;CS\n200;Prof2;FE\n");
        write("grades.txt", grades);
        write(
            "majors.txt",
            "CS;R;CS111\nCS;R;CS555\nCS;E;CS570\nFE;R;CS666\nFE;E;FE800\n",
        );
        let sources = SourceSet::in_dir(dir.path(), RecordFormat::new(';', false));
        let uni = University::load(&sources).unwrap();
        (dir, uni)
    }

    const GRADES: &str = "1;CS555;A;100\n1;CS111;C;100\n2;CS555;B;100\n2;CS666;A-;200\n";

    #[test]
    fn schema_creation() {
        let store = CampusStore::open_in_memory().expect("open in-memory store");

        let tables: Vec<String> = {
            let mut stmt = store
                .conn()
                .prepare(
                    "SELECT table_name FROM information_schema.tables
                     WHERE table_schema = 'main'
                     ORDER BY table_name",
                )
                .unwrap();
            stmt.query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        };

        for table in schema::TABLES {
            assert!(tables.contains(&table.to_string()), "missing {table}");
        }
    }

    #[test]
    fn replace_all_writes_every_registry() {
        let (_dir, uni) = university(GRADES);
        let mut store = CampusStore::open_in_memory().unwrap();
        store.replace_all(&uni).unwrap();

        assert_eq!(store.row_count("students").unwrap(), 2);
        assert_eq!(store.row_count("instructors").unwrap(), 2);
        assert_eq!(store.row_count("student_grades").unwrap(), 4);
        assert_eq!(store.row_count("instructor_courses").unwrap(), 3);
        assert_eq!(store.row_count("major_courses").unwrap(), 5);

        let flag: String = store
            .conn()
            .query_row(
                "SELECT flag FROM major_courses WHERE major = ? AND course = ?",
                params!["CS", "CS570"],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(flag, "E");
    }

    #[test]
    fn instructor_summary_matches_in_memory_table() {
        let (_dir, uni) = university(GRADES);
        let mut store = CampusStore::open_in_memory().unwrap();
        store.replace_all(&uni).unwrap();

        assert_eq!(store.instructor_summary().unwrap(), uni.instructor_table());
    }

    #[test]
    fn replace_all_overwrites_previous_run() {
        let (_dir, first) = university(GRADES);
        let (_dir2, second) = university("1;CS555;A;100\n");
        let mut store = CampusStore::open_in_memory().unwrap();
        store.replace_all(&first).unwrap();
        store.replace_all(&second).unwrap();

        assert_eq!(store.row_count("students").unwrap(), 2);
        assert_eq!(store.row_count("student_grades").unwrap(), 1);
        assert_eq!(store.instructor_summary().unwrap(), second.instructor_table());
    }

    #[test]
    fn student_grades_sorted_by_course() {
        let (_dir, uni) = university(GRADES);
        let mut store = CampusStore::open_in_memory().unwrap();
        store.replace_all(&uni).unwrap();

        let grades = store.student_grades("1").unwrap();
        let pairs: Vec<(&str, &str)> = grades
            .iter()
            .map(|g| (g.course.as_str(), g.grade.as_str()))
            .collect();
        assert_eq!(pairs, vec![("CS111", "C"), ("CS555", "A")]);
        assert!(store.student_grades("404").unwrap().is_empty());
    }

    #[test]
    fn unknown_table_is_an_error() {
        let store = CampusStore::open_in_memory().unwrap();
        assert!(matches!(
            store.row_count("nope"),
            Err(StoreError::DuckDb(_))
        ));
    }
}
