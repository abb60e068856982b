//! Grade linking: the only step that touches two registries at once.
//!
//! For each grade record the student is credited with the course and grade,
//! and the instructor is credited with one more student in that course.

use campus_core::entities::{GradeRecord, Instructor, Student};
use campus_core::enums::SourceKind;

use crate::EngineError;
use crate::registry::Registry;
use crate::sources::SourceSpec;

/// Apply one grade record found at `line` of the grades file.
///
/// Both ids are resolved before anything is mutated, so a failing record
/// leaves both registries untouched.
///
/// # Errors
///
/// Returns [`EngineError::UnknownStudent`] or [`EngineError::UnknownInstructor`].
pub fn link_grade(
    students: &mut Registry<Student>,
    instructors: &mut Registry<Instructor>,
    record: &GradeRecord,
    line: usize,
) -> Result<(), EngineError> {
    let student = students
        .get_mut(&record.student_cwid)
        .ok_or_else(|| EngineError::UnknownStudent {
            cwid: record.student_cwid.clone(),
            line,
        })?;
    let instructor = instructors
        .get_mut(&record.instructor_cwid)
        .ok_or_else(|| EngineError::UnknownInstructor {
            cwid: record.instructor_cwid.clone(),
            line,
        })?;

    student.record_grade(&record.course, &record.grade);
    instructor.record_student(&record.course);
    Ok(())
}

/// Stream the grades file and link every record, stopping at the first error.
///
/// Returns the number of records applied.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnavailable`] or [`EngineError::InvalidFileData`]
/// for file problems, and the errors of [`link_grade`] for dangling ids.
pub fn link_grades(
    students: &mut Registry<Student>,
    instructors: &mut Registry<Instructor>,
    spec: &SourceSpec,
) -> Result<usize, EngineError> {
    let first_line = spec.format.first_record_line();
    let mut applied = 0;
    for (offset, record) in spec.open::<4>(SourceKind::Grades)?.enumerate() {
        let record = GradeRecord::from(record?);
        link_grade(students, instructors, &record, first_line + offset)?;
        applied += 1;
    }
    tracing::debug!(path = %spec.path.display(), records = applied, "linked grades");
    Ok(applied)
}
