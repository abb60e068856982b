//! Summary tables derived from the linked registries.
//!
//! Rows follow registry order (sorted by key); course lists inside a row
//! are sorted. Remaining-course lists use `None` as the "none remaining"
//! marker instead of an empty list.

use std::collections::BTreeSet;

use campus_core::entities::{Instructor, Major, Student};
use campus_core::report::{
    CourseGrade, InstructorSummary, MajorSummary, StudentSummary, StudentTranscript,
    UniversityReport,
};

use crate::EngineError;
use crate::registry::Registry;

/// One row per student, with the remaining requirements of their major.
///
/// # Errors
///
/// Returns [`EngineError::UnknownMajor`] for the first student whose major
/// is not in `majors`.
pub fn student_table(
    students: &Registry<Student>,
    majors: &Registry<Major>,
) -> Result<Vec<StudentSummary>, EngineError> {
    students
        .values()
        .map(|student| {
            let major = majors
                .get(&student.major)
                .ok_or_else(|| EngineError::UnknownMajor {
                    cwid: student.cwid.clone(),
                    major: student.major.clone(),
                })?;
            Ok(student_summary(student, major))
        })
        .collect()
}

fn student_summary(student: &Student, major: &Major) -> StudentSummary {
    let completed = &student.courses_completed;
    StudentSummary {
        cwid: student.cwid.clone(),
        name: student.name.clone(),
        major: student.major.clone(),
        completed_courses: completed.iter().cloned().collect(),
        remaining_required: none_if_empty(major.remaining_required(completed)),
        remaining_electives: none_if_empty(major.remaining_electives(completed)),
    }
}

fn none_if_empty(courses: BTreeSet<String>) -> Option<Vec<String>> {
    if courses.is_empty() {
        None
    } else {
        Some(courses.into_iter().collect())
    }
}

/// One row per (instructor, course taught).
#[must_use]
pub fn instructor_table(instructors: &Registry<Instructor>) -> Vec<InstructorSummary> {
    instructors
        .values()
        .flat_map(|instructor| {
            instructor
                .courses_taught
                .iter()
                .map(move |course| InstructorSummary {
                    cwid: instructor.cwid.clone(),
                    name: instructor.name.clone(),
                    department: instructor.department.clone(),
                    course: course.clone(),
                    students: instructor.students_in(course),
                })
        })
        .collect()
}

/// One row per major with its sorted required and elective courses.
#[must_use]
pub fn major_table(majors: &Registry<Major>) -> Vec<MajorSummary> {
    majors
        .values()
        .map(|major| MajorSummary {
            major: major.name.clone(),
            required: major.required_courses.iter().cloned().collect(),
            electives: major.elective_courses.iter().cloned().collect(),
        })
        .collect()
}

/// Build all three tables.
///
/// # Errors
///
/// See [`student_table`].
pub fn build_report(
    students: &Registry<Student>,
    instructors: &Registry<Instructor>,
    majors: &Registry<Major>,
) -> Result<UniversityReport, EngineError> {
    Ok(UniversityReport {
        students: student_table(students, majors)?,
        instructors: instructor_table(instructors),
        majors: major_table(majors),
    })
}

/// Completed courses of one student with the grade held in each.
#[must_use]
pub fn transcript(student: &Student) -> StudentTranscript {
    StudentTranscript {
        cwid: student.cwid.clone(),
        name: student.name.clone(),
        major: student.major.clone(),
        grades: student
            .grades
            .iter()
            .map(|(course, grade)| CourseGrade {
                course: course.clone(),
                grade: grade.clone(),
            })
            .collect(),
    }
}
