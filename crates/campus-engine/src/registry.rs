//! Entity registries built from the students, instructors, and majors files.
//!
//! Each loader streams its file through the reader and inserts one entity
//! per record. A later record with the same key replaces the earlier one.
//! On error the registry keeps whatever was inserted before the bad line.

use std::collections::BTreeMap;

use campus_core::entities::{Instructor, Major, Student};
use campus_core::enums::{CourseFlag, SourceKind};

use crate::EngineError;
use crate::sources::SourceSpec;

/// Entities keyed by CWID (students, instructors) or by name (majors).
///
/// Iteration is ordered by key, so report rows come out in the same order
/// on every run.
pub type Registry<T> = BTreeMap<String, T>;

/// Load the students file into `students`.
///
/// Returns the number of records read.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnavailable`] or [`EngineError::InvalidFileData`].
pub fn load_students(
    students: &mut Registry<Student>,
    spec: &SourceSpec,
) -> Result<usize, EngineError> {
    let mut count = 0;
    for record in spec.open::<3>(SourceKind::Students)? {
        let [cwid, name, major] = record?;
        if let Some(previous) = students.insert(cwid.clone(), Student::new(cwid, name, major)) {
            tracing::warn!(cwid = %previous.cwid, "duplicate student id, keeping the later record");
        }
        count += 1;
    }
    tracing::debug!(path = %spec.path.display(), records = count, unique = students.len(), "loaded students");
    Ok(count)
}

/// Load the instructors file into `instructors`.
///
/// Returns the number of records read.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnavailable`] or [`EngineError::InvalidFileData`].
pub fn load_instructors(
    instructors: &mut Registry<Instructor>,
    spec: &SourceSpec,
) -> Result<usize, EngineError> {
    let mut count = 0;
    for record in spec.open::<3>(SourceKind::Instructors)? {
        let [cwid, name, department] = record?;
        if let Some(previous) = instructors.insert(
            cwid.clone(),
            Instructor::new(cwid, name, department),
        ) {
            tracing::warn!(cwid = %previous.cwid, "duplicate instructor id, keeping the later record");
        }
        count += 1;
    }
    tracing::debug!(path = %spec.path.display(), records = count, unique = instructors.len(), "loaded instructors");
    Ok(count)
}

/// Load the majors file into `majors`.
///
/// Each record adds one course to a major, creating the major on first
/// sight. Returns the number of records read.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnavailable`] or [`EngineError::InvalidFileData`].
pub fn load_majors(majors: &mut Registry<Major>, spec: &SourceSpec) -> Result<usize, EngineError> {
    let mut count = 0;
    for record in spec.open::<3>(SourceKind::Majors)? {
        let [name, flag, course] = record?;
        majors
            .entry(name)
            .or_insert_with_key(|name| Major::new(name.clone()))
            .add(CourseFlag::from_raw(&flag), &course);
        count += 1;
    }
    tracing::debug!(path = %spec.path.display(), records = count, majors = majors.len(), "loaded majors");
    Ok(count)
}
