//! Report row types produced by the reporting layer.
//!
//! These structs define the shape of the three summary tables and of the
//! JSON emitted by `campus report` and `campus student`. Course lists are
//! always sorted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the student summary table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentSummary {
    pub cwid: String,
    pub name: String,
    pub major: String,
    pub completed_courses: Vec<String>,
    /// `None` when every required course is completed.
    pub remaining_required: Option<Vec<String>>,
    /// `None` when no elective remains.
    pub remaining_electives: Option<Vec<String>>,
}

/// One row of the instructor summary table: one course of one instructor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InstructorSummary {
    pub cwid: String,
    pub name: String,
    pub department: String,
    pub course: String,
    pub students: u32,
}

/// One row of the majors summary table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MajorSummary {
    pub major: String,
    pub required: Vec<String>,
    pub electives: Vec<String>,
}

/// The three summary tables of a university.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UniversityReport {
    pub students: Vec<StudentSummary>,
    pub instructors: Vec<InstructorSummary>,
    pub majors: Vec<MajorSummary>,
}

/// A completed course with the grade the student holds in it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseGrade {
    pub course: String,
    pub grade: String,
}

/// Response from `campus student <cwid>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentTranscript {
    pub cwid: String,
    pub name: String,
    pub major: String,
    pub grades: Vec<CourseGrade>,
}

/// Response from `campus persist`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersistResponse {
    pub path: String,
    pub students: u32,
    pub instructors: u32,
    pub majors: u32,
    pub grades: u32,
}
