use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One line of the grades file: a student graded in a course by an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GradeRecord {
    pub student_cwid: String,
    pub course: String,
    pub grade: String,
    pub instructor_cwid: String,
}

impl From<[String; 4]> for GradeRecord {
    fn from([student_cwid, course, grade, instructor_cwid]: [String; 4]) -> Self {
        Self {
            student_cwid,
            course,
            grade,
            instructor_cwid,
        }
    }
}
