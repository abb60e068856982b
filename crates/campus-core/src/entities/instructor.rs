use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An instructor and the courses they have graded students in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Instructor {
    pub cwid: String,
    pub name: String,
    pub department: String,
    pub courses_taught: BTreeSet<String>,
    /// Course code -> number of grade records issued for that course.
    pub student_count: BTreeMap<String, u32>,
}

impl Instructor {
    #[must_use]
    pub fn new(
        cwid: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            cwid: cwid.into(),
            name: name.into(),
            department: department.into(),
            courses_taught: BTreeSet::new(),
            student_count: BTreeMap::new(),
        }
    }

    /// Count one more graded student in `course`.
    ///
    /// Every call counts, including a retake by the same student.
    pub fn record_student(&mut self, course: &str) {
        self.courses_taught.insert(course.to_string());
        *self.student_count.entry(course.to_string()).or_insert(0) += 1;
    }

    /// Students graded in `course`, zero when the course was never taught.
    #[must_use]
    pub fn students_in(&self, course: &str) -> u32 {
        self.student_count.get(course).copied().unwrap_or(0)
    }
}
