use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student and the courses they have been graded in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub cwid: String,
    pub name: String,
    /// Name of the declared major. Checked against the major registry only
    /// when reports are built.
    pub major: String,
    pub courses_completed: BTreeSet<String>,
    /// Course code -> latest grade.
    pub grades: BTreeMap<String, String>,
}

impl Student {
    #[must_use]
    pub fn new(cwid: impl Into<String>, name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            cwid: cwid.into(),
            name: name.into(),
            major: major.into(),
            courses_completed: BTreeSet::new(),
            grades: BTreeMap::new(),
        }
    }

    /// Mark `course` completed with `grade`, replacing any earlier grade.
    pub fn record_grade(&mut self, course: &str, grade: &str) {
        self.courses_completed.insert(course.to_string());
        self.grades.insert(course.to_string(), grade.to_string());
    }

    #[must_use]
    pub fn grade(&self, course: &str) -> Option<&str> {
        self.grades.get(course).map(String::as_str)
    }
}
