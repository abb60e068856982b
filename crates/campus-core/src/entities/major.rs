use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CourseFlag;

/// Required and elective courses of one major.
///
/// A course sits in at most one of the two sets; the flag of the latest
/// [`Major::add`] call for that course wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Major {
    pub name: String,
    pub required_courses: BTreeSet<String>,
    pub elective_courses: BTreeSet<String>,
}

impl Major {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Classify `course` as required or elective.
    pub fn add(&mut self, flag: CourseFlag, course: &str) {
        match flag {
            CourseFlag::Required => {
                self.elective_courses.remove(course);
                self.required_courses.insert(course.to_string());
            }
            CourseFlag::Elective => {
                self.required_courses.remove(course);
                self.elective_courses.insert(course.to_string());
            }
        }
    }

    /// Required courses not yet in `completed`.
    #[must_use]
    pub fn remaining_required(&self, completed: &BTreeSet<String>) -> BTreeSet<String> {
        self.required_courses.difference(completed).cloned().collect()
    }

    /// Electives still open to a student.
    ///
    /// All-or-nothing: every elective while none is completed, nothing once
    /// any one of them is.
    #[must_use]
    pub fn remaining_electives(&self, completed: &BTreeSet<String>) -> BTreeSet<String> {
        if self.elective_courses.is_disjoint(completed) {
            self.elective_courses.clone()
        } else {
            BTreeSet::new()
        }
    }
}
