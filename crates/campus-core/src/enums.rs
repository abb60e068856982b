//! Source-file identities and course classification flags.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

/// The four logical input files of a university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Students,
    Instructors,
    Grades,
    Majors,
}

impl SourceKind {
    /// All source kinds, in pipeline load order.
    pub const ALL: [Self; 4] = [Self::Students, Self::Instructors, Self::Grades, Self::Majors];

    /// Return the string representation used in config sections and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Instructors => "instructors",
            Self::Grades => "grades",
            Self::Majors => "majors",
        }
    }

    /// Number of fields every record of this file must carry.
    ///
    /// ```text
    /// students     id | name | major
    /// instructors  id | name | department
    /// grades       student id | course | grade | instructor id
    /// majors       major | flag | course
    /// ```
    #[must_use]
    pub const fn field_count(self) -> usize {
        match self {
            Self::Students | Self::Instructors | Self::Majors => 3,
            Self::Grades => 4,
        }
    }

    /// File name looked up in the data directory when none is configured.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Students => "students.txt",
            Self::Instructors => "instructors.txt",
            Self::Grades => "grades.txt",
            Self::Majors => "majors.txt",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CourseFlag
// ---------------------------------------------------------------------------

/// Whether a course is required by a major or offered as an elective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CourseFlag {
    Required,
    Elective,
}

impl CourseFlag {
    /// Parse the raw flag column of a majors file.
    ///
    /// Only `"R"` marks a required course; every other value is an elective.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw == "R" {
            Self::Required
        } else {
            Self::Elective
        }
    }

    /// Single-letter code used in the majors file and the row store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "R",
            Self::Elective => "E",
        }
    }
}

impl fmt::Display for CourseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "required",
            Self::Elective => "elective",
        })
    }
}
