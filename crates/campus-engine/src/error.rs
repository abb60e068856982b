//! Engine error types.
//!
//! Every variant is fatal for the run: the pipeline stops at the first one
//! and nothing applied before it is rolled back.

use campus_core::CoreError;
use campus_core::enums::SourceKind;
use campus_reader::ReaderError;
use thiserror::Error;

/// Errors raised while loading, linking, or reporting.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A source file could not be opened.
    #[error("cannot read the {kind} file")]
    SourceUnavailable {
        kind: SourceKind,
        #[source]
        source: ReaderError,
    },

    /// A source file has a malformed header or record.
    #[error("invalid data in the {kind} file")]
    InvalidFileData {
        kind: SourceKind,
        #[source]
        source: ReaderError,
    },

    /// A grade record names a student absent from the student registry.
    #[error("student with id {cwid} does not exist in the students file (grades line {line})")]
    UnknownStudent { cwid: String, line: usize },

    /// A grade record names an instructor absent from the instructor registry.
    #[error(
        "instructor with id {cwid} does not exist in the instructors file (grades line {line})"
    )]
    UnknownInstructor { cwid: String, line: usize },

    /// A student's major has no entry in the major registry.
    #[error(
        "{major} is not a valid major: fix the record of student {cwid} or add the major to the majors file"
    )]
    UnknownMajor { cwid: String, major: String },

    /// Cross-cutting core error (entity lookups).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Wrap a reader error at the orchestration boundary, naming the logical file.
    #[must_use]
    pub fn from_reader(kind: SourceKind, source: ReaderError) -> Self {
        if source.is_unavailable() {
            Self::SourceUnavailable { kind, source }
        } else {
            Self::InvalidFileData { kind, source }
        }
    }
}
