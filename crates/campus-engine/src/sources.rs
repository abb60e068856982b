//! Where the four source files live and how each one is laid out.

use std::path::{Path, PathBuf};

use campus_config::CampusConfig;
use campus_core::RecordFormat;
use campus_core::enums::SourceKind;
use campus_reader::DelimitedReader;

use crate::EngineError;

/// Path and record layout of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub path: PathBuf,
    pub format: RecordFormat,
}

impl SourceSpec {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Open the file as `N`-field records, mapping reader errors onto `kind`.
    pub(crate) fn open<const N: usize>(
        &self,
        kind: SourceKind,
    ) -> Result<impl Iterator<Item = Result<[String; N], EngineError>>, EngineError> {
        let reader = DelimitedReader::<N>::open(&self.path, self.format)
            .map_err(|source| EngineError::from_reader(kind, source))?;
        Ok(reader.map(move |record| record.map_err(|source| EngineError::from_reader(kind, source))))
    }
}

/// The four source files of one university.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    pub students: SourceSpec,
    pub instructors: SourceSpec,
    pub grades: SourceSpec,
    pub majors: SourceSpec,
}

impl SourceSet {
    /// Resolve every source from the configuration.
    #[must_use]
    pub fn from_config(config: &CampusConfig) -> Self {
        let spec = |kind| SourceSpec::new(config.source_path(kind), config.source(kind).format());
        Self {
            students: spec(SourceKind::Students),
            instructors: spec(SourceKind::Instructors),
            grades: spec(SourceKind::Grades),
            majors: spec(SourceKind::Majors),
        }
    }

    /// Default file names under `dir`, all sharing one layout.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>, format: RecordFormat) -> Self {
        let dir = dir.as_ref();
        let spec = |kind: SourceKind| SourceSpec::new(dir.join(kind.default_file_name()), format);
        Self {
            students: spec(SourceKind::Students),
            instructors: spec(SourceKind::Instructors),
            grades: spec(SourceKind::Grades),
            majors: spec(SourceKind::Majors),
        }
    }

    /// Source of `kind`.
    #[must_use]
    pub const fn get(&self, kind: SourceKind) -> &SourceSpec {
        match kind {
            SourceKind::Students => &self.students,
            SourceKind::Instructors => &self.instructors,
            SourceKind::Grades => &self.grades,
            SourceKind::Majors => &self.majors,
        }
    }

    /// Mutable source of `kind`, for overriding one file's layout.
    pub fn get_mut(&mut self, kind: SourceKind) -> &mut SourceSpec {
        match kind {
            SourceKind::Students => &mut self.students,
            SourceKind::Instructors => &mut self.instructors,
            SourceKind::Grades => &mut self.grades,
            SourceKind::Majors => &mut self.majors,
        }
    }
}
