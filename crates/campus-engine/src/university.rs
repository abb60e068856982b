//! The university facade: registries, linking, and the derived tables.

use campus_config::CampusConfig;
use campus_core::CoreError;
use campus_core::entities::{Instructor, Major, Student};
use campus_core::report::{
    InstructorSummary, MajorSummary, StudentSummary, StudentTranscript, UniversityReport,
};

use crate::sources::{SourceSet, SourceSpec};
use crate::{EngineError, linker, registry, reporting};

/// Students, instructors, and majors of one university, cross-linked by the
/// grades file, plus the three summary tables built from them.
///
/// The pipeline runs once per [`University::load`]:
///
/// ```text
/// students -> instructors -> grades (link) -> majors -> tables
/// ```
///
/// The individual steps are public so callers can drive them one at a time.
#[derive(Debug, Default)]
pub struct University {
    students: registry::Registry<Student>,
    instructors: registry::Registry<Instructor>,
    majors: registry::Registry<Major>,
    report: UniversityReport,
}

impl University {
    /// An empty university with no registries loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full pipeline over `sources`.
    ///
    /// # Errors
    ///
    /// Returns the first [`EngineError`] raised by any step.
    pub fn load(sources: &SourceSet) -> Result<Self, EngineError> {
        let mut university = Self::new();
        let students = university.load_students(&sources.students)?;
        let instructors = university.load_instructors(&sources.instructors)?;
        let grades = university.link_grades(&sources.grades)?;
        let majors = university.load_majors(&sources.majors)?;
        university.build_tables()?;

        tracing::info!(
            students,
            instructors,
            grades,
            majors,
            "university loaded"
        );
        Ok(university)
    }

    /// Run the full pipeline over the sources named by `config`.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_config(config: &CampusConfig) -> Result<Self, EngineError> {
        Self::load(&SourceSet::from_config(config))
    }

    /// Load the students file. Returns the number of records read.
    ///
    /// # Errors
    ///
    /// See [`registry::load_students`].
    pub fn load_students(&mut self, spec: &SourceSpec) -> Result<usize, EngineError> {
        registry::load_students(&mut self.students, spec)
    }

    /// Load the instructors file. Returns the number of records read.
    ///
    /// # Errors
    ///
    /// See [`registry::load_instructors`].
    pub fn load_instructors(&mut self, spec: &SourceSpec) -> Result<usize, EngineError> {
        registry::load_instructors(&mut self.instructors, spec)
    }

    /// Apply the grades file to students and instructors. Returns the number
    /// of records applied.
    ///
    /// # Errors
    ///
    /// See [`linker::link_grades`].
    pub fn link_grades(&mut self, spec: &SourceSpec) -> Result<usize, EngineError> {
        linker::link_grades(&mut self.students, &mut self.instructors, spec)
    }

    /// Load the majors file. Returns the number of records read.
    ///
    /// # Errors
    ///
    /// See [`registry::load_majors`].
    pub fn load_majors(&mut self, spec: &SourceSpec) -> Result<usize, EngineError> {
        registry::load_majors(&mut self.majors, spec)
    }

    /// Rebuild the three summary tables from the current registries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownMajor`] if a student's major was never
    /// loaded. The previous tables are kept in that case.
    pub fn build_tables(&mut self) -> Result<&UniversityReport, EngineError> {
        self.report = reporting::build_report(&self.students, &self.instructors, &self.majors)?;
        Ok(&self.report)
    }

    #[must_use]
    pub const fn students(&self) -> &registry::Registry<Student> {
        &self.students
    }

    #[must_use]
    pub const fn instructors(&self) -> &registry::Registry<Instructor> {
        &self.instructors
    }

    #[must_use]
    pub const fn majors(&self) -> &registry::Registry<Major> {
        &self.majors
    }

    #[must_use]
    pub fn student(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    #[must_use]
    pub fn instructor(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    #[must_use]
    pub fn major(&self, name: &str) -> Option<&Major> {
        self.majors.get(name)
    }

    /// All three summary tables.
    #[must_use]
    pub const fn report(&self) -> &UniversityReport {
        &self.report
    }

    #[must_use]
    pub fn student_table(&self) -> &[StudentSummary] {
        &self.report.students
    }

    #[must_use]
    pub fn instructor_table(&self) -> &[InstructorSummary] {
        &self.report.instructors
    }

    #[must_use]
    pub fn major_table(&self) -> &[MajorSummary] {
        &self.report.majors
    }

    /// Grades of the student with `cwid`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] (wrapped) if no such student was loaded.
    pub fn transcript(&self, cwid: &str) -> Result<StudentTranscript, EngineError> {
        self.student(cwid)
            .map(reporting::transcript)
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity_type: "student".to_string(),
                    id: cwid.to_string(),
                }
                .into()
            })
    }

    /// Number of grade records linked, counted from the instructor side.
    #[must_use]
    pub fn grade_count(&self) -> u32 {
        self.instructors
            .values()
            .flat_map(|instructor| instructor.student_count.values())
            .sum()
    }
}
