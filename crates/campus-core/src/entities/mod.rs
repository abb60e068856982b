//! Entity structs for the university model.
//!
//! Students and instructors are keyed by CWID, majors by name. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and
//! schema export.

mod grade;
mod instructor;
mod major;
mod student;

pub use grade::GradeRecord;
pub use instructor::Instructor;
pub use major::Major;
pub use student::Student;
