//! # campus-engine
//!
//! Record-linking and aggregation engine for Campus.
//!
//! Loads the students, instructors, and majors files into keyed registries,
//! links them through the grades file, and derives the student, instructor,
//! and majors summary tables. Every error is fatal: the pipeline stops at the
//! first bad record or dangling reference.
//!
//! ## Modules
//!
//! - [`sources`]: path and record layout of each input file
//! - [`registry`]: entity loaders
//! - [`linker`]: grade processing across the student and instructor registries
//! - [`reporting`]: summary tables
//! - [`university`]: the facade running the fixed pipeline

pub mod error;
pub mod linker;
pub mod registry;
pub mod reporting;
pub mod sources;
pub mod university;

pub use error::EngineError;
pub use registry::Registry;
pub use sources::{SourceSet, SourceSpec};
pub use university::University;
