//! # campus-core
//!
//! Core types shared across all Campus crates.
//!
//! This crate provides the foundational types of the university model:
//! - Entity structs for students, instructors, majors, and grade records
//! - Enums for source files and course classification flags
//! - Per-file record format (separator + header flag)
//! - Report row types produced by the reporting layer
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod report;

pub use errors::CoreError;
pub use format::RecordFormat;
