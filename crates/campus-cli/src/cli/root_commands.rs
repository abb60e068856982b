use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the source files and print the summary tables.
    Report(ReportArgs),
    /// Show one student's completed courses and grades.
    Student(StudentArgs),
    /// Load the source files and write the registries to the row store.
    Persist(StoreArgs),
    /// Read the instructor summary back from the row store.
    QueryInstructors(StoreArgs),
    /// Serve the summary tables over HTTP.
    Serve(ServeArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

/// One of the three summary tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReportSection {
    Students,
    Instructors,
    Majors,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Print only this table.
    #[arg(long)]
    pub only: Option<ReportSection>,
}

#[derive(Clone, Debug, Args)]
pub struct StudentArgs {
    /// Student CWID.
    pub cwid: String,
}

#[derive(Clone, Debug, Args)]
pub struct StoreArgs {
    /// Row store file (defaults to `store.path` from the config).
    #[arg(long)]
    pub db: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (defaults to `server.addr` from the config).
    #[arg(long)]
    pub addr: Option<String>,
}

/// Output types with a published JSON Schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Report,
    Student,
    Instructor,
    Major,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Output type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
