use campus_core::report::{InstructorSummary, MajorSummary, StudentTranscript, UniversityReport};
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `campus schema`. Always prints JSON; `--format raw` keeps it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(args.type_name)?;
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

/// JSON Schema of the output type printed for `type_name`.
pub fn schema_json(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::Report => schema_for!(UniversityReport),
        SchemaType::Student => schema_for!(StudentTranscript),
        SchemaType::Instructor => schema_for!(InstructorSummary),
        SchemaType::Major => schema_for!(MajorSummary),
    };
    Ok(serde_json::to_value(schema)?)
}
