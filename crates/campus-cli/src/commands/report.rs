use anyhow::Context;
use campus_config::CampusConfig;
use campus_engine::University;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ReportArgs, ReportSection};
use crate::output::{self, report::report_tables};

/// Handle `campus report`.
pub fn handle(args: &ReportArgs, config: &CampusConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let university = University::from_config(config).context("failed to load university")?;
    let report = university.report();
    let tables = report_tables(report, args.only);

    match args.only {
        None => output::output_with_tables(report, &tables, flags.format),
        Some(ReportSection::Students) => {
            output::output_with_tables(&report.students, &tables, flags.format)
        }
        Some(ReportSection::Instructors) => {
            output::output_with_tables(&report.instructors, &tables, flags.format)
        }
        Some(ReportSection::Majors) => {
            output::output_with_tables(&report.majors, &tables, flags.format)
        }
    }
}
