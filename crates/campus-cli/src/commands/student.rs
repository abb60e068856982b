use anyhow::Context;
use campus_config::CampusConfig;
use campus_engine::University;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StudentArgs;
use crate::output::{self, report::transcript_table};

/// Handle `campus student`.
pub fn handle(args: &StudentArgs, config: &CampusConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let university = University::from_config(config).context("failed to load university")?;
    let transcript = university.transcript(&args.cwid)?;
    output::output_with_tables(&transcript, &[transcript_table(&transcript)], flags.format)
}
