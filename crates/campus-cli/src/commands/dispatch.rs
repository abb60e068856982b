use campus_config::CampusConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: &CampusConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => commands::report::handle(&args, config, flags),
        Commands::Student(args) => commands::student::handle(&args, config, flags),
        Commands::Persist(args) => commands::persist::handle(&args, config, flags),
        Commands::QueryInstructors(args) => {
            commands::query_instructors::handle(&args, config, flags)
        }
        Commands::Serve(args) => commands::serve::handle(&args, config),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
