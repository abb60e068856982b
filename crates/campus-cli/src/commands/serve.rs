use campus_config::CampusConfig;

use crate::cli::root_commands::ServeArgs;
use crate::server;

/// Handle `campus serve`. Blocks until the process is stopped.
pub fn handle(args: &ServeArgs, config: &CampusConfig) -> anyhow::Result<()> {
    let addr = args.addr.as_deref().unwrap_or(&config.server.addr);
    server::serve(config, addr)
}
