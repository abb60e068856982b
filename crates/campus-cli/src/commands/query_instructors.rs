use campus_config::CampusConfig;
use campus_core::report::InstructorSummary;
use campus_store::CampusStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StoreArgs;
use crate::commands::persist::store_path;
use crate::output::{self, report::instructor_table};

/// Handle `campus query-instructors`.
pub fn handle(args: &StoreArgs, config: &CampusConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = store_path(args, config);
    let rows = query(&path)?;
    output::output_with_tables(&rows, &[instructor_table(&rows)], flags.format)
}

/// Instructor summary rows read from an existing row store.
pub fn query(path: &std::path::Path) -> anyhow::Result<Vec<InstructorSummary>> {
    if !path.exists() {
        anyhow::bail!(
            "row store {} does not exist; run 'campus persist' first",
            path.display()
        );
    }
    let store = CampusStore::open(path)?;
    Ok(store.instructor_summary()?)
}
