use std::path::{Path, PathBuf};

use anyhow::Context;
use campus_config::CampusConfig;
use campus_core::report::PersistResponse;
use campus_engine::University;
use campus_store::CampusStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StoreArgs;
use crate::output;

/// Handle `campus persist`.
pub fn handle(args: &StoreArgs, config: &CampusConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let university = University::from_config(config).context("failed to load university")?;
    let path = store_path(args, config);
    let response = persist(&university, &path)?;
    output::output(&response, flags.format)
}

/// `--db` when given, else `store.path` from the config.
pub fn store_path(args: &StoreArgs, config: &CampusConfig) -> PathBuf {
    args.db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store.path))
}

/// Replace the row store at `path` with the registries of `university`.
pub fn persist(university: &University, path: &Path) -> anyhow::Result<PersistResponse> {
    let mut store = CampusStore::open(path)
        .with_context(|| format!("failed to open row store at {}", path.display()))?;
    store
        .replace_all(university)
        .with_context(|| format!("failed to write row store at {}", path.display()))?;

    Ok(PersistResponse {
        path: path.display().to_string(),
        students: count(university.students().len()),
        instructors: count(university.instructors().len()),
        majors: count(university.majors().len()),
        grades: university.grade_count(),
    })
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
