use std::path::Path;

use anyhow::Context;
use campus_config::CampusConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration, then apply command-line
/// overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CampusConfig> {
    load_dotenv()?;

    let mut config = CampusConfig::load_from(flags.config.as_deref())
        .context("failed to load campus configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = Path::new(".env");
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(config: &mut CampusConfig, flags: &GlobalFlags) {
    if let Some(dir) = &flags.data_dir {
        tracing::debug!(data_dir = %dir.display(), "data directory overridden");
        config.general.data_dir = dir.to_string_lossy().into_owned();
    }
}
