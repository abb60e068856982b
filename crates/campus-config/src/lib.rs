//! # campus-config
//!
//! Layered configuration loading for Campus using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CAMPUS_*` prefix, `__` as separator)
//! 2. An explicit config file passed with `--config`
//! 3. Project-level `.campus/config.toml`
//! 4. User-level `~/.config/campus/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CAMPUS_GRADES__SEPARATOR` -> `grades.separator`,
//! `CAMPUS_GENERAL__DATA_DIR` -> `general.data_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use campus_config::CampusConfig;
//! use campus_core::enums::SourceKind;
//!
//! let config = CampusConfig::load_with_dotenv().expect("config");
//! println!("grades: {}", config.source_path(SourceKind::Grades).display());
//! ```

mod error;
mod general;
mod server;
mod source;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use source::SourceConfig;
pub use store::StoreConfig;

use campus_core::enums::SourceKind;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub students: SourceConfig,
    #[serde(default)]
    pub instructors: SourceConfig,
    #[serde(default)]
    pub grades: SourceConfig,
    #[serde(default)]
    pub majors: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            students: SourceConfig::for_kind(SourceKind::Students),
            instructors: SourceConfig::for_kind(SourceKind::Instructors),
            grades: SourceConfig::for_kind(SourceKind::Grades),
            majors: SourceConfig::for_kind(SourceKind::Majors),
            store: StoreConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl CampusConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a provider fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, merging `explicit` above the project-local file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` does not exist, or
    /// any error of [`Self::load`].
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let config: Self = Self::figment_with(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` on the current directory's `.env` before building the
    /// figment. A missing `.env` is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if `.env` exists but cannot be parsed,
    /// or any error of [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(error) if error.not_found() => {}
            Err(error) => return Err(ConfigError::Dotenv(error)),
        }
        Self::load()
    }

    /// Build the figment provider chain without an explicit file.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain, with `explicit` merged above the
    /// project-local file and below the environment.
    #[must_use]
    pub fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".campus/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("CAMPUS_").split("__"))
    }

    /// Source configuration of `kind`.
    #[must_use]
    pub const fn source(&self, kind: SourceKind) -> &SourceConfig {
        match kind {
            SourceKind::Students => &self.students,
            SourceKind::Instructors => &self.instructors,
            SourceKind::Grades => &self.grades,
            SourceKind::Majors => &self.majors,
        }
    }

    /// Full path of the file of `kind`, resolved against `general.data_dir`.
    #[must_use]
    pub fn source_path(&self, kind: SourceKind) -> PathBuf {
        Path::new(&self.general.data_dir).join(self.source(kind).file_name(kind))
    }

    /// Check values figment cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in SourceKind::ALL {
            self.source(kind).validate(kind)?;
        }
        if self.general.data_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.data_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.server.addr.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.addr".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("campus").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use campus_core::RecordFormat;

    use super::*;

    #[test]
    fn default_config_uses_conventional_files() {
        let config = CampusConfig::default();
        assert_eq!(config.students.file, "students.txt");
        assert_eq!(config.instructors.file, "instructors.txt");
        assert_eq!(config.grades.file, "grades.txt");
        assert_eq!(config.majors.file, "majors.txt");
        assert_eq!(config.store.path, "campus.duckdb");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn source_lookup_matches_kind() {
        let mut config = CampusConfig::default();
        config.grades.separator = '|';
        assert_eq!(
            config.source(SourceKind::Grades).format(),
            RecordFormat::new('|', true)
        );
        assert_eq!(
            config.source(SourceKind::Students).format(),
            RecordFormat::new('\t', true)
        );
    }

    #[test]
    fn source_path_joins_data_dir() {
        let mut config = CampusConfig::default();
        config.general.data_dir = "/srv/uni".to_string();
        assert_eq!(
            config.source_path(SourceKind::Majors),
            PathBuf::from("/srv/uni/majors.txt")
        );
    }

    #[test]
    fn empty_data_dir_is_invalid() {
        let mut config = CampusConfig::default();
        config.general.data_dir = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.data_dir"
        ));
    }
}
