//! Row store configuration.

use serde::{Deserialize, Serialize};

/// Default `DuckDB` file for `campus persist`.
fn default_path() -> String {
    String::from("campus.duckdb")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the `DuckDB` database file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    /// Check if a database path is set.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }
}
