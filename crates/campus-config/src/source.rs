//! Per-file source configuration.

use campus_core::RecordFormat;
use campus_core::enums::SourceKind;
use campus_core::format::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

const fn default_header() -> bool {
    true
}

/// Location and layout of one source file.
///
/// ```toml
/// [grades]
/// file = "grades.txt"
/// separator = "|"
/// header = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// File name, relative to `general.data_dir`. Empty means the default
    /// name of the source kind.
    #[serde(default)]
    pub file: String,

    /// Field separator character.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Whether the first line is a header.
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            file: String::new(),
            separator: default_separator(),
            header: default_header(),
        }
    }
}

impl SourceConfig {
    /// Default configuration for `kind`, with its conventional file name.
    #[must_use]
    pub fn for_kind(kind: SourceKind) -> Self {
        Self {
            file: kind.default_file_name().to_string(),
            ..Self::default()
        }
    }

    /// Record layout handed to the reader.
    #[must_use]
    pub const fn format(&self) -> RecordFormat {
        RecordFormat::new(self.separator, self.header)
    }

    /// The configured file name, falling back to the default for `kind`.
    #[must_use]
    pub fn file_name(&self, kind: SourceKind) -> &str {
        if self.file.is_empty() {
            kind.default_file_name()
        } else {
            &self.file
        }
    }

    pub(crate) fn validate(&self, kind: SourceKind) -> Result<(), ConfigError> {
        if matches!(self.separator, '\n' | '\r') {
            return Err(ConfigError::InvalidValue {
                field: format!("{kind}.separator"),
                reason: "a line terminator cannot separate fields".to_string(),
            });
        }
        Ok(())
    }
}
