//! Per-file record layout shared by the reader and the configuration layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default field separator (tab).
pub const DEFAULT_SEPARATOR: char = '\t';

/// How the lines of one delimited file are laid out.
///
/// Every source file carries its own format so that, for example, a
/// pipe-separated grades file can sit beside a headerless tab-separated
/// instructors file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecordFormat {
    /// Character separating the fields of a line.
    pub separator: char,
    /// Whether the first line is a column header rather than a record.
    pub header: bool,
}

impl RecordFormat {
    #[must_use]
    pub const fn new(separator: char, header: bool) -> Self {
        Self { separator, header }
    }

    /// Line number of the first data record (1-based).
    #[must_use]
    pub const fn first_record_line(&self) -> usize {
        if self.header { 2 } else { 1 }
    }
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR, true)
    }
}
