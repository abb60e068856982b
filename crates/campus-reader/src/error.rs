//! Reader error types for campus-reader.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading a delimited file.
///
/// Every variant carries the path of the file so the message identifies it.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read (I/O failure or invalid UTF-8).
    #[error("cannot read line {line} of {}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The header line does not have the expected number of columns.
    #[error("{}: expected {expected} fields, but got {found} in the header", path.display())]
    MalformedHeader {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// A record line does not have the expected number of fields.
    #[error("{}: expected {expected} fields, but got {found} at line {line}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl ReaderError {
    /// Path of the file the error originated from.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Read { path, .. }
            | Self::MalformedHeader { path, .. }
            | Self::MalformedRecord { path, .. } => path,
        }
    }

    /// Whether the file could not be opened at all, as opposed to holding bad data.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
