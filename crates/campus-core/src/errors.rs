//! Cross-cutting error types for Campus.
//!
//! Domain-specific errors (e.g., `ReaderError`, `EngineError`, `StoreError`)
//! are defined in their respective crates. All of them converge into
//! `anyhow::Error` in `campus-cli`.

use thiserror::Error;

/// Errors that can be raised by any Campus crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}
