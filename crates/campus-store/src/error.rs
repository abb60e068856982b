//! Store error types.

/// Errors that can occur in the row store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// A stored count does not fit the in-memory counter type.
    #[error("count out of range in {table}: {value}")]
    CountOutOfRange {
        /// Table holding the value.
        table: &'static str,
        /// Raw stored value.
        value: i64,
    },
}
