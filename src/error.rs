//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog library
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog library operations.
///
/// Represents the failure conditions that can occur while loading, filtering,
/// or mutating the play catalog. Parse failures on individual field values
/// are deliberately *not* represented here: loading coerces unparseable
/// numeric values to the missing marker instead of failing.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A mandatory field was missing or empty; the record was not stored.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record identity matched zero storage rows; nothing was mutated.
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// The supplied passphrase did not match the configured gate; the
    /// entire pending mutation was discarded.
    #[error("Passphrase rejected")]
    Unauthorized,

    /// The backing CSV file was structurally malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error from the backing file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
