//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
///
/// Read-only lookups (`find`, `find_phone`) never produce these; absence is
/// reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Input failed a field's format contract
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An update targeted a value the record does not hold
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation needs state that has not been established
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
