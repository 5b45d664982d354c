//! Error and status types.
//!
//! Operations return `Result<(), TableError>`. `Status` is the flat
//! outcome code (success included) for callers that report results
//! as a single value.

use core::fmt;
use std::collections::TryReserveError;

#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TableError {
    #[error("General failure")]
    Failure,

    #[error("Memory allocation failed")]
    MemoryError,

    #[error("Invalid input")]
    InvalidInput,

    #[error("Key not found")]
    KeyNotFound,
}

impl From<TryReserveError> for TableError {
    fn from(_: TryReserveError) -> Self {
        TableError::MemoryError
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    Success,
    Failure,
    MemoryError,
    InvalidInput,
    KeyNotFound,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Failure => "General failure",
            Status::MemoryError => "Memory allocation failed",
            Status::InvalidInput => "Invalid input",
            Status::KeyNotFound => "Key not found",
        }
    }

    /// Back to a `Result`; `Success` is `Ok(())`.
    pub fn into_result(self) -> Result<(), TableError> {
        match self {
            Status::Success => Ok(()),
            Status::Failure => Err(TableError::Failure),
            Status::MemoryError => Err(TableError::MemoryError),
            Status::InvalidInput => Err(TableError::InvalidInput),
            Status::KeyNotFound => Err(TableError::KeyNotFound),
        }
    }
}

impl From<TableError> for Status {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Failure => Status::Failure,
            TableError::MemoryError => Status::MemoryError,
            TableError::InvalidInput => Status::InvalidInput,
            TableError::KeyNotFound => Status::KeyNotFound,
        }
    }
}

impl From<Result<(), TableError>> for Status {
    fn from(r: Result<(), TableError>) -> Self {
        match r {
            Ok(()) => Status::Success,
            Err(e) => e.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
