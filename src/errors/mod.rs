use std::fmt;
use std::time::Duration;

use mongodb::error::ErrorKind;

use crate::constants::{
    CODE_INVALID_ID, CODE_NOT_FOUND, CODE_STORAGE_CANCELLED, CODE_STORAGE_QUERY_FAILED,
    CODE_STORAGE_TIMEOUT, CODE_STORAGE_UNAVAILABLE, CODE_VALIDATION_FAILED,
};

/// Failures raised by the content store or while waiting on it.
///
/// Zero matching documents is never a `StorageError`; it is an empty page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The store could not be reached (server selection, DNS, socket I/O).
    Unavailable(String),
    /// The store was reached but rejected or failed the operation.
    Query(String),
    /// The caller's deadline expired before the store answered.
    TimedOut(Duration),
    /// The caller abandoned the request.
    Cancelled,
}

impl StorageError {
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Unavailable(_) => CODE_STORAGE_UNAVAILABLE,
            StorageError::Query(_) => CODE_STORAGE_QUERY_FAILED,
            StorageError::TimedOut(_) => CODE_STORAGE_TIMEOUT,
            StorageError::Cancelled => CODE_STORAGE_CANCELLED,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(message) => write!(f, "Store unavailable: {}", message),
            StorageError::Query(message) => write!(f, "Query failed: {}", message),
            StorageError::TimedOut(after) => {
                write!(f, "Query timed out after {} ms", after.as_millis())
            }
            StorageError::Cancelled => write!(f, "Query cancelled by caller"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => StorageError::Unavailable(err.to_string()),
            _ => StorageError::Query(err.to_string()),
        }
    }
}

/// Top-level error returned by the listing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A draft failed field validation; one message per failing rule.
    Validation(Vec<String>),
    /// A by-id operation received an identifier that is not a valid ObjectId.
    InvalidId(String),
    /// No item matches the given id.
    NotFound(String),
    Storage(StorageError),
}

impl ContentError {
    /// Stable, machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ContentError::Validation(_) => CODE_VALIDATION_FAILED,
            ContentError::InvalidId(_) => CODE_INVALID_ID,
            ContentError::NotFound(_) => CODE_NOT_FOUND,
            ContentError::Storage(err) => err.code(),
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, ContentError::Storage(_))
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Validation(errors) => {
                write!(f, "Validation Error [{}]: {:?}", self.code(), errors)
            }
            ContentError::InvalidId(message) => {
                write!(f, "Invalid Id [{}]: {}", self.code(), message)
            }
            ContentError::NotFound(message) => {
                write!(f, "Not Found [{}]: {}", self.code(), message)
            }
            ContentError::Storage(err) => write!(f, "Storage Error [{}]: {}", self.code(), err),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for ContentError {
    fn from(err: StorageError) -> Self {
        ContentError::Storage(err)
    }
}

impl From<mongodb::error::Error> for ContentError {
    fn from(err: mongodb::error::Error) -> Self {
        ContentError::Storage(err.into())
    }
}
