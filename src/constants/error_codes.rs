//! Error code constants.
//!
//! These codes give callers a machine-readable identifier for each error kind,
//! so the presentation layer can map failures without matching on messages.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_ID: &str = "INVALID_ID";

// Lookup errors
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";

// Storage errors
pub const CODE_STORAGE_UNAVAILABLE: &str = "STORAGE_UNAVAILABLE";
pub const CODE_STORAGE_QUERY_FAILED: &str = "STORAGE_QUERY_FAILED";
pub const CODE_STORAGE_TIMEOUT: &str = "STORAGE_TIMEOUT";
pub const CODE_STORAGE_CANCELLED: &str = "STORAGE_CANCELLED";
