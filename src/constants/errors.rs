//! Error message constants used throughout the crate.

// Content errors
pub const ERR_CONTENT_NOT_FOUND: &str = "Content item not found";
pub const ERR_INVALID_CONTENT_ID: &str = "Invalid content ID format";

// Storage errors
pub const ERR_STORE_UNAVAILABLE: &str = "Content store is unavailable";
pub const ERR_MISSING_INSERTED_ID: &str = "Store did not return an ObjectId for the inserted item";
