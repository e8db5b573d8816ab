//! Application constants module.
//!
//! This module centralizes the constant strings and numbers used throughout the
//! crate, including error messages, error codes, pagination limits, and
//! collection names.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod pagination;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use pagination::*;
