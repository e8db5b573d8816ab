//! Response models handed to the presentation layer.

pub mod pagination;

pub use pagination::*;
