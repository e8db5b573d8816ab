//! Input validation for by-id operations and content drafts.

pub mod content;

pub use content::*;
