//! Request models consumed by the listing service.

pub mod content;
pub mod query;

pub use content::*;
pub use query::*;
