//! Data models organized by type.

pub mod content;
pub mod requests;
pub mod responses;

pub use content::*;
pub use requests::*;
pub use responses::*;
