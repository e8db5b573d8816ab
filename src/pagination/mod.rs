//! Pure pagination arithmetic.
//!
//! Nothing here touches the store or any renderer: page counts and page
//! windows are plain functions over integers so the presentation layer can
//! call them directly and tests can pin every boundary.

pub mod page_count;
pub mod window;

pub use page_count::*;
pub use window::*;
