//! Services organized by domain concern.

pub mod listing_service;

pub use listing_service::{page_window, ListingService};
