//! Paged, searchable content listing over MongoDB.
//!
//! A page request ([`QuerySpec`]) becomes a bounded, newest-first query
//! against a [`ContentStore`]; the result ([`ListPage`]) carries the items,
//! the total page count, and a compact page window for paging UIs.
//!
//! ```ignore
//! let db = content_listing::db::open_database(&CONFIG).await?;
//! let service = ListingService::new(Arc::new(MongoContentRepository::new(&db)));
//! let page = service.list_page(&QuerySpec::new(2, 12, "rust")).await?;
//! let window = page.window(); // e.g. [1, 2, 3, 4, 5, 6, -1, 14]
//! ```

pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod validators;

pub use config::{Config, CONFIG};
pub use errors::{ContentError, StorageError};
pub use models::{ContentDraft, ContentItem, ListPage, QuerySpec};
pub use pagination::{total_pages, PageSlot};
pub use repositories::{
    build_filter, ContentFilter, ContentStore, InMemoryContentStore, MongoContentRepository,
    SortKey,
};
pub use services::{page_window, ListingService};
