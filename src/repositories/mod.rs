//! Repository layer for content storage.
//!
//! The listing service talks to storage only through the [`ContentStore`]
//! port. [`MongoContentRepository`] is the production implementation;
//! [`InMemoryContentStore`] has the same semantics without a server.

pub mod content_store;
pub mod filter;
pub mod memory_repository;
pub mod mongo_repository;

pub use content_store::{ContentStore, SortKey, StorageResult};
pub use filter::{build_filter, ContentFilter};
pub use memory_repository::InMemoryContentStore;
pub use mongo_repository::MongoContentRepository;
