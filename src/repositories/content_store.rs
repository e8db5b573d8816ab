//! Storage port for content items.

use std::cmp::Ordering;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};

use crate::errors::StorageError;
use crate::models::{ContentDraft, ContentItem};

use super::filter::ContentFilter;

pub type StorageResult<T> = Result<T, StorageError>;

/// Ordering applied to listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Creation time descending, ties broken by id descending.
    #[default]
    NewestFirst,
}

impl SortKey {
    pub fn to_document(self) -> Document {
        match self {
            SortKey::NewestFirst => doc! { "created_at": -1, "_id": -1 },
        }
    }

    pub fn compare(self, a: &ContentItem, b: &ContentItem) -> Ordering {
        match self {
            SortKey::NewestFirst => b
                .created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id)),
        }
    }
}

/// Persistent content store consumed by the listing service.
///
/// Implementations must tolerate concurrent reads alongside writes; this
/// layer adds no locking of its own.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Items matching `filter`, ordered by `sort`, after skipping `skip`.
    /// A `limit` of 0 returns every remaining match.
    async fn find(
        &self,
        filter: &ContentFilter,
        sort: SortKey,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<ContentItem>>;

    /// Number of items matching `filter`, ignoring skip and limit.
    async fn count(&self, filter: &ContentFilter) -> StorageResult<u64>;

    /// Persist a new item, stamping both timestamps, and return its id.
    async fn insert(&self, item: ContentItem) -> StorageResult<ObjectId>;

    /// Persist a batch sharing one creation timestamp. Ids are returned in
    /// input order; an empty batch is a no-op.
    async fn insert_many(&self, items: Vec<ContentItem>) -> StorageResult<Vec<ObjectId>>;

    /// Replace title and body and refresh `updated_at`.
    /// Returns `false` when no item has this id.
    async fn update_by_id(&self, id: ObjectId, changes: &ContentDraft) -> StorageResult<bool>;

    /// Returns `false` when no item has this id.
    async fn delete_by_id(&self, id: ObjectId) -> StorageResult<bool>;

    async fn find_by_id(&self, id: ObjectId) -> StorageResult<Option<ContentItem>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn item_at(millis: i64, id: ObjectId) -> ContentItem {
        ContentItem {
            id: Some(id),
            created_at: DateTime::from_millis(millis),
            updated_at: DateTime::from_millis(millis),
            ..ContentItem::new("title", "body")
        }
    }

    #[test]
    fn test_newest_first_orders_by_creation_then_id() {
        let older_id = ObjectId::new();
        let newer_id = ObjectId::new();

        let mut items = vec![
            item_at(1_000, newer_id),
            item_at(2_000, older_id),
            item_at(1_000, older_id),
        ];
        items.sort_by(|a, b| SortKey::NewestFirst.compare(a, b));

        let order: Vec<(i64, ObjectId)> = items
            .iter()
            .map(|i| (i.created_at.timestamp_millis(), i.id.unwrap()))
            .collect();
        assert_eq!(
            order,
            vec![(2_000, older_id), (1_000, newer_id), (1_000, older_id)]
        );
    }

    #[test]
    fn test_sort_document_has_id_tie_break() {
        let sort = SortKey::NewestFirst.to_document();
        let keys: Vec<&String> = sort.keys().collect();
        assert_eq!(keys, vec!["created_at", "_id"]);
        assert_eq!(sort.get_i32("created_at").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), -1);
    }
}
