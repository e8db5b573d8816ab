//! MongoDB-backed content store.
//!
//! This repository encapsulates all database access for the posts
//! collection behind the [`ContentStore`] port.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_POSTS, ERR_MISSING_INSERTED_ID, MAX_SKIP};
use crate::errors::StorageError;
use crate::models::{ContentDraft, ContentItem};

use super::content_store::{ContentStore, SortKey, StorageResult};
use super::filter::ContentFilter;

/// Repository for content items stored in MongoDB.
#[derive(Clone)]
pub struct MongoContentRepository {
    collection: Collection<ContentItem>,
}

impl MongoContentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_POSTS),
        }
    }

    /// Create the index backing listing queries.
    ///
    /// Should be called once during startup. Creates a compound descending
    /// index on `created_at` and `_id`, matching [`SortKey::NewestFirst`].
    pub async fn create_indexes(&self) -> StorageResult<()> {
        info!("Creating database indexes for {} collection...", COLLECTION_POSTS);

        let index = IndexModel::builder()
            .keys(SortKey::NewestFirst.to_document())
            .build();

        self.collection.create_index(index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

/// Sort, skip, and limit for a listing query.
///
/// Both numbers are clamped to what the server accepts; a `limit` of 0 sets
/// no limit.
fn find_options(sort: SortKey, skip: u64, limit: u64) -> FindOptions {
    let limit = (limit > 0).then(|| i64::try_from(limit).unwrap_or(i64::MAX));

    FindOptions::builder()
        .sort(sort.to_document())
        .skip(skip.min(MAX_SKIP))
        .limit(limit)
        .build()
}

#[async_trait]
impl ContentStore for MongoContentRepository {
    async fn find(
        &self,
        filter: &ContentFilter,
        sort: SortKey,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<ContentItem>> {
        let filter = filter.to_document();
        debug!(
            "Repository: Finding content with filter: {:?}, skip: {}, limit: {}",
            filter, skip, limit
        );

        let cursor = self
            .collection
            .find(filter)
            .with_options(find_options(sort, skip, limit))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &ContentFilter) -> StorageResult<u64> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn insert(&self, mut item: ContentItem) -> StorageResult<ObjectId> {
        let now = DateTime::now();
        item.id = None;
        item.created_at = now;
        item.updated_at = now;

        let result = self.collection.insert_one(&item).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::Query(ERR_MISSING_INSERTED_ID.to_string()))
    }

    async fn insert_many(&self, mut items: Vec<ContentItem>) -> StorageResult<Vec<ObjectId>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let now = DateTime::now();
        let mut ids = Vec::with_capacity(items.len());
        for item in items.iter_mut() {
            let id = ObjectId::new();
            item.id = Some(id);
            item.created_at = now;
            item.updated_at = now;
            ids.push(id);
        }

        debug!("Repository: Inserting {} content items", items.len());
        self.collection.insert_many(&items).await?;
        Ok(ids)
    }

    async fn update_by_id(&self, id: ObjectId, changes: &ContentDraft) -> StorageResult<bool> {
        debug!("Repository: Updating content: {}", id);
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "title": &changes.title,
                        "body": &changes.body,
                        "updated_at": DateTime::now()
                    }
                },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: ObjectId) -> StorageResult<bool> {
        debug!("Repository: Deleting content: {}", id);
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_by_id(&self, id: ObjectId) -> StorageResult<Option<ContentItem>> {
        debug!("Repository: Finding content by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }
}
