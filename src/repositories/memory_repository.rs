//! In-memory content store.
//!
//! Mirrors [`MongoContentRepository`](super::MongoContentRepository)
//! semantics over a concurrent map, for embedding and tests. It can also be
//! switched unavailable or given artificial latency to exercise the failure
//! and deadline paths of callers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::constants::ERR_STORE_UNAVAILABLE;
use crate::errors::StorageError;
use crate::models::{ContentDraft, ContentItem};

use super::content_store::{ContentStore, SortKey, StorageResult};
use super::filter::ContentFilter;

#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    items: Arc<DashMap<ObjectId, ContentItem>>,
    unavailable: Arc<AtomicBool>,
    latency: Duration,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every operation by `latency` before it touches the data.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// While unavailable, every operation fails with [`StorageError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Store items verbatim, keeping their timestamps. Items without an id
    /// get a fresh one. Returns the ids in input order.
    pub fn seed(&self, items: impl IntoIterator<Item = ContentItem>) -> Vec<ObjectId> {
        items
            .into_iter()
            .map(|mut item| {
                let id = *item.id.get_or_insert_with(ObjectId::new);
                self.items.insert(id, item);
                id
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    async fn ready(&self) -> StorageResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(ERR_STORE_UNAVAILABLE.to_string()));
        }
        Ok(())
    }

    fn matching(&self, filter: &ContentFilter) -> Vec<ContentItem> {
        self.items
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find(
        &self,
        filter: &ContentFilter,
        sort: SortKey,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<ContentItem>> {
        self.ready().await?;
        debug!(
            "Memory store: Finding content with filter: {:?}, skip: {}, limit: {}",
            filter, skip, limit
        );

        let mut items = self.matching(filter);
        items.sort_by(|a, b| sort.compare(a, b));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = match limit {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };
        Ok(items.into_iter().skip(skip).take(take).collect())
    }

    async fn count(&self, filter: &ContentFilter) -> StorageResult<u64> {
        self.ready().await?;
        let count = self
            .items
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .count();
        Ok(count as u64)
    }

    async fn insert(&self, mut item: ContentItem) -> StorageResult<ObjectId> {
        self.ready().await?;
        let now = DateTime::now();
        let id = ObjectId::new();
        item.id = Some(id);
        item.created_at = now;
        item.updated_at = now;
        self.items.insert(id, item);
        Ok(id)
    }

    async fn insert_many(&self, items: Vec<ContentItem>) -> StorageResult<Vec<ObjectId>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        self.ready().await?;

        let now = DateTime::now();
        let ids = items
            .into_iter()
            .map(|mut item| {
                let id = ObjectId::new();
                item.id = Some(id);
                item.created_at = now;
                item.updated_at = now;
                self.items.insert(id, item);
                id
            })
            .collect();
        Ok(ids)
    }

    async fn update_by_id(&self, id: ObjectId, changes: &ContentDraft) -> StorageResult<bool> {
        self.ready().await?;
        match self.items.get_mut(&id) {
            Some(mut entry) => {
                let item = entry.value_mut();
                item.title = changes.title.clone();
                item.body = changes.body.clone();
                item.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> StorageResult<bool> {
        self.ready().await?;
        Ok(self.items.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: ObjectId) -> StorageResult<Option<ContentItem>> {
        self.ready().await?;
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }
}
