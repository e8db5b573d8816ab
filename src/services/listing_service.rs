//! Listing service: paged, searchable content listing plus by-id operations.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortRegistration, Abortable};
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::config::CONFIG;
use crate::constants::ERR_CONTENT_NOT_FOUND;
use crate::errors::{ContentError, StorageError};
use crate::models::{ContentDraft, ContentItem, ListPage, QuerySpec};
use crate::pagination::{self, clamp_page, total_pages};
use crate::repositories::{build_filter, ContentStore, SortKey};
use crate::utils::sanitize_search_term;
use crate::validators::{parse_content_id, validate_draft};

pub struct ListingService<S: ContentStore> {
    store: Arc<S>,
    query_timeout: Duration,
}

impl<S: ContentStore> ListingService<S> {
    /// Create a service using the configured query deadline.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_timeout(store, CONFIG.query_timeout())
    }

    /// Create a service with an explicit per-operation deadline.
    /// A zero deadline disables the timeout.
    pub fn with_timeout(store: Arc<S>, query_timeout: Duration) -> Self {
        Self {
            store,
            query_timeout,
        }
    }

    /// Get the underlying store (for sharing with other services).
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Fetch one page of content, newest first, under the query deadline.
    ///
    /// Zero matches is an empty page with `total_pages == 1`, not an error.
    pub async fn list_page(&self, spec: &QuerySpec) -> Result<ListPage, ContentError> {
        Ok(self.with_deadline(self.fetch_page(spec)).await?)
    }

    /// Like [`list_page`](Self::list_page), but also abandons the query as
    /// soon as the matching [`AbortHandle`](futures::future::AbortHandle)
    /// is triggered.
    pub async fn list_page_with_cancel(
        &self,
        spec: &QuerySpec,
        registration: AbortRegistration,
    ) -> Result<ListPage, ContentError> {
        let fetch = async {
            match Abortable::new(self.fetch_page(spec), registration).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Listing query cancelled by caller");
                    Err(StorageError::Cancelled)
                }
            }
        };
        Ok(self.with_deadline(fetch).await?)
    }

    async fn fetch_page(&self, spec: &QuerySpec) -> Result<ListPage, StorageError> {
        let filter = build_filter(spec.search());
        debug!(
            "Fetching content page {} (limit {}) for search {:?}",
            spec.page(),
            spec.limit(),
            sanitize_search_term(spec.search())
        );

        let (items, total_count) = futures::try_join!(
            self.store
                .find(&filter, SortKey::NewestFirst, spec.skip(), spec.limit()),
            self.store.count(&filter),
        )?;

        Ok(ListPage {
            items,
            total_count,
            page: spec.page(),
            per_page: spec.limit(),
            total_pages: total_pages(total_count, spec.limit()),
        })
    }

    pub async fn get(&self, id: &str) -> Result<ContentItem, ContentError> {
        debug!("Fetching content by ID: {}", id);
        let object_id = parse_content_id(id)?;

        self.with_deadline(self.store.find_by_id(object_id))
            .await?
            .ok_or_else(|| not_found(object_id))
    }

    pub async fn create(&self, draft: ContentDraft) -> Result<ObjectId, ContentError> {
        validate_draft(&draft).inspect_err(|err| warn!("Create rejected: {}", err))?;

        let id = self
            .with_deadline(self.store.insert(draft.into_item()))
            .await?;
        info!("Created content: {}", id);
        Ok(id)
    }

    /// Validate every draft, then insert them as one batch.
    pub async fn create_many(
        &self,
        drafts: Vec<ContentDraft>,
    ) -> Result<Vec<ObjectId>, ContentError> {
        for draft in &drafts {
            validate_draft(draft).inspect_err(|err| warn!("Batch create rejected: {}", err))?;
        }

        let items = drafts.into_iter().map(ContentDraft::into_item).collect();
        let ids = self.with_deadline(self.store.insert_many(items)).await?;
        info!("Created {} content items", ids.len());
        Ok(ids)
    }

    /// Replace an item's title and body, returning the stored result.
    pub async fn update(&self, id: &str, draft: ContentDraft) -> Result<ContentItem, ContentError> {
        info!("Updating content: {}", id);
        let object_id = parse_content_id(id)?;
        validate_draft(&draft).inspect_err(|err| warn!("Update rejected: {}", err))?;

        let matched = self
            .with_deadline(self.store.update_by_id(object_id, &draft))
            .await?;
        if !matched {
            return Err(not_found(object_id));
        }

        self.with_deadline(self.store.find_by_id(object_id))
            .await?
            .ok_or_else(|| not_found(object_id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ContentError> {
        info!("Deleting content: {}", id);
        let object_id = parse_content_id(id)?;

        if !self.with_deadline(self.store.delete_by_id(object_id)).await? {
            return Err(not_found(object_id));
        }
        info!("Successfully deleted content: {}", id);
        Ok(())
    }

    async fn with_deadline<T, F>(&self, operation: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        if self.query_timeout.is_zero() {
            return operation.await;
        }

        match tokio::time::timeout(self.query_timeout, operation).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Store operation exceeded deadline of {:?}",
                    self.query_timeout
                );
                Err(StorageError::TimedOut(self.query_timeout))
            }
        }
    }
}

fn not_found(id: ObjectId) -> ContentError {
    warn!("Content not found with id: {}", id);
    ContentError::NotFound(format!("{}: {}", ERR_CONTENT_NOT_FOUND, id))
}

/// Navigation window for the presentation layer.
///
/// Unlike [`pagination::page_window`], `current` is first clamped into
/// `[1, total_pages]`, so a request past the last page still yields a window
/// that points at real pages.
pub fn page_window(current: i64, total_pages: i64) -> Vec<i64> {
    let clamped = clamp_page(current, total_pages);
    if clamped != current {
        debug!(
            "Clamped page {} into 1..={} for window",
            current, total_pages
        );
    }
    pagination::page_window(clamped, total_pages)
}
