//! Query builder: turns a search term into a content filter.

use mongodb::bson::{doc, Document, Regex};

use crate::models::ContentItem;

/// Predicate selecting which content items a listing returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFilter {
    /// Every item.
    All,
    /// Items whose title or body contains the term, ignoring case.
    Search(String),
}

/// Build the filter for a search term. An empty term matches everything.
pub fn build_filter(search: &str) -> ContentFilter {
    if search.is_empty() {
        ContentFilter::All
    } else {
        ContentFilter::Search(search.to_string())
    }
}

impl ContentFilter {
    /// MongoDB query document for this filter.
    ///
    /// The term is regex-escaped so it always matches literally.
    pub fn to_document(&self) -> Document {
        match self {
            ContentFilter::All => doc! {},
            ContentFilter::Search(term) => {
                let search_regex = Regex {
                    pattern: regex::escape(term),
                    options: "i".to_string(),
                };
                doc! {
                    "$or": [
                        { "title": { "$regex": &search_regex } },
                        { "body": { "$regex": &search_regex } },
                    ]
                }
            }
        }
    }

    /// Evaluate the filter against an item held in memory.
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::Search(term) => {
                let needle = term.to_lowercase();
                item.title.to_lowercase().contains(&needle)
                    || item.body.to_lowercase().contains(&needle)
            }
        }
    }
}
