//! MongoDB collection names.

/// Collection holding every published content item.
pub const COLLECTION_POSTS: &str = "posts";
