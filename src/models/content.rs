use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Content item document stored in MongoDB.
///
/// `id` is assigned by the store on insert and never reassigned.
/// `created_at` is set once at insert; `updated_at` on every mutation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContentItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ContentItem {
    /// A not-yet-persisted item; the store overwrites both timestamps on insert.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
