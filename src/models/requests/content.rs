use serde::Deserialize;
use validator::Validate;

use crate::models::ContentItem;

/// Title and body supplied when creating or replacing a content item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContentDraft {
    /// Title (3-100 characters)
    #[validate(length(
        min = 3,
        max = 100,
        message = "Title must be between 3 and 100 characters"
    ))]
    pub title: String,
    /// Body (minimum 10 characters)
    #[validate(length(min = 10, message = "Body must be at least 10 characters long"))]
    pub body: String,
}

impl ContentDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn into_item(self) -> ContentItem {
        ContentItem::new(self.title, self.body)
    }
}
