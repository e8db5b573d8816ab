//! Content validation helpers.

use mongodb::bson::oid::ObjectId;
use validator::{Validate, ValidationErrors};

use crate::constants::ERR_INVALID_CONTENT_ID;
use crate::errors::ContentError;
use crate::models::ContentDraft;

/// Convert validator errors to `ContentError::Validation`.
///
/// Messages are sorted so the result does not depend on map iteration order.
///
/// # Example
/// ```ignore
/// draft.validate().map_err(validation_errors_to_content_error)?;
/// ```
pub fn validation_errors_to_content_error(e: ValidationErrors) -> ContentError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    errors.sort();
    ContentError::Validation(errors)
}

/// Validate a draft's title and body.
pub fn validate_draft(draft: &ContentDraft) -> Result<(), ContentError> {
    draft.validate().map_err(validation_errors_to_content_error)
}

/// Parse a hex ObjectId supplied by a caller.
pub fn parse_content_id(id: &str) -> Result<ObjectId, ContentError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| ContentError::InvalidId(format!("{}: {:?}", ERR_INVALID_CONTENT_ID, id)))
}
