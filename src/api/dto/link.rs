//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Link;

/// Request body for `POST /links`.
///
/// An absent, `null` or empty `short_name` asks the service to generate one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Original URL is required"))]
    #[validate(url(message = "Invalid URL format"))]
    #[validate(custom(function = "validate_no_control_chars"))]
    pub original_url: String,

    #[serde(default)]
    pub short_name: Option<String>,
}

/// Request body for `PUT /links/{id}`. Both fields are replaced.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Original URL is required"))]
    pub original_url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Short name is required"))]
    pub short_name: String,
}

/// URL parsing drops tabs and newlines, so they are checked separately.
fn validate_no_control_chars(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_control) {
        return Err(ValidationError::new("control_characters")
            .with_message("URL must not contain control characters".into()));
    }
    Ok(())
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_name: link.short_name,
            short_url: link.short_url,
        }
    }
}
