//! Validation for new comments posted against a review.

use crate::error::CoreError;

/// A comment payload whose required fields are present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

/// Validate the raw `{username, body}` payload.
///
/// Missing, `null` and whitespace-only values are all reported as missing.
/// Whether `username` refers to a real user is left to the store's foreign
/// key.
pub fn validate_new_comment(
    username: Option<String>,
    body: Option<String>,
) -> Result<NewComment, CoreError> {
    let username = required("username", username)?;
    let body = required("body", body)?;
    Ok(NewComment { username, body })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::MissingField(field)),
    }
}
