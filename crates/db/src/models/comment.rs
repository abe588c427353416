use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabletop_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: DbId,
    pub body: String,
    pub votes: i32,
    pub author: String,
    pub review_id: DbId,
    pub created_at: Timestamp,
}

/// Raw body of `POST /reviews/{id}/comments`, before validation.
///
/// Fields are optional so that an incomplete payload reaches the
/// missing-field check instead of failing JSON decoding.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}
