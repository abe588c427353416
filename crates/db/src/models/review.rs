//! Review models. `comment_count` is aggregated from `comments` on every
//! read and has no backing column.

use serde::Serialize;
use sqlx::FromRow;
use tabletop_core::types::{DbId, Timestamp};

/// A single review with its body and live comment count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub review_id: DbId,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i64,
}

/// A review as it appears in listings (no body).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewListItem {
    pub review_id: DbId,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub category: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i64,
}
