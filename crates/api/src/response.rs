//! Response envelopes.
//!
//! Every payload is wrapped in an object keyed by the resource name
//! (`{"reviews": [...]}`, `{"review": {...}}`). Use these structs instead of
//! ad-hoc `serde_json::json!` so the shapes are checked at compile time.

use serde::Serialize;
use tabletop_db::models::category::Category;
use tabletop_db::models::comment::Comment;
use tabletop_db::models::review::{Review, ReviewListItem};
use tabletop_db::models::user::User;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewListItem>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
