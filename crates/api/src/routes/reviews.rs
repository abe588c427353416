//! Route definitions for reviews and their comments.
//!
//! Mounted at `/reviews` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, reviews};
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// GET    /                          -> list_reviews (?sort_by, order, category)
/// GET    /{review_id}               -> get_review
/// PATCH  /{review_id}               -> update_review_votes
/// GET    /{review_id}/comments      -> list_comments (?sort_by, order)
/// POST   /{review_id}/comments      -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews))
        .route(
            "/{review_id}",
            get(reviews::get_review).patch(reviews::update_review_votes),
        )
        .route(
            "/{review_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}
