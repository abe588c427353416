use axum::routing::delete;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes.
///
/// ```text
/// DELETE /{comment_id}       -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{comment_id}", delete(comments::delete_comment))
}
