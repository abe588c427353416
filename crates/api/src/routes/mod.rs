pub mod categories;
pub mod comments;
pub mod health;
pub mod reviews;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                              list
///
/// /reviews                                 list (?sort_by, order, category)
/// /reviews/{review_id}                     get, patch votes
/// /reviews/{review_id}/comments            list (?sort_by, order), create
///
/// /comments/{comment_id}                   delete
///
/// /users                                   list
/// /users/{username}                        get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/reviews", reviews::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
