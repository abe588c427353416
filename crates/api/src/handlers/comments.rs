//! Handlers for the comments attached to a review.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tabletop_core::comments::validate_new_comment;
use tabletop_core::error::{CoreError, Entity};
use tabletop_core::types::DbId;
use tabletop_db::models::comment::CreateCommentRequest;
use tabletop_db::repositories::{CommentRepo, ReviewRepo};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::CommentListQuery;
use crate::response::{CommentResponse, CommentsResponse};
use crate::state::AppState;

/// Fail with not-found unless the review exists.
async fn ensure_review_exists(state: &AppState, review_id: DbId) -> AppResult<()> {
    if ReviewRepo::exists(&state.pool, review_id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found(Entity::Review, review_id).into())
    }
}

/// GET /reviews/{review_id}/comments?sort_by=&order=
///
/// Newest first by default. An existing review without comments yields an
/// empty list.
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
    ApiQuery(query): ApiQuery<CommentListQuery>,
) -> AppResult<Json<CommentsResponse>> {
    let params = query.resolve()?;
    ensure_review_exists(&state, review_id).await?;

    let comments = CommentRepo::list_by_review(&state.pool, review_id, &params).await?;
    Ok(Json(CommentsResponse { comments }))
}

/// POST /reviews/{review_id}/comments
///
/// An unknown review is reported before the payload is inspected. An
/// unknown username surfaces from the author foreign key.
pub async fn create_comment(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_review_exists(&state, review_id).await?;
    let new_comment = validate_new_comment(input.username, input.body)?;

    let comment = CommentRepo::create(&state.pool, review_id, &new_comment).await?;

    tracing::info!(
        review_id,
        comment_id = comment.comment_id,
        author = %comment.author,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(comment_id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !CommentRepo::delete(&state.pool, comment_id).await? {
        return Err(CoreError::not_found(Entity::Comment, comment_id).into());
    }

    tracing::info!(comment_id, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
