//! Handlers for reading reviews and voting on them.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tabletop_core::error::{CoreError, Entity};
use tabletop_core::types::DbId;
use tabletop_core::votes::parse_vote_delta;
use tabletop_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::extract::{ApiJsonOrDefault, ApiPath, ApiQuery};
use crate::query::ReviewListQuery;
use crate::response::{ReviewResponse, ReviewsResponse};
use crate::services;
use crate::state::AppState;

/// Body of `PATCH /reviews/{review_id}`.
///
/// `inc_votes` stays an untyped JSON value here so a non-numeric delta gets
/// its own error message instead of a generic decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVotesRequest {
    pub inc_votes: Option<serde_json::Value>,
}

/// GET /reviews?sort_by=&order=&category=
pub async fn list_reviews(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReviewListQuery>,
) -> AppResult<Json<ReviewsResponse>> {
    let params = query.resolve()?;
    let reviews = services::list_reviews(&state.pool, &params).await?;
    Ok(Json(ReviewsResponse { reviews }))
}

/// GET /reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
) -> AppResult<Json<ReviewResponse>> {
    let review = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Review, review_id))?;

    Ok(Json(ReviewResponse { review }))
}

/// PATCH /reviews/{review_id}
///
/// Adds `inc_votes` to the stored vote count. The delta is validated before
/// the store is touched; an absent delta, or no body at all, is a zero
/// increment.
pub async fn update_review_votes(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
    ApiJsonOrDefault(input): ApiJsonOrDefault<UpdateVotesRequest>,
) -> AppResult<Json<ReviewResponse>> {
    let delta = parse_vote_delta(input.inc_votes.as_ref())?;

    let review = ReviewRepo::increment_votes(&state.pool, review_id, delta)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Review, review_id))?;

    tracing::info!(review_id, delta, votes = review.votes, "Review votes updated");

    Ok(Json(ReviewResponse { review }))
}
