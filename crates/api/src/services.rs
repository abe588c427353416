//! Orchestration that spans more than one repository.

use sqlx::PgPool;
use tabletop_core::error::CoreError;
use tabletop_core::messages;
use tabletop_core::review_query::ReviewListParams;
use tabletop_db::models::review::ReviewListItem;
use tabletop_db::repositories::{CategoryRepo, ReviewRepo};

use crate::error::AppResult;

/// List reviews, telling an unknown category apart from an empty one.
///
/// The existence check only runs when a category filter produced no rows,
/// so the common path is a single query.
pub async fn list_reviews(
    pool: &PgPool,
    params: &ReviewListParams,
) -> AppResult<Vec<ReviewListItem>> {
    let reviews = ReviewRepo::list(pool, params).await?;

    if reviews.is_empty() {
        if let Some(ref category) = params.category {
            if !CategoryRepo::exists(pool, category).await? {
                return Err(CoreError::UnknownFilterValue(messages::UNKNOWN_CATEGORY).into());
            }
        }
    }

    Ok(reviews)
}
