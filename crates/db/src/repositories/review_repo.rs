//! Repository for the `reviews` table.
//!
//! Every read joins `comments` to compute `comment_count`; a review with no
//! comments counts 0 through the `LEFT JOIN`.

use sqlx::PgPool;
use tabletop_core::review_query::ReviewListParams;
use tabletop_core::types::DbId;

use crate::models::review::{Review, ReviewListItem};

/// Columns shown in review listings (everything except the body).
const LIST_COLUMNS: &str = "reviews.review_id, reviews.title, reviews.designer, \
     reviews.owner, reviews.review_img_url, reviews.category, \
     reviews.created_at, reviews.votes";

/// Columns of a single review.
const COLUMNS: &str = "reviews.review_id, reviews.title, reviews.designer, \
     reviews.owner, reviews.review_img_url, reviews.review_body, \
     reviews.category, reviews.created_at, reviews.votes";

pub struct ReviewRepo;

impl ReviewRepo {
    /// List reviews with their comment counts, sorted and optionally
    /// filtered by category.
    ///
    /// Ties on the sort column are broken by `review_id` in the same
    /// direction, so the order is fully deterministic. Only the allow-listed
    /// fragments from [`ReviewListParams`] are spliced into the query; the
    /// category is bound.
    pub async fn list(
        pool: &PgPool,
        params: &ReviewListParams,
    ) -> Result<Vec<ReviewListItem>, sqlx::Error> {
        let where_clause = if params.category.is_some() {
            "WHERE reviews.category = $1"
        } else {
            ""
        };
        let sort_column = params.sort_by.as_sql();
        let direction = params.order.as_sql();

        let query = format!(
            "SELECT {LIST_COLUMNS}, COUNT(comments.comment_id) AS comment_count \
             FROM reviews \
             LEFT JOIN comments ON comments.review_id = reviews.review_id \
             {where_clause} \
             GROUP BY reviews.review_id \
             ORDER BY {sort_column} {direction}, reviews.review_id {direction}"
        );

        let mut q = sqlx::query_as::<_, ReviewListItem>(&query);
        if let Some(ref category) = params.category {
            q = q.bind(category);
        }
        q.fetch_all(pool).await
    }

    /// Find a review by ID, including its comment count.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(comments.comment_id) AS comment_count \
             FROM reviews \
             LEFT JOIN comments ON comments.review_id = reviews.review_id \
             WHERE reviews.review_id = $1 \
             GROUP BY reviews.review_id"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM reviews WHERE review_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Add `delta` to a review's votes and return the updated review.
    ///
    /// The increment is a single `votes = votes + $1` statement, so
    /// concurrent increments on the same row serialize in the database.
    /// Returns `None` when no review has this ID.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "WITH updated AS ( \
                UPDATE reviews SET votes = votes + $1 \
                WHERE review_id = $2 \
                RETURNING * \
             ) \
             SELECT {COLUMNS}, \
                (SELECT COUNT(*) FROM comments WHERE comments.review_id = reviews.review_id) \
                    AS comment_count \
             FROM updated AS reviews"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(delta)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
