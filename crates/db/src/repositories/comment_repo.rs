//! Repository for the `comments` table.

use sqlx::PgPool;
use tabletop_core::comments::NewComment;
use tabletop_core::review_query::CommentListParams;
use tabletop_core::types::DbId;

use crate::models::comment::Comment;

const COLUMNS: &str = "comment_id, body, votes, author, review_id, created_at";

pub struct CommentRepo;

impl CommentRepo {
    /// List the comments of one review. Ties are broken by `comment_id`
    /// in the requested direction.
    pub async fn list_by_review(
        pool: &PgPool,
        review_id: DbId,
        params: &CommentListParams,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let sort_column = params.sort_by.as_sql();
        let direction = params.order.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM comments \
             WHERE review_id = $1 \
             ORDER BY {sort_column} {direction}, comment_id {direction}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(review_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a comment, returning the stored row with its generated ID and
    /// timestamp. An unknown author or review fails on the foreign key.
    pub async fn create(
        pool: &PgPool,
        review_id: DbId,
        input: &NewComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (author, body, review_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.username)
            .bind(&input.body)
            .bind(review_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
