//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT slug, description FROM categories ORDER BY slug ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether a category with this exact slug exists.
    pub async fn exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE slug = $1)")
            .bind(slug)
            .fetch_one(pool)
            .await
    }
}
