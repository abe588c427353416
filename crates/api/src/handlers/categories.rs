use axum::extract::State;
use axum::Json;
use tabletop_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::CategoriesResponse;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(CategoriesResponse { categories }))
}
