use axum::extract::State;
use axum::Json;
use tabletop_core::error::{CoreError, Entity};
use tabletop_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::response::{UserResponse, UsersResponse};
use crate::state::AppState;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersResponse>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::User, &username))?;

    Ok(Json(UserResponse { user }))
}
