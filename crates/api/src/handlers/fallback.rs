use crate::error::AppError;

/// Catch-all for unregistered paths and unsupported methods.
pub async fn path_not_found() -> AppError {
    AppError::PathNotFound
}
