use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sqlx::postgres::PgDatabaseError;
use tabletop_core::error::{CoreError, Entity};
use tabletop_core::messages;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{"message": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tabletop_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be decoded. The detail is only logged.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A dependency the request needs (the database) is unreachable.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// No route matches the request path and method.
    #[error("Path not found")]
    PathNotFound,

    /// An internal error. The detail is only logged.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(core) => core_response(&core),
            AppError::Database(err) => core_response(&classify_sqlx_error(&err)),
            AppError::BadRequest(detail) => {
                tracing::debug!(%detail, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", messages::BAD_REQUEST)
            }
            AppError::ServiceUnavailable(detail) => {
                tracing::warn!(%detail, "Service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    messages::SERVICE_UNAVAILABLE,
                )
            }
            AppError::PathNotFound => (
                StatusCode::NOT_FOUND,
                "PATH_NOT_FOUND",
                messages::PATH_NOT_FOUND,
            ),
            AppError::InternalError(msg) => core_response(&CoreError::Internal(msg)),
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error onto a status, error code and public message.
fn core_response(err: &CoreError) -> (StatusCode, &'static str, &'static str) {
    let (status, code) = match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        CoreError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
        CoreError::InvalidReference(_) => (StatusCode::NOT_FOUND, "INVALID_REFERENCE"),
        CoreError::UnknownFilterValue(_) => (StatusCode::NOT_FOUND, "UNKNOWN_FILTER_VALUE"),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };
    (status, code, err.public_message())
}

/// Classify a sqlx error into the domain taxonomy.
///
/// - `RowNotFound` is a missing review.
/// - `22P02` (invalid text representation) is malformed input.
/// - `22003` (numeric value out of range) is a vote total that left `i32`.
/// - `23503` (foreign key violation) depends on the constraint: an unknown
///   comment author is an invalid username, a vanished review is not found.
/// - `23502` (not-null violation) is a missing field, named after the
///   request field that feeds the column.
/// - Everything else is internal.
fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::RowNotFound => CoreError::not_found(Entity::Review, "unknown"),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("22P02") => CoreError::InvalidInput(messages::BAD_REQUEST),
            Some("22003") => CoreError::InvalidInput(messages::VOTES_OUT_OF_RANGE),
            Some("23503") => match db_err.constraint() {
                Some("fk_comments_author") => {
                    CoreError::InvalidReference(messages::INVALID_USERNAME)
                }
                Some("fk_comments_review") => CoreError::not_found(Entity::Review, "unknown"),
                _ => CoreError::InvalidReference(messages::INVALID_REFERENCE),
            },
            Some("23502") => {
                let column = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(PgDatabaseError::column);
                CoreError::MissingField(request_field_for_column(column))
            }
            _ => CoreError::Internal(format!("Database error: {db_err}")),
        },
        other => CoreError::Internal(format!("Database error: {other}")),
    }
}

/// Request field name for a NOT NULL column of a writable table.
fn request_field_for_column(column: Option<&str>) -> &'static str {
    match column {
        Some("body") => "body",
        Some("author") => "username",
        Some("review_id") => "review_id",
        _ => UNKNOWN_FIELD,
    }
}

const UNKNOWN_FIELD: &str = "unknown";

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(inner) => {
                tracing::debug!(detail = %inner.body_text(), "Rejected path parameter");
                AppError::Core(CoreError::InvalidInput(messages::BAD_REQUEST))
            }
            other => AppError::InternalError(other.body_text()),
        }
    }
}
