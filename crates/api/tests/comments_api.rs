//! HTTP-level integration tests for listing, posting and deleting comments.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /api/reviews/{review_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn lists_comments_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/3/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let comments = json["comments"].as_array().unwrap();
    let ids: Vec<i64> = comments
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 3, 2]);

    for comment in comments {
        assert_eq!(comment["review_id"], 3);
        assert!(comment["body"].is_string());
        assert!(comment["author"].is_string());
        assert!(comment["votes"].is_number());
        assert!(comment["created_at"].is_string());
    }
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn review_without_comments_returns_empty_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/1/comments").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["comments"], json!([]));
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn comments_of_missing_review_return_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/9999/comments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "ID not found");
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn comments_of_non_numeric_review_return_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/banana/comments").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Bad request");
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn comments_accept_allow_listed_sorting(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/reviews/2/comments?sort_by=votes&order=asc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 1, 4]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/2/comments?sort_by=body").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Cannot sort by this input"
    );
}

// ---------------------------------------------------------------------------
// POST /api/reviews/{review_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn posts_comment_and_updates_count(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"username": "dav3rid", "body": "So many sheep"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let comment = &body_json(response).await["comment"];
    assert_eq!(comment["comment_id"], 7);
    assert_eq!(comment["author"], "dav3rid");
    assert_eq!(comment["body"], "So many sheep");
    assert_eq!(comment["review_id"], 1);
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());

    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/1").await;
    assert_eq!(body_json(response).await["review"]["comment_count"], 1);
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn extra_fields_are_ignored(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"username": "dav3rid", "body": "Nice", "votes": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["comment"]["votes"], 0);
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn empty_payload_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/reviews/1/comments", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing required field"
    );
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn missing_body_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"username": "dav3rid"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing required field"
    );
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn unknown_username_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"username": "ghost", "body": "Boo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Invalid username");
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn posting_to_missing_review_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/9999/comments",
        json!({"username": "dav3rid", "body": "Hello?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "ID not found");
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn wrongly_typed_payload_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"username": 42, "body": ["not", "text"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Bad request");
}

// ---------------------------------------------------------------------------
// DELETE /api/comments/{comment_id}
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn deleting_twice_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Not a valid comment");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/2").await;
    assert_eq!(body_json(response).await["review"]["comment_count"], 2);
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("games"))
)]
async fn deleting_non_numeric_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/comments/banana").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Bad request");
}
