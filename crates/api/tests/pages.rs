//! Integration tests for the server-rendered HTML pages.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_text, build_test_app, create_mission, create_ninja, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_index_is_html(pool: PgPool) {
    let response = get(build_test_app(pool), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(body_text(response).await.contains("Shinobi Mission Registry"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reports_list_records(pool: PgPool) {
    create_ninja(&pool, json!({"name": "Naruto", "rank": "Genin", "village": "Konoha"})).await;
    create_mission(&pool, "Rescue Cat", "D", 50.0).await;

    let response = get(build_test_app(pool), "/reports").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<td>Naruto</td>"));
    assert!(html.contains("<td>Konoha</td>"));
    assert!(html.contains("<td>Rescue Cat</td>"));
    assert!(html.contains("<td>50.0</td>"));
    assert!(html.contains("No assignments yet."));
}
