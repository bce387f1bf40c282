//! Integration tests for request validation.
//!
//! These use a lazily-connected pool: every request here is rejected by
//! validation before any query runs, so no live database is required.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{body_json, get, send_json};
use serde_json::json;

fn lazy_app() -> Router {
    let pool = emr_db::create_lazy_pool("postgres://localhost/unreachable")
        .expect("lazy pool construction should not fail");
    common::build_test_app(pool)
}

// ---------------------------------------------------------------------------
// Pagination validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_page_size_returns_400() {
    let response = get(lazy_app(), "/api/v1/locations?pageSize=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn zero_page_number_returns_400() {
    let response = get(lazy_app(), "/api/v1/items?pageNumber=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn negative_page_number_returns_400() {
    let response = get(lazy_app(), "/api/v1/items?pageNumber=-3").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Sort validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_sort_order_returns_400() {
    let response = get(lazy_app(), "/api/v1/suppliers?sortField=name&sortOrder=sideways").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_sort_field_returns_400() {
    let response = get(lazy_app(), "/api/v1/suppliers?sortField=no_such_column").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Filter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_filters_json_returns_400() {
    let response = get(lazy_app(), "/api/v1/services?filters=not-json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_filter_operator_returns_400() {
    let filters = json!([
        {"PropertyName": "name", "Operator": "resembles", "Value": "x"}
    ])
    .to_string();
    let uri = format!(
        "/api/v1/services?filters={}",
        urlencode(&filters)
    );
    let response = get(lazy_app(), &uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_filter_field_returns_400() {
    let filters = json!([
        {"PropertyName": "no_such_column", "Operator": "eq", "Value": "x"}
    ])
    .to_string();
    let uri = format!(
        "/api/v1/services?filters={}",
        urlencode(&filters)
    );
    let response = get(lazy_app(), &uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn text_operator_on_numeric_field_returns_400() {
    let filters = json!([
        {"PropertyName": "price", "Operator": "contains", "Value": "9"}
    ])
    .to_string();
    let uri = format!(
        "/api/v1/services?filters={}",
        urlencode(&filters)
    );
    let response = get(lazy_app(), &uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Body and path validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_without_body_returns_400() {
    let app = lazy_app();
    let request = axum::http::Request::builder()
        .method(Method::PATCH)
        .uri("/api/v1/locations/00000000-0000-0000-0000-000000000001")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_uuid_path_id_returns_400() {
    let response = get(lazy_app(), "/api/v1/locations/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_missing_required_field_returns_422() {
    // Axum's Json extractor rejects deserialization failures with 422.
    let response = send_json(
        lazy_app(),
        Method::POST,
        "/api/v1/locations",
        json!({"description": "no name given"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Minimal percent-encoding for query string values in tests.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}
