//! HTTP-level tests for the lock endpoint
//!
//! Exercises the acquire, deny, release flow against an in-memory store,
//! plus the plain text rejections for missing and malformed parameters.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};

use lockd_core::{LockService, MemoryLockStore};
use lockd_server::{
    api, console,
    model::{AppState, Configuration},
};

/// Create a test app backed by an in-memory lock store
async fn create_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let app_state = Arc::new(AppState {
        configuration: Configuration::default(),
        lock_service: Arc::new(LockService::new(Arc::new(MemoryLockStore::new()))),
    });

    test::init_service(
        App::new()
            .app_data(web::Data::from(app_state))
            .service(api::v1::lock::routes())
            .service(console::health::routes()),
    )
    .await
}

// ============================================================================
// Lock lifecycle tests
// ============================================================================

#[actix_web::test]
async fn test_acquire_deny_release_cycle() {
    let app = create_test_app().await;

    // worker-a takes the lock for five seconds
    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-a&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["owner"], "worker-a");
    let token = body["lock"]["lock_time"].as_i64().unwrap();
    let modified = body["lock"]["modified_time"].as_i64().unwrap();
    assert_eq!(token - modified, 5_000_000_000);

    // worker-b is denied and sees the current holder
    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-b&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], false);
    assert_eq!(body["lock"]["owner"], "worker-a");
    assert_eq!(body["lock"]["lock_time"].as_i64().unwrap(), token);

    // worker-a releases with the token from the grant
    let req = test::TestRequest::get()
        .uri(&format!(
            "/v1/lock?key=jobs/nightly&owner=worker-a&unlock={}",
            token
        ))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["lock_time"], 0);

    // worker-b can take it now
    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-b&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["owner"], "worker-b");
}

#[actix_web::test]
async fn test_stale_token_does_not_release() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/import&owner=worker-a&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let token = body["lock"]["lock_time"].as_i64().unwrap();

    // A token from some other grant must not open the row
    let req = test::TestRequest::get()
        .uri(&format!(
            "/v1/lock?key=jobs/import&owner=worker-b&unlock={}",
            token + 1
        ))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], false);
    assert_eq!(body["lock"]["owner"], "worker-a");
}

#[actix_web::test]
async fn test_unlock_takes_precedence_over_duration() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/export&owner=worker-a&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let token = body["lock"]["lock_time"].as_i64().unwrap();

    // The duration rides along but the token decides: this is a release
    let req = test::TestRequest::get()
        .uri(&format!(
            "/v1/lock?key=jobs/export&owner=worker-a&duration=9&unlock={}",
            token
        ))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["lock_time"], 0);
}

#[actix_web::test]
async fn test_zero_duration_grant_leaves_lock_open() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/probe&owner=worker-a&duration=0")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["lock_time"], 0);

    // Another owner can take the same key right away
    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/probe&owner=worker-b&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["owner"], "worker-b");
}

#[actix_web::test]
async fn test_expired_lock_can_be_taken_over() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/rotate&owner=worker-a&duration=0.05")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);

    tokio::time::sleep(std::time::Duration::from_millis(80)).await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/rotate&owner=worker-b&duration=5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["owner"], "worker-b");
}

#[actix_web::test]
async fn test_post_form_acquires() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/lock")
        .set_form([
            ("key", "jobs/backup"),
            ("owner", "worker-a"),
            ("duration", "2"),
        ])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["acquired"], true);
    assert_eq!(body["lock"]["owner"], "worker-a");
}

// ============================================================================
// Parameter validation tests
// ============================================================================

#[actix_web::test]
async fn test_missing_key_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?owner=worker-a&duration=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "key is missing.");
}

#[actix_web::test]
async fn test_missing_owner_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&duration=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "owner is missing.");
}

#[actix_web::test]
async fn test_missing_duration_is_rejected() {
    let app = create_test_app().await;

    // Neither a duration nor an unlock token
    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-a")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "duration is missing.");
}

#[actix_web::test]
async fn test_empty_values_count_as_missing() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=&owner=worker-a&duration=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "key is missing.");

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-a&duration=&unlock=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "duration is missing.");
}

#[actix_web::test]
async fn test_malformed_duration_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-a&duration=soon")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with("Failed to convert duration:"));
}

#[actix_web::test]
async fn test_malformed_unlock_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-a&unlock=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with("Failed to convert unlock:"));
}

#[actix_web::test]
async fn test_zero_unlock_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/v1/lock?key=jobs/nightly&owner=worker-a&unlock=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "unlock must not be 0.");
}

// ============================================================================
// Health endpoint tests
// ============================================================================

#[actix_web::test]
async fn test_health_endpoints() {
    let app = create_test_app().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["store"]["status"], "UP");

    let body: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/health/liveness").to_request(),
    )
    .await;
    assert_eq!(body["data"], "ok");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/readiness").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
