use api_gateway::auth::JwtAuth;
use api_gateway::clients::BackendClients;
use api_gateway::config::Config;
use api_gateway::handlers::AppState;
use api_gateway::rate_limiter::RateLimiter;
use api_gateway::server::router;
use api_gateway::store::{CounterStore, MemoryStore};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use envconfig::Envconfig;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret";

/// Gateway wired against an in-memory counter store and lazily-connecting
/// backend channels. Nothing listens on the backend ports, so any dispatched
/// call surfaces as a backend fault.
fn test_app(rate_limit: u64) -> Router {
    let mut env = std::collections::HashMap::new();
    env.insert("RATE_LIMIT".to_string(), rate_limit.to_string());
    env.insert("JWT_SECRET".to_string(), TEST_SECRET.to_string());
    let config = Config::init_from_hashmap(&env).expect("test config");

    let store: Arc<dyn CounterStore> = Arc::new(MemoryStore::new());
    let limiter = RateLimiter::new(store.clone(), config.rate_limit, config.rate_limit_window_secs);
    let auth = JwtAuth::new(&config.jwt_secret, config.token_expiration_hours);
    let backends = BackendClients::connect_lazy("http://127.0.0.1:59151", "http://127.0.0.1:59152")
        .expect("lazy backends");

    router(Arc::new(AppState {
        config,
        limiter,
        auth,
        backends,
        store,
    }))
}

fn bearer(subject: &str) -> String {
    let token = JwtAuth::new(TEST_SECRET, 1).issue(subject).unwrap();
    format!("Bearer {}", token)
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn post_json(path: &str, auth: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public_and_carries_rate_limit_headers() {
    let app = test_app(10);
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-ratelimit-limit"], "10");
    assert_eq!(response.headers()["x-ratelimit-remaining"], "9");
    assert!(response.headers().contains_key("x-ratelimit-reset"));

    let body = body_json(response).await;
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn auth_stubs_are_public() {
    let app = test_app(10);
    let response = app
        .oneshot(post_json("/api/v1/auth/login", None, serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_route_rejects_missing_credential() {
    let app = test_app(10);
    let response = app
        .oneshot(post_json(
            "/api/v1/orders",
            None,
            serde_json::json!({"items": [], "delivery_address_id": "a", "delivery_time": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "missing_credential");
}

#[tokio::test]
async fn protected_route_rejects_garbage_credential() {
    let app = test_app(10);
    let response = app
        .oneshot(post_json(
            "/api/v1/orders",
            Some("Bearer not-a-token"),
            serde_json::json!({"items": [], "delivery_address_id": "a", "delivery_time": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "malformed_credential");
}

#[tokio::test]
async fn requests_past_the_limit_get_429_with_details() {
    let app = test_app(2);

    for _ in 0..2 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rejected = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(rejected.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = body_json(rejected).await;
    assert_eq!(body["error"], "rate_limit_exceeded");
    assert_eq!(body["limit"], 2);
    assert_eq!(body["remaining"], 0);
    assert!(body["reset"].as_u64().unwrap() <= 60);
}

#[tokio::test]
async fn remaining_header_counts_down() {
    let app = test_app(3);

    let first = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(first.headers()["x-ratelimit-remaining"], "2");

    let second = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(second.headers()["x-ratelimit-remaining"], "1");
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_any_backend_call() {
    let app = test_app(10);

    // The backends are unreachable, so reaching one would produce a 502;
    // a 422 here proves validation ran first.
    let response = app
        .oneshot(post_json(
            "/api/v1/orders",
            Some(&bearer("u1")),
            serde_json::json!({"items": [], "delivery_address_id": "a", "delivery_time": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn unknown_payment_method_is_rejected_before_dispatch() {
    let app = test_app(10);
    let response = app
        .oneshot(post_json(
            "/api/v1/payments",
            Some(&bearer("u1")),
            serde_json::json!({
                "order_id": "o-1",
                "amount": 9.99,
                "currency": "EUR",
                "payment_method": "carrier_pigeon"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn backend_fault_maps_to_bad_gateway() {
    let app = test_app(10);
    let response = app
        .oneshot(post_json(
            "/api/v1/orders",
            Some(&bearer("u1")),
            serde_json::json!({
                "items": [{"product_id": "p-1", "name": "Apples", "quantity": 1, "unit_price": 2.0}],
                "delivery_address_id": "addr-1",
                "delivery_time": 1_700_000_000
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "backend_error");
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = test_app(10);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer("u1"))
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn rate_limit_rejection_does_not_hit_auth() {
    // Exhausted window and no credential: the limiter answers first.
    let app = test_app(1);
    app.clone().oneshot(get("/health")).await.unwrap();

    let response = app
        .oneshot(post_json(
            "/api/v1/orders",
            None,
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
