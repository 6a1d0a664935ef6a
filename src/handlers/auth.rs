//! Stub login/registration endpoints.
//!
//! User management lives in a separate identity service; these routes exist
//! so the public surface is complete, nothing more.

use axum::response::IntoResponse;
use axum::Json;

pub async fn login() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "login successful" }))
}

pub async fn register() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "registration successful" }))
}
