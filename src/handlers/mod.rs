pub mod auth;
pub mod orders;
pub mod payments;

use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::JwtAuth;
use crate::clients::BackendClients;
use crate::config::Config;
use crate::rate_limiter::RateLimiter;
use crate::store::CounterStore;

/// Process-wide state shared by every request handler.
///
/// Everything here is either immutable after startup or safe for concurrent
/// use by contract (the counter store and the backend channels). Creation and
/// destruction belong to the server lifecycle; handlers only borrow.
pub struct AppState {
    pub config: Config,
    pub limiter: RateLimiter,
    pub auth: JwtAuth,
    pub backends: BackendClients,
    pub store: Arc<dyn CounterStore>,
}

pub type SharedState = Arc<AppState>;

/// Pagination parameters accepted by list endpoints.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

impl PageQuery {
    pub fn page(&self) -> i32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i32 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }
}

/// Liveness endpoint; public and unauthenticated.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "up",
        "time": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults_and_bounds() {
        let query = PageQuery { page: None, limit: None };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);

        let wild = PageQuery { page: Some(-3), limit: Some(10_000) };
        assert_eq!(wild.page(), 1);
        assert_eq!(wild.limit(), 100);
    }
}
