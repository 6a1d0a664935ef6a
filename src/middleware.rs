use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use std::net::SocketAddr;
use tracing::info;

use crate::error::GatewayError;
use crate::handlers::SharedState;

pub const HEADER_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const HEADER_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
pub const HEADER_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Admission-control middleware. Runs before the auth gate and the
/// dispatcher for every route, public or protected.
///
/// Admitted requests get `X-RateLimit-*` headers on the response; rejected
/// requests become a 429 carrying the same numbers in the body. A counter
/// store failure rejects with 503 rather than letting traffic through
/// unmetered.
pub async fn rate_limit(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let key = client_ip(&request);
    let now = Utc::now().timestamp();

    let decision = state.limiter.admit(&key, now).await?;

    if !decision.allowed {
        tracing::warn!(
            target: "api_gateway::rate_limiter",
            client_ip = %key,
            limit = decision.limit,
            "request rejected by rate limiter"
        );
        return Err(GatewayError::RateLimitExceeded {
            limit: decision.limit,
            reset_secs: decision.reset_secs,
        });
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(HEADER_LIMIT, HeaderValue::from(decision.limit));
    headers.insert(HEADER_REMAINING, HeaderValue::from(decision.remaining));
    headers.insert(HEADER_RESET, HeaderValue::from(decision.reset_secs));
    Ok(response)
}

/// Request/response log line with the derived client identity.
pub async fn request_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client_ip = client_ip(&request);

    let response = next.run(request).await;

    info!(
        target: "api_gateway::http",
        method = %method,
        uri = %uri,
        client_ip = %client_ip,
        status = %response.status(),
        "request completed"
    );

    response
}

/// Derives the rate-limit key from the client's network identity.
///
/// Proxy headers win over the socket address so that limits apply to the
/// original caller when the gateway sits behind a load balancer.
pub fn client_ip(request: &Request) -> String {
    if let Some(forwarded) = request.headers().get("x-forwarded-for") {
        if let Ok(forwarded_str) = forwarded.to_str() {
            if let Some(first_ip) = forwarded_str.split(',').next() {
                let trimmed = first_ip.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = request.headers().get("x-real-ip") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_header_takes_first_hop() {
        let mut request = Request::new(axum::body::Body::empty());
        request.headers_mut().insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );

        assert_eq!(client_ip(&request), "192.168.1.1");
    }

    #[test]
    fn real_ip_header_is_second_choice() {
        let mut request = Request::new(axum::body::Body::empty());
        request
            .headers_mut()
            .insert("x-real-ip", HeaderValue::from_static("203.0.113.1"));

        assert_eq!(client_ip(&request), "203.0.113.1");
    }

    #[test]
    fn connect_info_is_the_fallback() {
        let mut request = Request::new(axum::body::Body::empty());
        let addr: SocketAddr = "10.1.2.3:55555".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(client_ip(&request), "10.1.2.3");
    }

    #[test]
    fn unknown_when_nothing_identifies_the_client() {
        let request = Request::new(axum::body::Body::empty());
        assert_eq!(client_ip(&request), "unknown");
    }
}
