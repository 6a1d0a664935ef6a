use crate::error::{AuthError, GatewayError};
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::handlers::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Authenticated subject attached to a request's extensions after the token
/// is verified. Scoped to that request only; never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: String,
    pub expires_at: i64,
}

/// Verifies bearer tokens against a shared HS256 secret.
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_lifetime: Duration,
}

impl JwtAuth {
    pub fn new(secret: &str, token_lifetime_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_lifetime: Duration::hours(token_lifetime_hours),
        }
    }

    /// Signs a token for `subject` with the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, GatewayError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.token_lifetime).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| GatewayError::Internal(format!("failed to sign token: {}", e)))
    }

    /// Verifies a credential and extracts the caller's identity.
    ///
    /// Failure reasons stay distinct so clients can tell an expired token
    /// from a forged one.
    pub fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(credential, &self.decoding_key, &validation).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredCredential,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedCredential,
            },
        )?;

        Ok(Identity {
            subject_id: data.claims.sub,
            expires_at: data.claims.exp,
        })
    }
}

/// Auth gate middleware for protected routes. Rejects before any dispatch
/// logic runs; on success the request carries an [`Identity`] extension.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let token = bearer_token(request.headers()).ok_or(AuthError::MissingCredential)?;
    let identity = state.auth.authenticate(&token)?;

    tracing::debug!(
        target: "api_gateway::auth",
        subject = %identity.subject_id,
        "request authenticated"
    );

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new("test-secret", 24)
    }

    #[test]
    fn issued_token_round_trips() {
        let auth = auth();
        let token = auth.issue("u1").unwrap();
        let identity = auth.authenticate(&token).unwrap();
        assert_eq!(identity.subject_id, "u1");
        assert!(identity.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = auth();
        let now = Utc::now();
        let claims = Claims {
            sub: "u1".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(auth.authenticate(&token), Err(AuthError::ExpiredCredential));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let auth = auth();
        let token = auth.issue("u1").unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let altered = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
        parts[2] = altered;
        let tampered = parts.join(".");

        assert_eq!(
            auth.authenticate(&tampered),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let other = JwtAuth::new("different-secret", 24);
        let token = other.issue("u1").unwrap();

        assert_eq!(
            auth().authenticate(&token),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn garbage_credential_is_malformed() {
        assert_eq!(
            auth().authenticate("not-a-token"),
            Err(AuthError::MalformedCredential)
        );
    }

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def.ghi"));

        let mut basic = HeaderMap::new();
        basic.insert(AUTHORIZATION, "Basic dXNlcg==".parse().unwrap());
        assert_eq!(bearer_token(&basic), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
