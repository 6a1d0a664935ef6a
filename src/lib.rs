pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proto;
pub mod rate_limiter;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::{AuthError, GatewayError};
pub use rate_limiter::{RateDecision, RateLimiter};
pub use server::Server;
