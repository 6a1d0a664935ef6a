use envconfig::Envconfig;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Envconfig, Clone)]
pub struct Config {
    /// Server bind address
    #[envconfig(from = "BIND_ADDR", default = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Order service gRPC endpoint
    #[envconfig(from = "ORDER_SERVICE_URL", default = "http://127.0.0.1:50051")]
    pub order_service_url: String,

    /// Payment service gRPC endpoint
    #[envconfig(from = "PAYMENT_SERVICE_URL", default = "http://127.0.0.1:50052")]
    pub payment_service_url: String,

    /// Redis connection URL for rate-limit counters
    #[envconfig(from = "REDIS_URL", default = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Secret used to sign and verify bearer tokens
    #[envconfig(from = "JWT_SECRET", default = "change-me")]
    pub jwt_secret: String,

    /// Lifetime of issued tokens in hours
    #[envconfig(from = "TOKEN_EXPIRATION_HOURS", default = "24")]
    pub token_expiration_hours: i64,

    /// Requests admitted per client per window
    #[envconfig(from = "RATE_LIMIT", default = "60")]
    pub rate_limit: u64,

    /// Sliding window width in seconds
    #[envconfig(from = "RATE_LIMIT_WINDOW_SECS", default = "60")]
    pub rate_limit_window_secs: u64,

    /// Backend dial timeout in seconds
    #[envconfig(from = "DIAL_TIMEOUT_SECS", default = "5")]
    pub dial_timeout_secs: u64,

    /// Bound on the graceful-shutdown drain in seconds
    #[envconfig(from = "SHUTDOWN_TIMEOUT_SECS", default = "30")]
    pub shutdown_timeout_secs: u64,

    /// Default log level when RUST_LOG is unset
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, envconfig::Error> {
        Config::init_from_env()
    }

    pub fn dial_timeout(&self) -> Duration {
        Duration::from_secs(self.dial_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let config = Config::init_from_hashmap(&std::collections::HashMap::new()).unwrap();
        assert_eq!(config.rate_limit, 60);
        assert_eq!(config.rate_limit_window_secs, 60);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn env_overrides_defaults() {
        let mut env = std::collections::HashMap::new();
        env.insert("RATE_LIMIT".to_string(), "5".to_string());
        env.insert("JWT_SECRET".to_string(), "s3cret".to_string());
        let config = Config::init_from_hashmap(&env).unwrap();
        assert_eq!(config.rate_limit, 5);
        assert_eq!(config.jwt_secret, "s3cret");
    }
}
