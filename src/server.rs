use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{require_auth, JwtAuth};
use crate::clients::BackendClients;
use crate::config::Config;
use crate::error::GatewayError;
use crate::handlers::{self, orders, payments, AppState, SharedState};
use crate::middleware::{rate_limit, request_log};
use crate::rate_limiter::RateLimiter;
use crate::store::{CounterStore, RedisStore};

/// Owns startup and shutdown: dial backends, bind the listener, serve,
/// drain on a termination signal, then close connections in order.
pub struct Server {
    state: SharedState,
    config: Config,
}

impl Server {
    /// Starting phase. An unreachable backend or counter store aborts here;
    /// the gateway never serves with a missing dependency.
    pub async fn new(config: Config) -> Result<Self, GatewayError> {
        let store = Arc::new(RedisStore::connect(&config.redis_url).await?);
        store.ping().await?;

        let backends = BackendClients::connect(&config).await?;
        let store: Arc<dyn CounterStore> = store;
        let limiter = RateLimiter::new(
            store.clone(),
            config.rate_limit,
            config.rate_limit_window_secs,
        );
        let auth = JwtAuth::new(&config.jwt_secret, config.token_expiration_hours);

        let state = Arc::new(AppState {
            config: config.clone(),
            limiter,
            auth,
            backends,
            store,
        });

        Ok(Self { state, config })
    }

    /// Serving phase, then signal-driven drain and close. Returns after the
    /// whole shutdown sequence so the process can exit zero.
    pub async fn run(self) -> Result<(), GatewayError> {
        let app = router(self.state.clone());
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                GatewayError::Internal(format!("failed to bind {}: {}", self.config.bind_addr, e))
            })?;

        tracing::info!(addr = %self.config.bind_addr, "gateway serving");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let serve_task = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
        });

        shutdown_signal().await;
        tracing::info!("termination signal received, draining in-flight requests");
        let _ = shutdown_tx.send(());

        // Draining phase: bounded. Past the bound we proceed regardless of
        // remaining in-flight work.
        match tokio::time::timeout(self.config.shutdown_timeout(), serve_task).await {
            Ok(Ok(Ok(()))) => tracing::info!("drain complete"),
            Ok(Ok(Err(e))) => tracing::error!(error = %e, "server error during drain"),
            Ok(Err(e)) => tracing::error!(error = %e, "server task failed"),
            Err(_) => tracing::warn!("drain timed out, forcing shutdown"),
        }

        self.close().await;
        Ok(())
    }

    /// Closed phase: backend connections first, then the counter store.
    /// Every close is attempted; failures are logged, not propagated.
    async fn close(self) {
        match Arc::try_unwrap(self.state) {
            Ok(state) => close_components(state.backends, state.store).await,
            Err(state) => {
                // Requests outlived the drain bound and still hold the
                // state; channels close when the last reference drops.
                if let Err(e) = state.store.close().await {
                    tracing::error!(error = %e, "counter store close failed");
                }
                tracing::warn!("state still shared after drain, closing on final drop");
            }
        }
        tracing::info!("gateway shut down");
    }
}

pub(crate) async fn close_components(backends: BackendClients, store: Arc<dyn CounterStore>) {
    backends.close();
    if let Err(e) = store.close().await {
        tracing::error!(error = %e, "counter store close failed");
    }
}

/// Builds the full route table. The public/protected partition is fixed
/// here, at startup; nothing mutates it afterwards.
pub fn router(state: SharedState) -> Router {
    let public = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register));

    let protected = Router::new()
        .route("/orders", post(orders::create_order))
        .route("/orders/delivery-slots", get(orders::delivery_slots))
        .route("/orders/:id", get(orders::get_order))
        .route("/orders/:id/status", put(orders::update_order_status))
        .route(
            "/addresses",
            post(orders::add_address).get(orders::list_addresses),
        )
        .route("/payments", post(payments::initiate_payment))
        .route("/payments/credit-card", post(payments::credit_card_payment))
        .route(
            "/payments/metamask/initiate",
            post(payments::metamask_initiate),
        )
        .route(
            "/payments/metamask/confirm",
            post(payments::metamask_confirm),
        )
        .route("/payments/pending", get(payments::pending_payments))
        .route("/payments/order/:order_id", get(payments::payments_by_order))
        .route("/payments/:id", get(payments::get_payment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", public.merge(protected))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_log))
                .layer(middleware::from_fn_with_state(state.clone(), rate_limit)),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C");
        },
        _ = terminate => {
            tracing::info!("received terminate signal");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore {
        closes: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CounterStore for CountingStore {
        async fn prune(&self, _: &str, _: i64) -> Result<(), GatewayError> {
            Ok(())
        }
        async fn count(&self, _: &str, _: i64, _: i64) -> Result<u64, GatewayError> {
            Ok(0)
        }
        async fn record(&self, _: &str, _: i64, _: &str) -> Result<(), GatewayError> {
            Ok(())
        }
        async fn expire(&self, _: &str, _: i64) -> Result<(), GatewayError> {
            Ok(())
        }
        async fn close(&self) -> Result<(), GatewayError> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(GatewayError::Internal("close failed".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn close_sequence_attempts_every_close() {
        let store = Arc::new(CountingStore { closes: AtomicUsize::new(0), fail: false });
        let backends =
            BackendClients::connect_lazy("http://127.0.0.1:50051", "http://127.0.0.1:50052")
                .unwrap();

        close_components(backends, store.clone()).await;
        assert_eq!(store.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_close_failure_does_not_propagate() {
        let store = Arc::new(CountingStore { closes: AtomicUsize::new(0), fail: true });
        let backends =
            BackendClients::connect_lazy("http://127.0.0.1:50051", "http://127.0.0.1:50052")
                .unwrap();

        // Must not panic or short-circuit; the failure is logged only.
        close_components(backends, store.clone()).await;
        assert_eq!(store.closes.load(Ordering::SeqCst), 1);
    }
}
