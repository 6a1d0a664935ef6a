use anyhow::Result;
use api_gateway::config::Config;
use api_gateway::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("api_gateway={},tower_http=debug", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting api-gateway");
    tracing::info!(
        bind_addr = %config.bind_addr,
        order_service = %config.order_service_url,
        payment_service = %config.payment_service_url,
        "configuration loaded"
    );

    // Startup dial failures are fatal: the process must not serve with an
    // unreachable backend, and exits non-zero here.
    let server = Server::new(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
