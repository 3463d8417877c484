use rcm_dashboard::config::DashboardConfig;
use rcm_dashboard::server::ServerBuilder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rcm_dashboard=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::load()?;
    let addr = config.bind_addr.clone();
    tracing::info!(backend = %config.backend_url, "Starting RCM dashboard on {}", addr);

    ServerBuilder::new().with_config(config).serve(&addr).await
}
