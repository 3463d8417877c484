//! ServerBuilder for fluent API to build the dashboard server

use super::handlers::DashboardState;
use super::router::build_router;
use crate::client::orchestrator::OrchestratorClient;
use crate::client::{ResourceSource, WorkflowLauncher};
use crate::config::DashboardConfig;
use crate::core::resource::ResourceCatalog;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the dashboard HTTP server
///
/// With only a config, both listing and workflow runs go to an
/// [`OrchestratorClient`]. Either side can be replaced.
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(DashboardConfig::load()?)
///     .serve("0.0.0.0:3000")
///     .await?;
/// ```
pub struct ServerBuilder {
    config: Option<Arc<DashboardConfig>>,
    source: Option<Arc<dyn ResourceSource>>,
    launcher: Option<Arc<dyn WorkflowLauncher>>,
    catalog: Option<ResourceCatalog>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            source: None,
            launcher: None,
            catalog: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// Use a custom source for `GET /api/{resource}`
    pub fn with_source(mut self, source: impl ResourceSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Use a custom launcher for `POST /api/run`
    pub fn with_launcher(mut self, launcher: impl WorkflowLauncher + 'static) -> Self {
        self.launcher = Some(Arc::new(launcher));
        self
    }

    /// Replace the built-in resource catalog
    pub fn with_catalog(mut self, catalog: ResourceCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Add routes that are merged next to the dashboard API
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Assemble the handler state, creating an orchestrator client if needed
    pub fn build_state(&mut self) -> Result<DashboardState> {
        let client = match (&self.source, &self.launcher) {
            (Some(_), Some(_)) => None,
            _ => {
                let config = self.config.clone().ok_or_else(|| {
                    anyhow::anyhow!(
                        "DashboardConfig is required unless both a source and a launcher are set. Call .with_config()"
                    )
                })?;
                config.validate()?;
                Some(Arc::new(OrchestratorClient::new(config)?))
            }
        };

        let source: Arc<dyn ResourceSource> = match (self.source.take(), &client) {
            (Some(source), _) => source,
            (None, Some(client)) => client.clone() as Arc<dyn ResourceSource>,
            (None, None) => anyhow::bail!("no resource source configured"),
        };
        let launcher: Arc<dyn WorkflowLauncher> = match (self.launcher.take(), &client) {
            (Some(launcher), _) => launcher,
            (None, Some(client)) => client.clone() as Arc<dyn WorkflowLauncher>,
            (None, None) => anyhow::bail!("no workflow launcher configured"),
        };

        Ok(DashboardState {
            source,
            launcher,
            catalog: Arc::new(self.catalog.take().unwrap_or_else(ResourceCatalog::builtin)),
        })
    }

    /// Build the final router with tracing and CORS layers
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = build_router(state);
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Stops on SIGTERM or Ctrl+C after in-flight requests finish.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Dashboard listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
