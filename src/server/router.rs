//! Route table for the dashboard API

use super::handlers::{DashboardState, list_resource, run_workflow};
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use serde_json::{Value, json};

/// Largest accepted workflow upload
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the dashboard routes
///
/// - `GET /health`, `GET /healthz`
/// - `GET /api/{resource}`
/// - `POST /api/run`
pub fn build_router(state: DashboardState) -> Router {
    let api = Router::new()
        .route(
            "/api/run",
            post(run_workflow).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/{resource}", get(list_resource))
        .with_state(state);

    health_routes().merge(api)
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "rcm-dashboard"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::workflow::WorkflowUpload;
    use crate::client::{ResourceSource, WorkflowLauncher};
    use crate::core::error::FetchError;
    use crate::core::query::ListQuery;
    use crate::core::resource::{ResourceCatalog, ResourceDescriptor};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Unreachable;

    #[async_trait]
    impl ResourceSource for Unreachable {
        async fn fetch(
            &self,
            _resource: &ResourceDescriptor,
            _query: &ListQuery,
        ) -> Result<Vec<Value>, FetchError> {
            Err(FetchError::Network("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl WorkflowLauncher for Unreachable {
        async fn launch(&self, _upload: WorkflowUpload) -> Result<bool, FetchError> {
            Err(FetchError::Network("connection refused".to_string()))
        }
    }

    fn router() -> Router {
        build_router(DashboardState {
            source: Arc::new(Unreachable),
            launcher: Arc::new(Unreachable),
            catalog: Arc::new(ResourceCatalog::builtin()),
        })
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_routes() {
        assert_eq!(status_of("GET", "/health").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/healthz").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_run_is_post_only() {
        assert_eq!(
            status_of("GET", "/api/run").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn test_listing_is_get_only() {
        assert_eq!(
            status_of("DELETE", "/api/claims").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_500() {
        assert_eq!(
            status_of("GET", "/api/claims").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
