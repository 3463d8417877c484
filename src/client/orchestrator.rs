//! HTTP client for the RCM orchestrator

use super::workflow::WorkflowUpload;
use super::{ResourceSource, WorkflowLauncher};
use crate::config::DashboardConfig;
use crate::core::error::FetchError;
use crate::core::payload::normalize_collection;
use crate::core::query::ListQuery;
use crate::core::resource::ResourceDescriptor;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::sync::Arc;

/// reqwest-backed orchestrator client
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct OrchestratorClient {
    http: reqwest::Client,
    config: Arc<DashboardConfig>,
}

impl OrchestratorClient {
    /// Build a client using the configured timeout
    pub fn new(config: Arc<DashboardConfig>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ResourceSource for OrchestratorClient {
    async fn fetch(
        &self,
        resource: &ResourceDescriptor,
        query: &ListQuery,
    ) -> Result<Vec<Value>, FetchError> {
        let url = self.config.endpoint(&resource.path);
        tracing::debug!(resource = %resource.name, %url, sort_by = %query.sort_by, "fetching from orchestrator");

        let request = self.http.get(&url).query(&query.to_pairs());
        let response = self.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Backend {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await?;
        let items = normalize_collection(payload, &resource.collection_key)?;
        tracing::debug!(resource = %resource.name, count = items.len(), "orchestrator returned records");
        Ok(items)
    }
}

#[async_trait]
impl WorkflowLauncher for OrchestratorClient {
    async fn launch(&self, upload: WorkflowUpload) -> Result<bool, FetchError> {
        let url = self.config.endpoint("/run");
        let workflow_type = upload.workflow_type;
        tracing::info!(%workflow_type, file = %upload.file_name, size = upload.bytes.len(), "submitting workflow run");

        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type {
            part = part
                .mime_str(&content_type)
                .map_err(|e| FetchError::Decode(format!("invalid content type: {}", e)))?;
        }
        let form = Form::new()
            .text("workflow_type", workflow_type.as_str())
            .part("file", part);

        let request = self.http.post(&url).multipart(form);
        let response = self.authorize(request).send().await?;

        let accepted = response.status().is_success();
        if !accepted {
            tracing::warn!(%workflow_type, status = %response.status(), "orchestrator rejected workflow run");
        }
        Ok(accepted)
    }
}
