//! Request handlers for the dashboard API

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::client::workflow::{WorkflowType, WorkflowUpload};
use crate::client::{ResourceSource, WorkflowLauncher};
use crate::core::error::{DashboardError, RequestError};
use crate::core::query::{ListQueryParams, ListResponse};
use crate::core::resource::ResourceCatalog;

/// State shared across handlers
#[derive(Clone)]
pub struct DashboardState {
    pub source: Arc<dyn ResourceSource>,
    pub launcher: Arc<dyn WorkflowLauncher>,
    pub catalog: Arc<ResourceCatalog>,
}

/// `GET /api/{resource}`
///
/// The query is forwarded to the orchestrator, and the result is arranged
/// again locally before it is returned.
pub async fn list_resource(
    State(state): State<DashboardState>,
    Path(name): Path<String>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Value>, DashboardError> {
    let resource = state
        .catalog
        .get(&name)
        .ok_or_else(|| RequestError::UnknownResource { name: name.clone() })?;

    let query = params.resolve(&resource.default_sort_field);
    let items = state
        .source
        .fetch(resource, &query)
        .await
        .map_err(|cause| DashboardError::fetch(&resource.label, cause))?;

    let items = resource.arrangement(&query).apply(items);
    let response = ListResponse::new(&resource.collection_key, items);
    tracing::debug!(resource = %name, total = response.total(), "listed resource");

    Ok(Json(response.into_json()))
}

/// `POST /api/run`
///
/// Expects a `file` part and an optional `workflow_type` part (defaults to
/// `full`). The workflow type is checked before anything is sent upstream.
pub async fn run_workflow(
    State(state): State<DashboardState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, DashboardError> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut workflow_type = WorkflowType::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(invalid_upload)?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            "workflow_type" => {
                let raw = field.text().await.map_err(invalid_upload)?;
                workflow_type = raw.trim().parse()?;
            }
            other => {
                tracing::debug!(field = %other, "ignoring unexpected multipart field");
            }
        }
    }

    let (file_name, content_type, bytes) = file.ok_or_else(|| RequestError::InvalidUpload {
        message: "missing 'file' field".to_string(),
    })?;

    let mut upload = WorkflowUpload::new(file_name, bytes, workflow_type);
    if let Some(content_type) = content_type {
        upload = upload.with_content_type(content_type);
    }

    let success = state
        .launcher
        .launch(upload)
        .await
        .map_err(|cause| {
            tracing::warn!(%workflow_type, error = %cause, "workflow launch failed");
            DashboardError::Launch(cause)
        })?;

    Ok(Json(json!({
        "success": success,
        "workflowType": workflow_type.as_str(),
        "steps": workflow_type.steps(),
    })))
}

fn invalid_upload(err: axum::extract::multipart::MultipartError) -> RequestError {
    RequestError::InvalidUpload {
        message: err.body_text(),
    }
}
