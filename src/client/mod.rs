//! Orchestrator collaborators
//!
//! The dashboard never owns records. It reads them from the orchestrator
//! through [`ResourceSource`] and starts pipeline runs through
//! [`WorkflowLauncher`]. [`OrchestratorClient`] implements both over HTTP;
//! tests substitute in-process fakes.

pub mod orchestrator;
pub mod workflow;

pub use orchestrator::OrchestratorClient;
pub use workflow::{WorkflowType, WorkflowUpload};

use crate::core::error::FetchError;
use crate::core::query::ListQuery;
use crate::core::resource::ResourceDescriptor;
use async_trait::async_trait;
use serde_json::Value;

/// Source of list payloads for a resource
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Fetch the records of `resource`, normalised to a plain array
    ///
    /// The query is forwarded so the backend may filter and sort; callers
    /// must not assume it did.
    async fn fetch(
        &self,
        resource: &ResourceDescriptor,
        query: &ListQuery,
    ) -> Result<Vec<Value>, FetchError>;
}

/// Starts orchestrator pipeline runs from an uploaded document
#[async_trait]
pub trait WorkflowLauncher: Send + Sync {
    /// Submit the upload; `Ok(false)` when the orchestrator answered non-2xx
    async fn launch(&self, upload: WorkflowUpload) -> Result<bool, FetchError>;
}
