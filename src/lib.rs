//! # RCM Dashboard
//!
//! Backend for a revenue-cycle-management dashboard: list view-models over the
//! orchestrator's collections and an HTTP proxy serving them to the tables.
//!
//! ## Features
//!
//! - **Generic list view-model**: fetch, filter by status, sort, loading/error state
//! - **Stale-result protection**: only the most recent request may update a view
//! - **Typed or opaque records**: `impl_record!` structs or raw `serde_json::Value`
//! - **Resource catalog**: claims, clinical documents, coded encounters, prior
//!   auths, scrubbed claims, workflows, eligibility checks
//! - **Proxy server**: `GET /api/{resource}` and multipart `POST /api/run`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rcm_dashboard::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(DashboardConfig::load()?);
//! let client = Arc::new(OrchestratorClient::new(config)?);
//! let claims = ResourceCatalog::builtin().get("claims").cloned().unwrap();
//!
//! let view: ListViewModel<Claim> = ListViewModel::for_resource(client, claims);
//! view.refresh().await;
//! view.set_sort_field("amount").await;
//! view.set_status_filter("pending").await;
//!
//! for claim in view.items() {
//!     println!("{} {}", claim.claim_number, claim.amount);
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Arrangement, DashboardError, FetchError, FieldValue, ListQuery,
        ListQueryParams, ListResponse, Record, ResourceCatalog, ResourceDescriptor,
        SortDirection, StatusFilter, ToFieldValue,
    };

    // === Records ===
    pub use crate::entities::{
        Claim, ClinicalDocument, CodedEncounter, EligibilityCheck, PriorAuth, ScrubbedClaim,
        WorkflowRun,
    };
    pub use crate::impl_record;

    // === Orchestrator client ===
    pub use crate::client::{
        ResourceSource, WorkflowLauncher,
        orchestrator::OrchestratorClient,
        workflow::{WorkflowType, WorkflowUpload},
    };

    // === View ===
    pub use crate::view::{ListFields, ListViewModel, RefreshTicket, ViewState};

    // === Server ===
    pub use crate::config::DashboardConfig;
    pub use crate::server::{DashboardState, ServerBuilder, build_router};

    // === Re-exports from dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
    pub use std::sync::Arc;
}
