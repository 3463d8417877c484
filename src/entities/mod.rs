//! Typed records for the orchestrator's collections
//!
//! The list core works on any [`Record`](crate::core::record::Record),
//! including raw `serde_json::Value`. These types are for callers that want
//! named fields.

pub mod macros;

mod authorizations;
mod claims;
mod clinical;
mod workflows;

pub use authorizations::{EligibilityCheck, PriorAuth};
pub use claims::{Claim, ScrubbedClaim};
pub use clinical::{ClinicalDocument, CodedEncounter};
pub use workflows::WorkflowRun;
