//! Workflow run requests

use crate::core::error::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline variants the orchestrator accepts on `/run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowType {
    EligibilityOnly,
    ClinicalDocOnly,
    PriorAuthOnly,
    PreAuthClinicalDoc,
    #[default]
    Full,
}

impl WorkflowType {
    pub const ALL: [WorkflowType; 5] = [
        WorkflowType::EligibilityOnly,
        WorkflowType::ClinicalDocOnly,
        WorkflowType::PriorAuthOnly,
        WorkflowType::PreAuthClinicalDoc,
        WorkflowType::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::EligibilityOnly => "eligibility_only",
            WorkflowType::ClinicalDocOnly => "clinical_doc_only",
            WorkflowType::PriorAuthOnly => "prior_auth_only",
            WorkflowType::PreAuthClinicalDoc => "pre_auth_clinical_doc",
            WorkflowType::Full => "full",
        }
    }

    /// Agent steps the orchestrator runs for this variant, in order
    pub fn steps(&self) -> &'static [&'static str] {
        match self {
            WorkflowType::EligibilityOnly => &["eligibility"],
            WorkflowType::ClinicalDocOnly => &["clinical_doc"],
            WorkflowType::PriorAuthOnly => &["prior_auth"],
            WorkflowType::PreAuthClinicalDoc => &["eligibility", "prior_auth", "clinical_doc"],
            WorkflowType::Full => &[
                "eligibility",
                "prior_auth",
                "clinical_doc",
                "medical_coding",
                "claim_scrubbing",
                "claim_submission",
            ],
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkflowType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RequestError::InvalidWorkflowType {
                value: s.to_string(),
            })
    }
}

/// A document to run through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    pub workflow_type: WorkflowType,
}

impl WorkflowUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, workflow_type: WorkflowType) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
            workflow_type,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
