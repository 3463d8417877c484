use crate::impl_record;

impl_record!(
    /// Document produced by the clinical-documentation agent
    ClinicalDocument,
    {
        id: i64 => ["id"],
        #[serde(default)]
        patient_id: Option<String> => ["patient_id", "patientId"],
        document_type: String => ["document_type", "documentType"],
        content: String => ["content"],
        #[serde(default)]
        status: Option<String> => ["status"],
        created_at: String => ["created_at", "createdAt"],
        updated_at: String => ["updated_at", "updatedAt"],
        workflow_run_id: String => ["workflow_run_id", "workflowRunId"],
    }
);

impl_record!(
    /// Encounter after medical coding
    CodedEncounter,
    {
        id: i64 => ["id"],
        #[serde(default)]
        patient_id: Option<String> => ["patient_id", "patientId"],
        #[serde(default)]
        encounter_type: Option<String> => ["encounter_type", "encounterType", "type"],
        #[serde(default)]
        content: Option<String> => ["content"],
        #[serde(default)]
        status: Option<String> => ["status"],
        created_at: String => ["created_at", "createdAt"],
        updated_at: String => ["updated_at", "updatedAt"],
        workflow_run_id: String => ["workflow_run_id", "workflowRunId"],
    }
);
