use crate::impl_record;

impl_record!(
    /// Prior authorization obtained for a procedure
    PriorAuth,
    {
        id: i64 => ["id"],
        #[serde(default)]
        patient_id: Option<String> => ["patient_id", "patientId"],
        procedure_code: String => ["procedure_code", "procedureCode"],
        auth_number: String => ["auth_number", "authNumber"],
        #[serde(default)]
        status: Option<String> => ["status"],
        created_at: String => ["created_at", "createdAt"],
        updated_at: String => ["updated_at", "updatedAt"],
        workflow_run_id: String => ["workflow_run_id", "workflowRunId"],
    }
);

impl_record!(
    /// Insurance eligibility check; `eligible` doubles as its status column
    EligibilityCheck,
    {
        id: i64 => ["id"],
        #[serde(default)]
        patient_id: Option<String> => ["patient_id", "patientId"],
        insurance_id: String => ["insurance_id", "insuranceId"],
        plan: String => ["plan"],
        copay: String => ["copay"],
        #[serde(default)]
        eligible: Option<String> => ["eligible"],
        created_at: String => ["created_at", "createdAt"],
        updated_at: String => ["updated_at", "updatedAt"],
        workflow_run_id: String => ["workflow_run_id", "workflowRunId"],
    }
);
