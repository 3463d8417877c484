use crate::impl_record;

impl_record!(
    /// A submitted claim as listed on the claims table
    #[serde(rename_all = "camelCase")]
    Claim,
    {
        id: String => ["id"],
        claim_number: String => ["claimNumber", "claim_number"],
        customer_name: String => ["customerName", "customer_name"],
        date_submitted: String => ["dateSubmitted", "date_submitted"],
        amount: f64 => ["amount"],
        status: String => ["status"],
        #[serde(default)]
        description: String => ["description"],
        #[serde(default)]
        assigned_to: Option<String> => ["assignedTo", "assigned_to"],
    }
);

impl_record!(
    /// Output of the claim-scrubbing agent for one workflow run
    ScrubbedClaim,
    {
        id: i64 => ["id"],
        #[serde(default)]
        patient_id: Option<String> => ["patient_id", "patientId"],
        operative_report: String => ["operative_report", "operativeReport"],
        physician_signature: String => ["physician_signature", "physicianSignature"],
        status: String => ["status"],
        diagnosis_code: String => ["diagnosis_code", "diagnosisCode"],
        procedure_code: String => ["procedure_code", "procedureCode"],
        pre_op_clearance: String => ["pre_op_clearance", "preOpClearance"],
        created_at: String => ["created_at", "createdAt"],
        updated_at: String => ["updated_at", "updatedAt"],
        workflow_run_id: String => ["workflow_run_id", "workflowRunId"],
    }
);
