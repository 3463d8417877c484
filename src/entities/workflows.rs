use crate::impl_record;

impl_record!(
    /// One orchestrator pipeline run
    WorkflowRun,
    {
        id: i64 => ["id"],
        workflow_id: String => ["workflow_id", "workflowId"],
        #[serde(default)]
        workflow_type: Option<String> => ["workflow_type", "workflowType"],
        #[serde(default)]
        patient_id: Option<String> => ["patient_id", "patientId"],
        current_step: String => ["current_step", "currentStep"],
        status: String => ["status"],
        #[serde(default)]
        result: Option<String> => ["result"],
        #[serde(default)]
        error_message: Option<String> => ["error_message", "errorMessage"],
        thread_id: String => ["thread_id", "threadId"],
        created_at: String => ["created_at", "createdAt"],
        updated_at: String => ["updated_at", "updatedAt"],
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use serde_json::json;

    #[test]
    fn test_workflow_run_fields() {
        let run: WorkflowRun = serde_json::from_value(json!({
            "id": 12,
            "workflow_id": "wf-12",
            "workflow_type": "full",
            "patient_id": null,
            "current_step": "claim_scrubbing",
            "status": "in_progress",
            "result": null,
            "error_message": null,
            "thread_id": "thread-12",
            "created_at": "2025-09-05 12:41:23.959226+00",
            "updated_at": "2025-09-05 12:45:00.000000+00"
        }))
        .expect("run should deserialize");

        assert_eq!(
            run.field_value("currentStep"),
            Some(FieldValue::String("claim_scrubbing".to_string()))
        );
        assert_eq!(run.field_value("errorMessage"), Some(FieldValue::Null));
        assert_eq!(run.status_value("status").as_deref(), Some("in_progress"));
    }
}
