//! Record trait: field access on backend-owned records

use super::field::FieldValue;
use serde_json::Value;

/// A record fetched from the orchestrator
///
/// Records are created and destroyed only by the backend. The dashboard reads
/// fields by name for sorting and filtering and never mutates them.
pub trait Record: Clone + Send + Sync + 'static {
    /// Read a field by name, `None` if the record has no such field
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// The record's status as a string, if the status field holds one
    fn status_value(&self, status_field: &str) -> Option<String> {
        match self.field_value(status_field)? {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Record for Value {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.get(field).and_then(FieldValue::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_record_field_access() {
        let record = json!({"status": "pending", "amount": 12.5, "tags": ["a"]});

        assert_eq!(
            record.field_value("status"),
            Some(FieldValue::String("pending".to_string()))
        );
        assert_eq!(record.field_value("amount"), Some(FieldValue::Float(12.5)));
        assert_eq!(record.field_value("tags"), None);
        assert_eq!(record.field_value("missing"), None);
    }

    #[test]
    fn test_status_value_requires_string() {
        assert_eq!(
            json!({"status": "approved"}).status_value("status"),
            Some("approved".to_string())
        );
        assert_eq!(json!({"status": null}).status_value("status"), None);
        assert_eq!(json!({"status": 3}).status_value("status"), None);
        assert_eq!(json!("scalar").status_value("status"), None);
    }
}
