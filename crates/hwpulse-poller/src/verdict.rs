//! Verdict table and record interpretation.
//! The table is a closed set: exactly the statuses the review service is
//! documented to emit. Anything else is an interpretation failure, never a
//! silent skip.

use hwpulse_core::error::{InterpretError, Result};
use serde_json::Value;

/// A message ready for dedup and delivery, keyed by its subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Dedup identity — the homework name as the server supplied it.
    pub subject: String,
    pub text: String,
}

/// Fixed human-readable verdict for a known status. `None` means the status
/// is not in the table.
fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("The reviewer liked everything. Hooray!"),
        "reviewing" => Some("The work was taken up for review."),
        "rejected" => Some("The reviewer has remarks."),
        _ => None,
    }
}

/// Turn one homework record into its notification. Pure and deterministic:
/// the same record always produces the same message.
pub fn interpret(record: &Value) -> Result<Notification> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .ok_or(InterpretError::MissingName)?;

    // Key presence is checked before the value is judged: a record with a
    // status key holding garbage is UnknownStatus, not MissingStatus.
    let status_value = record.get("status").ok_or(InterpretError::MissingStatus)?;
    let status = status_value
        .as_str()
        .ok_or_else(|| InterpretError::UnknownStatus(status_value.to_string()))?;
    let verdict =
        verdict_for(status).ok_or_else(|| InterpretError::UnknownStatus(status.to_string()))?;

    Ok(Notification {
        subject: name.to_string(),
        text: format!("Status changed for \"{name}\": {verdict}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwpulse_core::error::HwPulseError;
    use serde_json::json;

    fn interpret_err(record: Value) -> InterpretError {
        match interpret(&record).unwrap_err() {
            HwPulseError::Interpret(e) => e,
            other => panic!("expected interpret error, got {other}"),
        }
    }

    #[test]
    fn test_approved_message() {
        let note = interpret(&json!({"homework_name": "hw1", "status": "approved"})).unwrap();
        assert_eq!(note.subject, "hw1");
        assert_eq!(
            note.text,
            "Status changed for \"hw1\": The reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let record = json!({"homework_name": "hw2", "status": "reviewing"});
        assert_eq!(interpret(&record).unwrap(), interpret(&record).unwrap());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let record = json!({
            "homework_name": "hw1",
            "status": "rejected",
            "reviewer_comment": "see notes",
            "id": 77,
        });
        let note = interpret(&record).unwrap();
        assert!(note.text.contains("remarks"));
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            interpret_err(json!({"status": "approved"})),
            InterpretError::MissingName
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            interpret_err(json!({"homework_name": "", "status": "approved"})),
            InterpretError::MissingName
        );
    }

    #[test]
    fn test_missing_status() {
        assert_eq!(
            interpret_err(json!({"homework_name": "hw1"})),
            InterpretError::MissingStatus
        );
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(
            interpret_err(json!({"homework_name": "hw1", "status": "archived"})),
            InterpretError::UnknownStatus("archived".into())
        );
    }

    #[test]
    fn test_non_string_status_is_unknown_not_missing() {
        let err = interpret_err(json!({"homework_name": "hw1", "status": 3}));
        assert!(matches!(err, InterpretError::UnknownStatus(_)));
    }
}
