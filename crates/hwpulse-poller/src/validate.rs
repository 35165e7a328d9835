//! Structural validation of the decoded review-service payload.
//! Each check has its own failure reason so the log says exactly which
//! expectation the server broke.

use hwpulse_core::error::{HwPulseError, Result};
use serde_json::Value;

/// A payload that passed every shape check.
#[derive(Debug, Clone)]
pub struct ValidResponse {
    /// Homework records in the order the server sent them.
    pub homeworks: Vec<Value>,
    /// Server clock for the next poll window. `None` when the value is not
    /// an integer; the caller then keeps its previous checkpoint.
    pub current_date: Option<i64>,
}

/// Verify the decoded payload before any record is touched.
/// Hard requirements, checked in order: non-empty, a JSON object, has
/// `homeworks`, has `current_date`, and `homeworks` is an array.
pub fn validate(raw: &Value) -> Result<ValidResponse> {
    if is_empty_payload(raw) {
        return Err(HwPulseError::Shape("payload is empty".into()));
    }
    let map = raw
        .as_object()
        .ok_or_else(|| HwPulseError::Shape("payload is not a JSON object".into()))?;
    if !map.contains_key("homeworks") {
        return Err(HwPulseError::Shape("payload has no 'homeworks' key".into()));
    }
    if !map.contains_key("current_date") {
        return Err(HwPulseError::Shape(
            "payload has no 'current_date' key".into(),
        ));
    }
    let homeworks = map["homeworks"]
        .as_array()
        .ok_or_else(|| HwPulseError::Shape("'homeworks' is not an array".into()))?;

    Ok(ValidResponse {
        homeworks: homeworks.clone(),
        current_date: map["current_date"].as_i64(),
    })
}

fn is_empty_payload(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Object(m) => m.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_empty_object() {
        let err = validate(&json!({})).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_rejects_null() {
        assert!(validate(&Value::Null).is_err());
    }

    #[test]
    fn test_rejects_non_object() {
        let err = validate(&json!("nonsense")).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_rejects_missing_current_date() {
        let err = validate(&json!({"homeworks": []})).unwrap_err();
        assert!(err.to_string().contains("current_date"));
    }

    #[test]
    fn test_rejects_missing_homeworks() {
        let err = validate(&json!({"current_date": 1})).unwrap_err();
        assert!(err.to_string().contains("homeworks"));
    }

    #[test]
    fn test_rejects_non_array_homeworks() {
        let err = validate(&json!({"homeworks": "x", "current_date": 1})).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn test_accepts_valid_payload() {
        let raw = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000,
        });
        let valid = validate(&raw).unwrap();
        assert_eq!(valid.homeworks.len(), 1);
        assert_eq!(valid.current_date, Some(1000));
    }

    #[test]
    fn test_non_integer_current_date_yields_none() {
        let raw = json!({"homeworks": [], "current_date": "soon"});
        let valid = validate(&raw).unwrap();
        assert_eq!(valid.current_date, None);
    }
}
