//! Validation of raw JSON input into typed requests.
//!
//! Each validator takes the decoded transport input (`None` when the caller
//! sent nothing) and either returns the typed request or a
//! [`ValidationError`] listing every offending field. Nothing here touches
//! the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{AddMessageInput, GetMessagesInput};

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path to the offending field; empty for the input root.
    pub path: Vec<String>,

    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    /// Issue at the input root.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Issue on a named field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.into(),
        }
    }
}

/// Input failed the declared shape of a procedure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Error with a single issue.
    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Returns true if any issue points at `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.path.first().map(String::as_str) == Some(field))
    }
}

fn describe(issues: &[ValidationIssue]) -> String {
    let parts: Vec<String> = issues
        .iter()
        .map(|issue| {
            if issue.path.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.path.join("."), issue.message)
            }
        })
        .collect();
    parts.join("; ")
}

/// JSON type name as used in issue messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(what: &str, got: &Value) -> String {
    format!("Expected {}, received {}", what, type_name(got))
}

/// Validate `getMessages` input.
///
/// Absent or `null` input falls back to the default limit. Any finite
/// number is accepted; fractions are truncated toward zero.
pub fn validate_get_messages(input: Option<&Value>) -> Result<GetMessagesInput, ValidationError> {
    let value = match input {
        None | Some(Value::Null) => return Ok(GetMessagesInput::default()),
        Some(value) => value,
    };

    let Value::Number(number) = value else {
        return Err(ValidationError::single(ValidationIssue::root(expected(
            "number", value,
        ))));
    };

    let limit = match number.as_i64() {
        Some(limit) => limit,
        // `as` saturates, so out-of-range values clamp to i64 bounds.
        None => match number.as_f64() {
            Some(f) if f.is_finite() => f.trunc() as i64,
            _ => {
                return Err(ValidationError::single(ValidationIssue::root(
                    "Expected finite number",
                )))
            }
        },
    };

    Ok(GetMessagesInput { limit })
}

/// Validate `addMessage` input. Reports every offending field.
pub fn validate_add_message(input: Option<&Value>) -> Result<AddMessageInput, ValidationError> {
    let object = match input {
        None => return Err(ValidationError::single(ValidationIssue::root("Required"))),
        Some(Value::Object(object)) => object,
        Some(other) => {
            return Err(ValidationError::single(ValidationIssue::root(expected(
                "object", other,
            ))))
        }
    };

    let mut issues = Vec::new();
    let user = required_string(object, "user", &mut issues);
    let message = required_string(object, "message", &mut issues);

    match (user, message) {
        (Some(user), Some(message)) if issues.is_empty() => Ok(AddMessageInput { user, message }),
        _ => Err(ValidationError { issues }),
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        None => {
            issues.push(ValidationIssue::field(field, "Required"));
            None
        }
        Some(other) => {
            issues.push(ValidationIssue::field(field, expected("string", other)));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::DEFAULT_MESSAGE_LIMIT;

    #[test]
    fn test_get_messages_defaults_when_absent() {
        assert_eq!(
            validate_get_messages(None).unwrap().limit,
            DEFAULT_MESSAGE_LIMIT
        );
        assert_eq!(
            validate_get_messages(Some(&Value::Null)).unwrap().limit,
            DEFAULT_MESSAGE_LIMIT
        );
    }

    #[test]
    fn test_get_messages_accepts_numbers() {
        assert_eq!(validate_get_messages(Some(&json!(3))).unwrap().limit, 3);
        assert_eq!(validate_get_messages(Some(&json!(0))).unwrap().limit, 0);
        assert_eq!(validate_get_messages(Some(&json!(-4))).unwrap().limit, -4);
        assert_eq!(validate_get_messages(Some(&json!(2.9))).unwrap().limit, 2);
        assert_eq!(validate_get_messages(Some(&json!(-2.9))).unwrap().limit, -2);
        assert_eq!(
            validate_get_messages(Some(&json!(u64::MAX))).unwrap().limit,
            i64::MAX
        );
    }

    #[test]
    fn test_get_messages_rejects_non_numbers() {
        let err = validate_get_messages(Some(&json!("10"))).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert!(err.issues[0].path.is_empty());
        assert_eq!(err.issues[0].message, "Expected number, received string");

        assert!(validate_get_messages(Some(&json!({ "limit": 5 }))).is_err());
        assert!(validate_get_messages(Some(&json!(true))).is_err());
    }

    #[test]
    fn test_add_message_accepts_valid_payload() {
        let input = validate_add_message(Some(&json!({ "user": "A", "message": "hi" }))).unwrap();
        assert_eq!(input.user, "A");
        assert_eq!(input.message, "hi");
    }

    #[test]
    fn test_add_message_ignores_extra_fields() {
        let input = validate_add_message(Some(&json!({
            "user": "A",
            "message": "hi",
            "id": "forged"
        })))
        .unwrap();
        assert_eq!(input.message, "hi");
    }

    #[test]
    fn test_add_message_missing_message() {
        let err = validate_add_message(Some(&json!({ "user": "A" }))).unwrap_err();
        assert_eq!(err.issues, vec![ValidationIssue::field("message", "Required")]);
        assert!(err.mentions("message"));
        assert!(!err.mentions("user"));
        assert_eq!(err.to_string(), "message: Required");
    }

    #[test]
    fn test_add_message_reports_every_field() {
        let err = validate_add_message(Some(&json!({ "user": 7 }))).unwrap_err();
        assert_eq!(err.issues.len(), 2);
        assert_eq!(err.issues[0].path, vec!["user"]);
        assert_eq!(err.issues[0].message, "Expected string, received number");
        assert_eq!(err.issues[1].path, vec!["message"]);
    }

    #[test]
    fn test_add_message_rejects_non_object() {
        let err = validate_add_message(Some(&json!(["A", "hi"]))).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected object, received array");

        let err = validate_add_message(None).unwrap_err();
        assert_eq!(err.issues, vec![ValidationIssue::root("Required")]);
    }
}
