//! Form-state types shared by all mutating actions
//!
//! Every form action either succeeds (control leaves via redirect) or fails
//! with a recoverable [`ActionError`] that the form layer re-renders: field
//! errors for validation failures, a single message for persistence failures.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field-scoped validation messages, keyed by form field name.
///
/// Field order is deterministic so re-rendered forms are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the given field's error list.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate fields in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Recoverable failure of a form action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    /// Input failed validation; field errors go back to the form unchanged.
    Invalid {
        errors: FieldErrors,
        message: String,
    },
    /// Persistence failed; reported as a single user-facing message.
    Failed { message: String },
}

impl ActionError {
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self::Invalid {
            errors,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message, .. } | Self::Failed { message } => message,
        }
    }

    /// Field errors, if this is a validation failure.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            Self::Failed { .. } => None,
        }
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { message, errors } => {
                write!(f, "{} ({} invalid fields)", message, errors.len())
            }
            Self::Failed { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ActionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_accumulates_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("amount", "Enter an amount greater than 0.");
        errors.push("amount", "second message");
        errors.push("status", "Select an invoice status.");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("amount").unwrap().len(), 2);
        assert_eq!(
            errors.get("status").unwrap(),
            &["Select an invoice status.".to_string()]
        );
        assert!(errors.get("customerId").is_none());
    }

    #[test]
    fn test_empty() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = FieldErrors::new();
        errors.push("customerId", "Select a customer.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["customerId"][0], "Select a customer.");
    }

    #[test]
    fn test_deterministic_field_order() {
        let mut errors = FieldErrors::new();
        errors.push("status", "a");
        errors.push("amount", "b");
        errors.push("customerId", "c");

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["amount", "customerId", "status"]);
    }

    #[test]
    fn test_action_error_accessors() {
        let mut errors = FieldErrors::new();
        errors.push("amount", "Enter an amount greater than 0.");

        let invalid = ActionError::invalid(errors.clone(), "Missing fields.");
        assert_eq!(invalid.message(), "Missing fields.");
        assert_eq!(invalid.errors(), Some(&errors));

        let failed = ActionError::failed("Database error.");
        assert_eq!(failed.message(), "Database error.");
        assert!(failed.errors().is_none());
    }
}
