//! Registration form validation

use serde::Deserialize;
use thiserror::Error;

use crate::domain::form::FieldErrors;

/// Errors that can occur during registration field validation.
///
/// Display strings double as the user-facing form messages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Enter a name.")]
    MissingName,

    #[error("Enter an email address.")]
    MissingEmail,

    #[error("Enter a password.")]
    MissingPassword,
}

/// Raw registration form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated registration fields. The password is still plaintext here; the
/// registration service hashes it and discards this value.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validate a submitted registration form. Each of name, email and password
/// must be present and non-empty; failures surface as field errors.
pub fn validate_registration_form(
    form: &RegistrationFormData,
) -> Result<RegistrationDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required(&form.name);
    if name.is_none() {
        errors.push("name", UserValidationError::MissingName.to_string());
    }

    let email = required(&form.email);
    if email.is_none() {
        errors.push("email", UserValidationError::MissingEmail.to_string());
    }

    let password = required(&form.password);
    if password.is_none() {
        errors.push("password", UserValidationError::MissingPassword.to_string());
    }

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) => Ok(RegistrationDraft {
            name,
            email,
            password,
        }),
        _ => Err(errors),
    }
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegistrationFormData {
        RegistrationFormData {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_valid_form() {
        let draft =
            validate_registration_form(&form(Some("Ana"), Some("ana@x.com"), Some("secret123")))
                .unwrap();

        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.email, "ana@x.com");
        assert_eq!(draft.password, "secret123");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let draft =
            validate_registration_form(&form(Some(" Ana "), Some("ana@x.com"), Some("secret123")))
                .unwrap();
        assert_eq!(draft.name, "Ana");
    }

    #[test]
    fn test_missing_name() {
        let errors =
            validate_registration_form(&form(None, Some("ana@x.com"), Some("secret123")))
                .unwrap_err();

        assert_eq!(errors.get("name").unwrap(), &["Enter a name.".to_string()]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_blank_email() {
        let errors =
            validate_registration_form(&form(Some("Ana"), Some("   "), Some("secret123")))
                .unwrap_err();

        assert_eq!(
            errors.get("email").unwrap(),
            &["Enter an email address.".to_string()]
        );
    }

    #[test]
    fn test_missing_password() {
        let errors =
            validate_registration_form(&form(Some("Ana"), Some("ana@x.com"), None)).unwrap_err();

        assert_eq!(
            errors.get("password").unwrap(),
            &["Enter a password.".to_string()]
        );
    }

    #[test]
    fn test_all_fields_missing() {
        let errors = validate_registration_form(&RegistrationFormData::default()).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }
}
