//! Invoice form validation
//!
//! Raw form input is a bag of optional strings. Validation either produces a
//! typed [`InvoiceDraft`] or accumulates field-scoped messages the form layer
//! renders unchanged. It never fails fatally.

use serde::Deserialize;
use thiserror::Error;

use super::entity::{CustomerId, InvoiceDraft, InvoiceStatus};
use crate::domain::form::FieldErrors;

/// Errors that can occur during invoice field validation.
///
/// Display strings double as the user-facing form messages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvoiceValidationError {
    #[error("Select a customer.")]
    MissingCustomer,

    #[error("Enter an amount greater than 0.")]
    InvalidAmount,

    #[error("Select an invoice status.")]
    InvalidStatus,
}

/// Raw invoice form submission, field names as the form posts them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceFormData {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// Validate a submitted invoice form.
///
/// The amount is coerced from its string form and converted to integer cents
/// (`round(amount * 100)`). Missing fields, non-numeric amounts, amounts <= 0
/// and unknown statuses all surface as field errors, never as an `Err` of any
/// other kind.
pub fn validate_invoice_form(form: &InvoiceFormData) -> Result<InvoiceDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let customer_id = match CustomerId::new(form.customer_id.clone().unwrap_or_default()) {
        Ok(id) => Some(id),
        Err(e) => {
            errors.push("customerId", e.to_string());
            None
        }
    };

    let amount_cents = match parse_amount_cents(form.amount.as_deref()) {
        Ok(cents) => Some(cents),
        Err(e) => {
            errors.push("amount", e.to_string());
            None
        }
    };

    let status = match InvoiceStatus::parse(form.status.as_deref().unwrap_or_default()) {
        Ok(status) => Some(status),
        Err(e) => {
            errors.push("status", e.to_string());
            None
        }
    };

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) => Ok(InvoiceDraft {
            customer_id,
            amount_cents,
            status,
        }),
        _ => Err(errors),
    }
}

/// Coerce a submitted amount to integer cents.
///
/// Accepts any finite decimal > 0; rounds half away from zero, so
/// "19.99" becomes 1999.
pub fn parse_amount_cents(raw: Option<&str>) -> Result<i64, InvoiceValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();

    let amount: f64 = raw
        .parse()
        .map_err(|_| InvoiceValidationError::InvalidAmount)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(InvoiceValidationError::InvalidAmount);
    }

    Ok((amount * 100.0).round() as i64)
}
