//! Invoice domain
//!
//! Domain types for invoices: the entity and its value types, form
//! validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{CustomerId, Invoice, InvoiceDraft, InvoiceId, InvoiceStatus};
pub use repository::InvoiceRepository;
pub use validation::{
    parse_amount_cents, validate_invoice_form, InvoiceFormData, InvoiceValidationError,
};

#[cfg(test)]
pub use repository::mock::MockInvoiceRepository;
