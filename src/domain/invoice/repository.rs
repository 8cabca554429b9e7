//! Invoice repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Invoice, InvoiceDraft, InvoiceId};
use crate::domain::DomainError;

/// Repository trait for invoice storage
#[async_trait]
pub trait InvoiceRepository: Send + Sync + Debug {
    /// Get an invoice by its ID
    async fn get(&self, id: &InvoiceId) -> Result<Option<Invoice>, DomainError>;

    /// List all invoices, newest first
    async fn list(&self) -> Result<Vec<Invoice>, DomainError>;

    /// Insert a new invoice
    async fn insert(&self, invoice: Invoice) -> Result<Invoice, DomainError>;

    /// Replace the customer, amount and status of an existing invoice.
    /// Fails with `DomainError::NotFound` when no row matches.
    async fn update(&self, id: &InvoiceId, draft: &InvoiceDraft) -> Result<(), DomainError>;

    /// Delete an invoice; returns whether a row existed
    async fn delete(&self, id: &InvoiceId) -> Result<bool, DomainError>;
}
