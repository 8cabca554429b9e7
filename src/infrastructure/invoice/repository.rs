//! In-memory invoice repository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::invoice::{Invoice, InvoiceDraft, InvoiceId, InvoiceRepository};
use crate::domain::DomainError;

/// In-memory implementation of InvoiceRepository, for tests and local runs
#[derive(Debug, Default)]
pub struct InMemoryInvoiceRepository {
    invoices: Arc<RwLock<HashMap<InvoiceId, Invoice>>>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn get(&self, id: &InvoiceId) -> Result<Option<Invoice>, DomainError> {
        Ok(self.invoices.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>, DomainError> {
        let invoices = self.invoices.read().await;

        let mut result: Vec<Invoice> = invoices.values().cloned().collect();
        result.sort_by(|a, b| b.date().cmp(&a.date()));

        Ok(result)
    }

    async fn insert(&self, invoice: Invoice) -> Result<Invoice, DomainError> {
        let mut invoices = self.invoices.write().await;

        if invoices.contains_key(invoice.id()) {
            return Err(DomainError::conflict(format!(
                "Invoice '{}' already exists",
                invoice.id()
            )));
        }

        invoices.insert(*invoice.id(), invoice.clone());
        Ok(invoice)
    }

    async fn update(&self, id: &InvoiceId, draft: &InvoiceDraft) -> Result<(), DomainError> {
        let mut invoices = self.invoices.write().await;

        match invoices.get_mut(id) {
            Some(invoice) => {
                invoice.apply(draft.clone());
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "Invoice '{}' not found",
                id
            ))),
        }
    }

    async fn delete(&self, id: &InvoiceId) -> Result<bool, DomainError> {
        Ok(self.invoices.write().await.remove(id).is_some())
    }
}
