//! Invoice form actions
//!
//! Each action runs the same sequence: validate, persist, invalidate the
//! cached invoices view. Validation failures carry field errors back to the
//! form; persistence failures become a single user-facing message while the
//! underlying error is logged. Redirecting on success is the handler's job.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, warn};

use crate::domain::invoice::{
    validate_invoice_form, Invoice, InvoiceFormData, InvoiceId, InvoiceRepository,
};
use crate::domain::view_cache::{ViewCache, INVOICES_VIEW_PATH};
use crate::domain::{ActionError, DomainError};

/// Form-level message when create input is incomplete
pub const CREATE_INVALID_MESSAGE: &str = "Missing fields. Failed to create invoice.";
/// Form-level message when update input is incomplete
pub const UPDATE_INVALID_MESSAGE: &str = "Missing fields. Failed to update invoice.";
/// Generic persistence failure messages; the underlying error is only logged
pub const CREATE_FAILED_MESSAGE: &str = "Database error: failed to create invoice.";
pub const UPDATE_FAILED_MESSAGE: &str = "Database error: failed to update invoice.";
pub const DELETE_FAILED_MESSAGE: &str = "Database error: failed to delete invoice.";
/// Update against an id that no longer exists
pub const INVOICE_NOT_FOUND_MESSAGE: &str = "Invoice not found.";

/// Invoice action service
#[derive(Debug)]
pub struct InvoiceService<R: InvoiceRepository, C: ViewCache> {
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R: InvoiceRepository, C: ViewCache> InvoiceService<R, C> {
    /// Create a new invoice service
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    /// Create an invoice from a submitted form, dated today (UTC).
    pub async fn create(&self, form: InvoiceFormData) -> Result<(), ActionError> {
        let draft = validate_invoice_form(&form)
            .map_err(|errors| ActionError::invalid(errors, CREATE_INVALID_MESSAGE))?;

        let invoice = Invoice::new(InvoiceId::new(), draft, Utc::now().date_naive());

        self.repository.insert(invoice).await.map_err(|e| {
            error!(error = %e, "failed to insert invoice");
            ActionError::failed(CREATE_FAILED_MESSAGE)
        })?;

        self.invalidate_list_view().await;
        Ok(())
    }

    /// Replace an existing invoice's customer, amount and status. The issue
    /// date is untouched.
    pub async fn update(&self, id: InvoiceId, form: InvoiceFormData) -> Result<(), ActionError> {
        let draft = validate_invoice_form(&form)
            .map_err(|errors| ActionError::invalid(errors, UPDATE_INVALID_MESSAGE))?;

        self.repository.update(&id, &draft).await.map_err(|e| match e {
            DomainError::NotFound { .. } => ActionError::failed(INVOICE_NOT_FOUND_MESSAGE),
            e => {
                error!(error = %e, invoice_id = %id, "failed to update invoice");
                ActionError::failed(UPDATE_FAILED_MESSAGE)
            }
        })?;

        self.invalidate_list_view().await;
        Ok(())
    }

    /// Delete an invoice. Deleting an id that no longer exists is a no-op
    /// success; only a database failure reports a message. No redirect
    /// follows either way.
    pub async fn remove(&self, id: InvoiceId) -> Result<(), ActionError> {
        self.repository.delete(&id).await.map_err(|e| {
            error!(error = %e, invoice_id = %id, "failed to delete invoice");
            ActionError::failed(DELETE_FAILED_MESSAGE)
        })?;

        self.invalidate_list_view().await;
        Ok(())
    }

    /// Rendered invoices list view, served from cache when fresh.
    pub async fn list_view(&self) -> Result<String, DomainError> {
        match self.cache.get(INVOICES_VIEW_PATH).await {
            Ok(Some(rendered)) => return Ok(rendered),
            Ok(None) => {}
            // A cache failure is a miss, not an action failure
            Err(e) => warn!(error = %e, "invoices view cache read failed"),
        }

        let invoices = self.repository.list().await?;
        let rendered = serde_json::to_string(&invoices)
            .map_err(|e| DomainError::internal(format!("Failed to render invoices view: {}", e)))?;

        if let Err(e) = self.cache.put(INVOICES_VIEW_PATH, &rendered).await {
            warn!(error = %e, "invoices view cache write failed");
        }

        Ok(rendered)
    }

    async fn invalidate_list_view(&self) {
        if let Err(e) = self.cache.invalidate(INVOICES_VIEW_PATH).await {
            warn!(error = %e, "failed to invalidate invoices view");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::{CustomerId, InvoiceDraft, InvoiceStatus, MockInvoiceRepository};
    use crate::domain::view_cache::mock::RecordingViewCache;

    type TestService = InvoiceService<MockInvoiceRepository, RecordingViewCache>;

    fn create_service() -> (TestService, Arc<MockInvoiceRepository>, Arc<RecordingViewCache>) {
        let repository = Arc::new(MockInvoiceRepository::new());
        let cache = Arc::new(RecordingViewCache::new());
        let service = InvoiceService::new(Arc::clone(&repository), Arc::clone(&cache));
        (service, repository, cache)
    }

    fn make_form(customer: &str, amount: &str, status: &str) -> InvoiceFormData {
        InvoiceFormData {
            customer_id: Some(customer.to_string()),
            amount: Some(amount.to_string()),
            status: Some(status.to_string()),
        }
    }

    async fn seeded_invoice(repository: &MockInvoiceRepository) -> InvoiceId {
        let invoice = Invoice::new(
            InvoiceId::new(),
            InvoiceDraft {
                customer_id: CustomerId::new("cust-1").unwrap(),
                amount_cents: 500,
                status: InvoiceStatus::Pending,
            },
            Utc::now().date_naive(),
        );
        let id = *invoice.id();
        repository.insert(invoice).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_create_persists_cents_and_today() {
        let (service, repository, cache) = create_service();

        service
            .create(make_form("cust-7", "19.99", "pending"))
            .await
            .unwrap();

        let invoices = repository.list().await.unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer_id().as_str(), "cust-7");
        assert_eq!(invoices[0].amount_cents(), 1999);
        assert_eq!(invoices[0].status(), InvoiceStatus::Pending);
        assert_eq!(invoices[0].date(), Utc::now().date_naive());

        assert_eq!(cache.invalidated().await, vec![INVOICES_VIEW_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_amounts() {
        let (service, repository, cache) = create_service();

        for amount in ["0", "-5", "abc"] {
            let err = service
                .create(make_form("cust-7", amount, "pending"))
                .await
                .unwrap_err();

            match err {
                ActionError::Invalid { errors, message } => {
                    assert_eq!(message, CREATE_INVALID_MESSAGE);
                    assert!(errors.contains("amount"));
                }
                other => panic!("expected validation failure, got {other:?}"),
            }
        }

        // No write, no invalidation
        assert_eq!(repository.len().await, 0);
        assert!(cache.invalidated().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_status() {
        let (service, _repository, _cache) = create_service();

        let err = service
            .create(make_form("cust-7", "5", "overdue"))
            .await
            .unwrap_err();

        assert!(err.errors().unwrap().contains("status"));
    }

    #[tokio::test]
    async fn test_create_database_failure() {
        let (service, repository, cache) = create_service();
        repository.set_should_fail(true).await;

        let err = service
            .create(make_form("cust-7", "5", "pending"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), CREATE_FAILED_MESSAGE);
        assert!(err.errors().is_none());
        assert!(cache.invalidated().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (service, repository, cache) = create_service();
        let id = seeded_invoice(&repository).await;

        service
            .update(id, make_form("cust-9", "2.50", "paid"))
            .await
            .unwrap();

        let updated = repository.get(&id).await.unwrap().unwrap();
        assert_eq!(updated.customer_id().as_str(), "cust-9");
        assert_eq!(updated.amount_cents(), 250);
        assert_eq!(updated.status(), InvoiceStatus::Paid);

        assert_eq!(cache.invalidated().await, vec![INVOICES_VIEW_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_update_validation_failure_writes_nothing() {
        let (service, repository, cache) = create_service();
        let id = seeded_invoice(&repository).await;

        let err = service
            .update(id, make_form("cust-9", "-1", "paid"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), UPDATE_INVALID_MESSAGE);
        let unchanged = repository.get(&id).await.unwrap().unwrap();
        assert_eq!(unchanged.amount_cents(), 500);
        assert!(cache.invalidated().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_invoice() {
        let (service, _repository, _cache) = create_service();

        let err = service
            .update(InvoiceId::new(), make_form("cust-9", "5", "paid"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), INVOICE_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_remove_deletes_and_invalidates() {
        let (service, repository, cache) = create_service();
        let id = seeded_invoice(&repository).await;

        service.remove(id).await.unwrap();

        assert_eq!(repository.len().await, 0);
        assert_eq!(cache.invalidated().await, vec![INVOICES_VIEW_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_remove_missing_invoice_is_noop() {
        let (service, _repository, cache) = create_service();

        service.remove(InvoiceId::new()).await.unwrap();

        // The delete statement succeeded, so the view is still invalidated
        assert_eq!(cache.invalidated().await, vec![INVOICES_VIEW_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_remove_database_failure() {
        let (service, repository, cache) = create_service();
        let id = seeded_invoice(&repository).await;
        repository.set_should_fail(true).await;

        let err = service.remove(id).await.unwrap_err();

        assert_eq!(err.message(), DELETE_FAILED_MESSAGE);
        assert!(cache.invalidated().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_view_caches_rendered_json() {
        let (service, repository, cache) = create_service();
        let id = seeded_invoice(&repository).await;

        let rendered = service.list_view().await.unwrap();
        assert!(rendered.contains(&id.to_string()));
        assert_eq!(
            cache.get(INVOICES_VIEW_PATH).await.unwrap().as_deref(),
            Some(rendered.as_str())
        );

        // Served from cache even if the repository starts failing
        repository.set_should_fail(true).await;
        assert_eq!(service.list_view().await.unwrap(), rendered);
    }

    #[tokio::test]
    async fn test_mutation_refreshes_list_view() {
        let (service, _repository, _cache) = create_service();

        service
            .create(make_form("cust-7", "5", "pending"))
            .await
            .unwrap();
        let before = service.list_view().await.unwrap();

        service
            .create(make_form("cust-8", "7.25", "paid"))
            .await
            .unwrap();
        let after = service.list_view().await.unwrap();

        assert_ne!(before, after);
        assert!(after.contains("cust-8"));
    }
}
