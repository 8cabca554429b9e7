//! PostgreSQL invoice repository implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::invoice::{
    CustomerId, Invoice, InvoiceDraft, InvoiceId, InvoiceRepository, InvoiceStatus,
};
use crate::domain::DomainError;

/// PostgreSQL implementation of InvoiceRepository
#[derive(Debug, Clone)]
pub struct PostgresInvoiceRepository {
    pool: PgPool,
}

impl PostgresInvoiceRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn get(&self, id: &InvoiceId) -> Result<Option<Invoice>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get invoice: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_invoice(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Invoice>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            ORDER BY date DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list invoices: {}", e)))?;

        let mut invoices = Vec::with_capacity(rows.len());

        for row in rows {
            invoices.push(row_to_invoice(&row)?);
        }

        Ok(invoices)
    }

    async fn insert(&self, invoice: Invoice) -> Result<Invoice, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(invoice.id().as_uuid())
        .bind(invoice.customer_id().as_str())
        .bind(invoice.amount_cents())
        .bind(invoice.status().as_str())
        .bind(invoice.date())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert invoice: {}", e)))?;

        Ok(invoice)
    }

    async fn update(&self, id: &InvoiceId, draft: &InvoiceDraft) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(draft.customer_id.as_str())
        .bind(draft.amount_cents)
        .bind(draft.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update invoice: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Invoice '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete invoice: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_invoice(row: &sqlx::postgres::PgRow) -> Result<Invoice, DomainError> {
    let id: Uuid = row.get("id");
    let customer_id: String = row.get("customer_id");
    let amount: i64 = row.get("amount");
    let status: String = row.get("status");
    let date: NaiveDate = row.get("date");

    let customer_id = CustomerId::new(customer_id)
        .map_err(|e| DomainError::storage(format!("Invalid customer ID in database: {}", e)))?;
    let status = InvoiceStatus::parse(&status)
        .map_err(|e| DomainError::storage(format!("Invalid invoice status in database: {}", e)))?;

    Ok(Invoice::new(
        InvoiceId::from_uuid(id),
        InvoiceDraft {
            customer_id,
            amount_cents: amount,
            status,
        },
        date,
    ))
}
