//! Invoice entity and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::InvoiceValidationError;

/// Invoice identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the customer an invoice bills.
///
/// Opaque here; referential integrity is the database's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a new CustomerId; must be non-empty
    pub fn new(id: impl Into<String>) -> Result<Self, InvoiceValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvoiceValidationError::MissingCustomer);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = InvoiceValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment
    Pending,
    /// Paid in full
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    /// Parse a submitted status value; anything but the two known values is
    /// rejected.
    pub fn parse(value: &str) -> Result<Self, InvoiceValidationError> {
        match value {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(InvoiceValidationError::InvalidStatus),
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated invoice fields shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: CustomerId,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// Invoice entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice
    id: InvoiceId,
    /// Customer this invoice bills
    customer_id: CustomerId,
    /// Amount in integer cents, always positive
    amount_cents: i64,
    /// Payment status
    status: InvoiceStatus,
    /// Calendar date the invoice was issued
    date: NaiveDate,
}

impl Invoice {
    /// Create a new invoice dated `date`
    pub fn new(id: InvoiceId, draft: InvoiceDraft, date: NaiveDate) -> Self {
        Self {
            id,
            customer_id: draft.customer_id,
            amount_cents: draft.amount_cents,
            status: draft.status,
            date,
        }
    }

    // Getters

    pub fn id(&self) -> &InvoiceId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Replace the mutable fields with a validated draft. The issue date
    /// never changes after creation.
    pub fn apply(&mut self, draft: InvoiceDraft) {
        self.customer_id = draft.customer_id;
        self.amount_cents = draft.amount_cents;
        self.status = draft.status;
    }
}
