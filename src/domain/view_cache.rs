//! Rendered-view cache trait
//!
//! The dashboard caches rendered views keyed by route path. Mutating actions
//! invalidate the affected path after persistence succeeds so the next read
//! recomputes the view.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Route path of the invoices list view.
pub const INVOICES_VIEW_PATH: &str = "/dashboard/invoices";

/// Cache of rendered views, keyed by route path.
#[async_trait]
pub trait ViewCache: Send + Sync + Debug {
    /// Gets a cached rendered view.
    async fn get(&self, path: &str) -> Result<Option<String>, DomainError>;

    /// Stores a rendered view.
    async fn put(&self, path: &str, rendered: &str) -> Result<(), DomainError>;

    /// Drops a cached view so the next access recomputes it.
    async fn invalidate(&self, path: &str) -> Result<(), DomainError>;
}
