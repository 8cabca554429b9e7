//! Application state for shared services

use std::sync::Arc;

use crate::domain::auth::CredentialVerifier;
use crate::domain::invoice::{InvoiceFormData, InvoiceId, InvoiceRepository};
use crate::domain::user::{RegistrationFormData, UserRepository};
use crate::domain::view_cache::ViewCache;
use crate::domain::{ActionError, DomainError};
use crate::infrastructure::invoice::InvoiceService;
use crate::infrastructure::user::{PasswordHasher, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub invoice_service: Arc<dyn InvoiceServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub credential_verifier: Arc<dyn CredentialVerifier>,
}

/// Trait for invoice form actions
#[async_trait::async_trait]
pub trait InvoiceServiceTrait: Send + Sync {
    async fn create(&self, form: InvoiceFormData) -> Result<(), ActionError>;
    async fn update(&self, id: InvoiceId, form: InvoiceFormData) -> Result<(), ActionError>;
    async fn remove(&self, id: InvoiceId) -> Result<(), ActionError>;
    async fn list_view(&self) -> Result<String, DomainError>;
}

#[async_trait::async_trait]
impl<R, C> InvoiceServiceTrait for InvoiceService<R, C>
where
    R: InvoiceRepository,
    C: ViewCache,
{
    async fn create(&self, form: InvoiceFormData) -> Result<(), ActionError> {
        InvoiceService::create(self, form).await
    }

    async fn update(&self, id: InvoiceId, form: InvoiceFormData) -> Result<(), ActionError> {
        InvoiceService::update(self, id, form).await
    }

    async fn remove(&self, id: InvoiceId) -> Result<(), ActionError> {
        InvoiceService::remove(self, id).await
    }

    async fn list_view(&self) -> Result<String, DomainError> {
        InvoiceService::list_view(self).await
    }
}

/// Trait for user registration
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, form: RegistrationFormData) -> Result<(), ActionError>;
}

#[async_trait::async_trait]
impl<R, H, C> UserServiceTrait for UserService<R, H, C>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    C: ViewCache,
{
    async fn register(&self, form: RegistrationFormData) -> Result<(), ActionError> {
        UserService::register(self, form).await
    }
}
