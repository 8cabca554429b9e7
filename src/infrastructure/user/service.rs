//! Registration and credential verification
//!
//! `UserService::register` runs the register action end to end: validate the
//! form, hash the password off the async runtime, insert the user, then
//! invalidate the cached invoices view. `PasswordCredentialVerifier` backs
//! the login action's credential check.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::auth::{AuthError, CredentialVerifier, Credentials};
use crate::domain::user::{
    validate_registration_form, RegistrationFormData, User, UserId, UserRepository,
};
use crate::domain::view_cache::{ViewCache, INVOICES_VIEW_PATH};
use crate::domain::{ActionError, DomainError};

use super::password::PasswordHasher;

/// Form-level message when registration input is incomplete
pub const REGISTER_INVALID_MESSAGE: &str = "Missing fields. Failed to register user.";
/// Generic persistence failure message; the underlying error is only logged
pub const REGISTER_FAILED_MESSAGE: &str = "Database error: failed to register user.";
/// Duplicate-email message
pub const EMAIL_TAKEN_MESSAGE: &str = "An account with this email already exists.";

/// User registration service
#[derive(Debug)]
pub struct UserService<R, H, C>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    C: ViewCache,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    cache: Arc<C>,
}

impl<R, H, C> UserService<R, H, C>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    C: ViewCache,
{
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>, cache: Arc<C>) -> Self {
        Self {
            repository,
            hasher,
            cache,
        }
    }

    /// Register a new user from a submitted form.
    ///
    /// The plaintext password is hashed on a blocking thread and dropped; it
    /// is never persisted or logged. On success the cached invoices view is
    /// invalidated and the caller redirects.
    pub async fn register(&self, form: RegistrationFormData) -> Result<(), ActionError> {
        let draft = validate_registration_form(&form)
            .map_err(|errors| ActionError::invalid(errors, REGISTER_INVALID_MESSAGE))?;

        // Argon2 is CPU-bound; keep it off the async runtime
        let hasher = Arc::clone(&self.hasher);
        let password = draft.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                error!(error = %e, "password hashing task failed");
                ActionError::failed(REGISTER_FAILED_MESSAGE)
            })?
            .map_err(|e| {
                error!(error = %e, "password hashing failed");
                ActionError::failed(REGISTER_FAILED_MESSAGE)
            })?;

        let user = User::new(UserId::new(), draft.name, draft.email, password_hash);

        self.repository.insert(user).await.map_err(|e| match e {
            DomainError::Conflict { .. } => ActionError::failed(EMAIL_TAKEN_MESSAGE),
            e => {
                error!(error = %e, "failed to insert user");
                ActionError::failed(REGISTER_FAILED_MESSAGE)
            }
        })?;

        if let Err(e) = self.cache.invalidate(INVOICES_VIEW_PATH).await {
            warn!(error = %e, "failed to invalidate invoices view");
        }

        Ok(())
    }
}

/// Credential verifier backed by the user store and password hasher.
///
/// Session establishment is up to the caller; this only answers whether the
/// submitted credentials match a registered user.
#[derive(Debug)]
pub struct PasswordCredentialVerifier<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> PasswordCredentialVerifier<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R, H> CredentialVerifier for PasswordCredentialVerifier<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn verify(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let user = self
            .repository
            .get_by_email(&credentials.email)
            .await
            .map_err(|e| {
                error!(error = %e, "credential lookup failed");
                AuthError::other(e.to_string())
            })?;

        let Some(user) = user else {
            return Err(AuthError::InvalidCredentials);
        };

        let hasher = Arc::clone(&self.hasher);
        let password = credentials.password.clone();
        let hash = user.password_hash().to_string();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::other(e.to_string()))?;

        if matches {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
