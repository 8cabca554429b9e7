//! Credential verification seam
//!
//! The login action delegates to a [`CredentialVerifier`] collaborator. The
//! outcome is a tagged result: a failed credential check is distinguished
//! from every other failure by variant, not by downcasting error types.
//! Establishing a session on success is the collaborator's side effect, not
//! the login action's.

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

/// Why a credential check did not succeed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credentials were checked and rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The check itself failed (storage, hashing, ...).
    #[error("credential check failed: {0}")]
    Other(String),
}

impl AuthError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Collaborator that checks submitted credentials.
#[async_trait]
pub trait CredentialVerifier: Send + Sync + Debug {
    /// Verify the credentials, performing any session side effects on success.
    async fn verify(&self, credentials: &Credentials) -> Result<(), AuthError>;
}
