//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Option<Params>,
}

impl Argon2Hasher {
    /// Create a hasher with Argon2's default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with a custom work factor (time-cost iterations).
    /// Memory and parallelism stay at the Argon2 defaults.
    pub fn with_work_factor(iterations: u32) -> Result<Self, DomainError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            iterations,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| DomainError::configuration(format!("Invalid hash work factor: {}", e)))?;

        Ok(Self {
            params: Some(params),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        match &self.params {
            Some(params) => Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone()),
            None => Argon2::default(),
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
