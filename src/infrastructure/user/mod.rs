//! User infrastructure - hashing, storage and registration

pub mod password;
pub mod postgres_repository;
pub mod repository;
pub mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{
    PasswordCredentialVerifier, UserService, EMAIL_TAKEN_MESSAGE, REGISTER_FAILED_MESSAGE,
    REGISTER_INVALID_MESSAGE,
};
