//! Invoice infrastructure - storage and form actions

pub mod postgres_repository;
pub mod repository;
pub mod service;

pub use postgres_repository::PostgresInvoiceRepository;
pub use repository::InMemoryInvoiceRepository;
pub use service::{
    InvoiceService, CREATE_FAILED_MESSAGE, CREATE_INVALID_MESSAGE, DELETE_FAILED_MESSAGE,
    INVOICE_NOT_FOUND_MESSAGE, UPDATE_FAILED_MESSAGE, UPDATE_INVALID_MESSAGE,
};
