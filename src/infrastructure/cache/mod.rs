//! View cache infrastructure

pub mod in_memory;

pub use in_memory::{InMemoryViewCache, ViewCacheConfig};
