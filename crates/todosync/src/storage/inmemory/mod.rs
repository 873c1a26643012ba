//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the `TodoRepository`
//! trait that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. It
//! mirrors the real store's semantics (unconditional overwrite, idempotent
//! delete, creation-time listing order) so the trait contract can be
//! exercised without network access.

mod repository;

pub use repository::InMemoryTodoRepository;
