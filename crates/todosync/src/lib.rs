//! Storage backends for the todosync project.
//!
//! This crate implements the `TodoRepository` trait from `todosync_core`
//! against concrete stores. The DynamoDB backend talks to one table and its
//! creation-time secondary index; the in-memory backend mirrors the store's
//! semantics for tests. Logging goes through `tracing`; installing a
//! subscriber is the embedding binary's job.

pub mod config;
pub mod storage;

pub use config::{ConfigError, StorageConfig};
