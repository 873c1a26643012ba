//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TodoRepository`
//! trait defined in `todosync_core::storage`. Backends are selected via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): in-memory storage backend for testing

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTodoRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryTodoRepository;
