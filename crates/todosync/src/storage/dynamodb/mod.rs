//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the
//! `TodoRepository` trait using `aws-sdk-dynamodb`. One table holds the
//! items keyed by `(userId, todoId)`; listings go through a secondary index
//! keyed by `userId` and ordered by `createdAt`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbTodoRepository;
