//! DynamoDB repository implementation.
//!
//! Implements the `TodoRepository` trait from `todosync_core::storage` using
//! DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use todosync_core::storage::{Result, TodoRepository};
use todosync_core::todo::TodoItem;

use super::conversions::{item_to_todo, todo_to_item, ATTR_TODO_ID, ATTR_USER_ID};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error};
use crate::config::{ConfigError, StorageConfig};

/// DynamoDB-based todo repository.
///
/// Holds one shared client constructed once per repository instance. The
/// SDK's own connection pooling makes it safe for concurrent use by multiple
/// in-flight operations; no locks or ordering guarantees are added here.
pub struct DynamoDbTodoRepository {
    client: Client,
    config: StorageConfig,
}

impl DynamoDbTodoRepository {
    /// Creates a new repository with the given DynamoDB client and configuration.
    ///
    /// The client is injected, so callers that want request instrumentation
    /// or endpoint overrides attach them through the SDK config before
    /// handing the client in.
    pub fn new(client: Client, config: StorageConfig) -> Self {
        Self { client, config }
    }

    /// Creates a new repository from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and reads table and index
    /// names from `TODOS_TABLE` and `TODOS_INDEX_CREATED_AT`.
    pub async fn from_env() -> std::result::Result<Self, ConfigError> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&sdk_config);
        let config = StorageConfig::from_env()?;

        Ok(Self::new(client, config))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.config.table_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbTodoRepository {
    async fn get_todos_for_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let result = self
            .client
            .query()
            .table_name(&self.config.table_name)
            .index_name(&self.config.created_at_index_name)
            .key_condition_expression("userId = :userId")
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        // Only the first result page is returned.
        // TODO: follow LastEvaluatedKey once owners can exceed one page.
        let items = result.items.unwrap_or_default();
        let todos = items.iter().map(item_to_todo).collect::<Result<Vec<_>>>()?;

        tracing::info!(user_id = %user_id, count = todos.len(), "Retrieved todo items");

        Ok(todos)
    }

    async fn create_todo(&self, todo: &TodoItem) -> Result<TodoItem> {
        let item = todo_to_item(todo);

        // No condition expression: a colliding key overwrites the existing record.
        self.client
            .put_item()
            .table_name(&self.config.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::info!(todo = ?todo, "Saved new todo item");

        Ok(todo.clone())
    }

    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<()> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.config.table_name)
            .key(ATTR_TODO_ID, AttributeValue::S(todo_id.to_string()))
            .key(ATTR_USER_ID, AttributeValue::S(user_id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        // A key that never existed returns no attributes; either way the
        // delete has completed.
        let deleted = result
            .attributes
            .as_ref()
            .and_then(|attrs| item_to_todo(attrs).ok());
        tracing::info!(deleted = ?deleted, "Deleted todo item");

        Ok(())
    }
}
