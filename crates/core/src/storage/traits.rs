use async_trait::async_trait;

use crate::todo::TodoItem;

use super::Result;

/// Repository for todo item operations.
///
/// Implementors translate these three calls into requests against one table
/// and its creation-time index. Each call is a single request/response cycle;
/// store faults surface to the caller without translation or retry.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets all todos belonging to a user, ordered by creation time ascending.
    ///
    /// An owner with no items yields an empty vector, not an error.
    async fn get_todos_for_user(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Writes a todo unconditionally and hands the caller's item back.
    ///
    /// A colliding `(user_id, todo_id)` pair silently overwrites the existing
    /// record. The returned item is the input, not a store-confirmed copy.
    async fn create_todo(&self, todo: &TodoItem) -> Result<TodoItem>;

    /// Deletes the todo identified by `(todo_id, user_id)`.
    ///
    /// Deleting a key that does not exist completes without error.
    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<()>;
}
