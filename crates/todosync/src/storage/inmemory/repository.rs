//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todosync_core::storage::{Result, TodoRepository};
use todosync_core::todo::TodoItem;

/// In-memory storage backend for testing.
///
/// Keyed by `(user_id, todo_id)`. Creates overwrite colliding keys and
/// deletes are idempotent, matching the real store. Data is not persisted
/// and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<(String, String), TodoItem>>>,
}

impl InMemoryTodoRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_todos_for_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        let mut result: Vec<TodoItem> = todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();

        // The creation-time index hands results back oldest first.
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(result)
    }

    async fn create_todo(&self, todo: &TodoItem) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        todos.insert((todo.user_id.clone(), todo.todo_id.clone()), todo.clone());

        Ok(todo.clone())
    }

    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(&(user_id.to_string(), todo_id.to_string()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    // Helper to create a todo with a deterministic creation timestamp.
    fn todo_at(user_id: &str, todo_id: &str, name: &str, minute: u32) -> TodoItem {
        TodoItem::new(
            user_id,
            todo_id,
            name,
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        )
        .with_created_at(Utc.with_ymd_and_hms(2024, 6, 1, 12, minute, 0).unwrap())
    }

    #[tokio::test]
    async fn test_create_and_list_for_user() {
        let repo = InMemoryTodoRepository::new();

        repo.create_todo(&todo_at("u1", "t1", "buy milk", 0))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u1", "t2", "walk the dog", 1))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u1", "t3", "file taxes", 2))
            .await
            .unwrap();

        let todos = repo.get_todos_for_user("u1").await.unwrap();

        assert_eq!(todos.len(), 3);
        let ids: Vec<&str> = todos.iter().map(|t| t.todo_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let repo = InMemoryTodoRepository::new();

        repo.create_todo(&todo_at("u1", "t1", "buy milk", 0))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u2", "t1", "other owner", 1))
            .await
            .unwrap();

        let todos = repo.get_todos_for_user("u1").await.unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].user_id, "u1");
        assert_eq!(todos[0].name, "buy milk");
    }

    #[tokio::test]
    async fn test_list_unknown_owner_is_empty() {
        let repo = InMemoryTodoRepository::new();
        let todos = repo.get_todos_for_user("nobody").await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_list_ordered_by_creation_time() {
        let repo = InMemoryTodoRepository::new();

        // Insert newest first; the listing still comes back oldest first.
        repo.create_todo(&todo_at("u1", "t3", "third", 30))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u1", "t1", "first", 10))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u1", "t2", "second", 20))
            .await
            .unwrap();

        let todos = repo.get_todos_for_user("u1").await.unwrap();

        let ids: Vec<&str> = todos.iter().map(|t| t.todo_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[tokio::test]
    async fn test_create_returns_the_callers_item() {
        let repo = InMemoryTodoRepository::new();
        let todo = todo_at("u1", "t1", "buy milk", 0);

        let created = repo.create_todo(&todo).await.unwrap();

        assert_eq!(created, todo);
    }

    #[tokio::test]
    async fn test_create_overwrites_colliding_key() {
        let repo = InMemoryTodoRepository::new();

        repo.create_todo(&todo_at("u1", "t1", "first payload", 0))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u1", "t1", "second payload", 1).with_done(true))
            .await
            .unwrap();

        let todos = repo.get_todos_for_user("u1").await.unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].name, "second payload");
        assert!(todos[0].done);
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let repo = InMemoryTodoRepository::new();

        repo.create_todo(&todo_at("u1", "t1", "buy milk", 0))
            .await
            .unwrap();

        let todos = repo.get_todos_for_user("u1").await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].name, "buy milk");

        repo.delete_todo("t1", "u1").await.unwrap();

        let todos = repo.get_todos_for_user("u1").await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let repo = InMemoryTodoRepository::new();
        repo.delete_todo("t1", "u1").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_only_touches_the_named_owner() {
        let repo = InMemoryTodoRepository::new();

        repo.create_todo(&todo_at("u1", "t1", "mine", 0))
            .await
            .unwrap();
        repo.create_todo(&todo_at("u2", "t1", "theirs", 1))
            .await
            .unwrap();

        repo.delete_todo("t1", "u1").await.unwrap();

        assert!(repo.get_todos_for_user("u1").await.unwrap().is_empty());
        assert_eq!(repo.get_todos_for_user("u2").await.unwrap().len(), 1);
    }
}
