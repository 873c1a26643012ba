use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record, keyed by its owner and item id.
///
/// Field names serialize in camelCase to match the store's attribute names
/// (`userId`, `todoId`, `createdAt`, ...). The pair `(user_id, todo_id)`
/// uniquely identifies an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Owner of the record (partition key in the store).
    pub user_id: String,
    /// Item id, unique within an owner's partition.
    pub todo_id: String,
    /// Creation timestamp; the store's secondary index is ordered by this.
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub due_date: NaiveDate,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Creates a new open todo stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        todo_id: impl Into<String>,
        name: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            todo_id: todo_id.into(),
            created_at: Utc::now(),
            name: name.into(),
            due_date,
            done: false,
            attachment_url: None,
        }
    }

    /// Sets the attachment URL for this todo.
    pub fn with_attachment_url(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }

    /// Sets a specific creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the completion flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem::new(
            "auth0|u1",
            "550e8400-e29b-41d4-a716-446655440001",
            "buy milk",
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        )
        .with_created_at(
            DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn test_new_todo_is_open() {
        let todo = sample_todo();

        assert!(!todo.done);
        assert!(todo.attachment_url.is_none());
    }

    #[test]
    fn test_builders() {
        let todo = sample_todo()
            .with_done(true)
            .with_attachment_url("https://bucket.s3.amazonaws.com/550e8400.png");

        assert!(todo.done);
        assert_eq!(
            todo.attachment_url.as_deref(),
            Some("https://bucket.s3.amazonaws.com/550e8400.png")
        );
    }

    #[test]
    fn test_serializes_with_camel_case_attribute_names() {
        let todo = sample_todo();
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["userId"], "auth0|u1");
        assert_eq!(value["todoId"], "550e8400-e29b-41d4-a716-446655440001");
        assert!(value["createdAt"]
            .as_str()
            .unwrap()
            .starts_with("2024-06-15T10:30:00"));
        assert_eq!(value["name"], "buy milk");
        assert_eq!(value["dueDate"], "2024-07-01");
        assert_eq!(value["done"], false);
    }

    #[test]
    fn test_absent_attachment_url_is_omitted() {
        let value = serde_json::to_value(sample_todo()).unwrap();
        assert!(value.get("attachmentUrl").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let todo = sample_todo().with_attachment_url("https://example.com/a.png");
        let json = serde_json::to_string(&todo).unwrap();
        let parsed: TodoItem = serde_json::from_str(&json).unwrap();

        assert_eq!(todo, parsed);
    }
}
