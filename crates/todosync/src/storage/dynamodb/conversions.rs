//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! todo item type. These are testable in isolation without DynamoDB access.
//! Stored items are validated on the way in: a missing or malformed attribute
//! is an `InvalidData` error rather than a blind cast.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, NaiveDate, Utc};

use todosync_core::storage::RepositoryError;
use todosync_core::todo::TodoItem;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_USER_ID: &str = "userId";
pub const ATTR_TODO_ID: &str = "todoId";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_NAME: &str = "name";
pub const ATTR_DUE_DATE: &str = "dueDate";
pub const ATTR_DONE: &str = "done";
pub const ATTR_ATTACHMENT_URL: &str = "attachmentUrl";

// ============================================================================
// Todo conversions
// ============================================================================

/// Convert a TodoItem to a DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        ATTR_USER_ID.to_string(),
        AttributeValue::S(todo.user_id.clone()),
    );
    item.insert(
        ATTR_TODO_ID.to_string(),
        AttributeValue::S(todo.todo_id.clone()),
    );

    // Data
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(todo.created_at.to_rfc3339()),
    );
    item.insert(ATTR_NAME.to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(
        ATTR_DUE_DATE.to_string(),
        AttributeValue::S(todo.due_date.format("%Y-%m-%d").to_string()),
    );
    item.insert(ATTR_DONE.to_string(), AttributeValue::Bool(todo.done));
    if let Some(url) = &todo.attachment_url {
        item.insert(
            ATTR_ATTACHMENT_URL.to_string(),
            AttributeValue::S(url.clone()),
        );
    }

    item
}

/// Convert a DynamoDB item to a TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        user_id: get_string(item, ATTR_USER_ID)?,
        todo_id: get_string(item, ATTR_TODO_ID)?,
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
        name: get_string(item, ATTR_NAME)?,
        due_date: get_date(item, ATTR_DUE_DATE)?,
        done: get_bool(item, ATTR_DONE)?,
        attachment_url: get_optional_string(item, ATTR_ATTACHMENT_URL),
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required date attribute (YYYY-MM-DD format).
fn get_date(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<NaiveDate, RepositoryError> {
    let s = get_string(item, key)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid date {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
