//! Todo item domain type.

mod types;

pub use types::TodoItem;
