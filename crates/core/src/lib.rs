//! Core types for the todosync project.
//!
//! This crate holds the todo item domain type and the storage seam (repository
//! trait plus error taxonomy). It has no knowledge of any concrete store; the
//! backends live in the `todosync` crate.

pub mod storage;
pub mod todo;
