//! Ports - trait definitions for external dependencies.
//! Infrastructure provides the implementations.

mod storage;

pub use storage::{KeyValueStore, StorageError};
