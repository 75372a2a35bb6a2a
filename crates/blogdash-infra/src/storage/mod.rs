//! Key-value storage implementations - in-memory and file-backed.

mod memory;

pub use memory::InMemoryStore;

#[cfg(feature = "file-storage")]
mod file;
#[cfg(feature = "file-storage")]
pub use file::FileStore;
