//! Request-independent HTTP plumbing.

pub mod error;
