//! # Blogdash Core
//!
//! The domain layer of the blog dashboard: posts, the filter/sort engine,
//! the creation flow and the dashboard state that ties them together.
//! This crate contains pure logic with no infrastructure dependencies.

pub mod dashboard;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod render;
pub mod store;

pub use dashboard::{Dashboard, DashboardSnapshot};
pub use engine::{active_filter_count, recompute, recompute_at};
pub use error::{DomainError, ValidationError};
pub use store::{PostStore, create_post};
