//! # Blogdash Shared
//!
//! Wire types shared between the dashboard server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
