//! Domain entities - posts, categories and the criteria used to view them.

mod criteria;
mod post;

pub use criteria::{Criteria, CriteriaEvent, DateRange, SortOrder, reduce};
pub use post::{Category, CategoryFilter, Post, seed_posts};
