//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. Missing fields deserialize as empty and are
/// rejected by validation, not by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// Query string of a stateless view request. Absent values use defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub range: Option<String>,
    pub sort: Option<String>,
}

/// A criteria change sent to the dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DashboardEventRequest {
    SelectCategory(String),
    SearchInput(String),
    SelectDateRange(String),
    SelectSort(String),
    ClearFilters,
}

/// One card of the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub badge_class: String,
    pub excerpt: String,
    pub created_at: String,
    /// Entrance animation delay of this card within the grid.
    pub enter_delay_ms: u64,
}

/// Full post for the detail panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub badge_class: String,
    pub content: String,
    pub paragraphs: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaResponse {
    pub category: String,
    pub search: String,
    pub range: String,
    pub sort: String,
}

/// The derived view as cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResponse {
    pub criteria: CriteriaResponse,
    pub active_filter_count: usize,
    pub total_posts: usize,
    pub posts: Vec<PostSummary>,
}

/// The session dashboard: its view plus sequencing information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub generation: u64,
    #[serde(flatten)]
    pub view: ViewResponse,
    pub render_plan: RenderPlanResponse,
}

/// Grid transition for one generation; steps of an older generation are
/// dropped by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlanResponse {
    pub generation: u64,
    pub duration_ms: u64,
    pub steps: Vec<RenderStepResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStepResponse {
    pub delay_ms: u64,
    pub action: RenderActionResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderActionResponse {
    HideEmptyState,
    ClearGrid,
    ShowEmptyState,
    MarkCardsRemoving { count: usize },
    DisplayCards { count: usize, stagger_ms: u64 },
}

/// Conditional read of the session dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Generation the client already rendered.
    pub generation: Option<u64>,
}

/// Reply to a debounced event: the recomputation happens later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAcceptedResponse {
    pub debounced: bool,
    pub delay_ms: u64,
    pub generation: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub name: String,
    /// `false` for filter-only entries such as `All`.
    pub assignable: bool,
}
