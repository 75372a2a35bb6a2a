//! Dashboard application state.
//!
//! [`Dashboard`] owns the store, the current criteria and the last derived
//! view. Every recomputation bumps a generation counter; anything scheduled
//! for an older generation (a debounced search, a render step) is stale and
//! must not be applied over the latest view.

use crate::domain::{Criteria, CriteriaEvent, Post, reduce};
use crate::engine::recompute;
use crate::error::ValidationError;
use crate::render::RenderPlan;
use crate::store::PostStore;

#[derive(Debug, Clone)]
pub struct Dashboard {
    store: PostStore,
    criteria: Criteria,
    view: Vec<Post>,
    generation: u64,
    render_plan: RenderPlan,
}

/// A point-in-time copy of what the dashboard displays.
///
/// Lets callers release the state lock before building a response.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub generation: u64,
    pub criteria: Criteria,
    pub active_filter_count: usize,
    pub total_posts: usize,
    pub posts: Vec<Post>,
    pub render_plan: RenderPlan,
}

impl Dashboard {
    /// Initialise with default criteria and an initial view.
    pub fn new(store: PostStore) -> Self {
        let mut dashboard = Self {
            store,
            criteria: Criteria::default(),
            view: Vec::new(),
            generation: 0,
            render_plan: RenderPlan::transition(0, 0, 0),
        };
        dashboard.refresh();
        dashboard
    }

    /// Back to default criteria; the store is kept.
    pub fn reset(&mut self) {
        self.criteria = Criteria::default();
        self.refresh();
    }

    /// Apply a criteria event and recompute. Returns the new generation.
    pub fn dispatch(&mut self, event: &CriteriaEvent) -> u64 {
        self.criteria = reduce(&self.criteria, event);
        self.refresh();
        self.generation
    }

    /// Create a post and recompute the view on success.
    pub fn create_post(
        &mut self,
        title: &str,
        category: &str,
        content: &str,
    ) -> Result<Post, ValidationError> {
        let post = self.store.create_post(title, category, content)?;
        self.refresh();
        Ok(post)
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn view(&self) -> &[Post] {
        &self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn render_plan(&self) -> &RenderPlan {
        &self.render_plan
    }

    /// Whether work planned for `generation` may still be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            generation: self.generation,
            criteria: self.criteria.clone(),
            active_filter_count: self.criteria.active_filter_count(),
            total_posts: self.store.len(),
            posts: self.view.clone(),
            render_plan: self.render_plan.clone(),
        }
    }

    fn refresh(&mut self) {
        let previous_cards = self.view.len();
        self.view = recompute(&self.criteria, self.store.posts());
        self.generation += 1;
        self.render_plan = RenderPlan::transition(self.generation, previous_cards, self.view.len());
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(PostStore::seeded())
    }
}
