//! Mapping between domain values and wire types.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use blogdash_core::domain::{Criteria, CriteriaEvent, Post};
use blogdash_core::render::{CARD_STAGGER, RenderAction, RenderPlan, RenderStep};
use blogdash_core::{DashboardSnapshot, DomainError};
use blogdash_shared::dto::{
    CriteriaResponse, DashboardEventRequest, DashboardResponse, PostDetailResponse, PostSummary,
    RenderActionResponse, RenderPlanResponse, RenderStepResponse, ViewQuery, ViewResponse,
};

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Card at grid position `index`.
pub fn post_summary(index: usize, post: &Post) -> PostSummary {
    PostSummary {
        id: post.id.clone(),
        title: post.title.clone(),
        category: post.category.to_string(),
        badge_class: post.category.badge_class(),
        excerpt: post.excerpt(Post::EXCERPT_LEN),
        created_at: timestamp(&post.created_at),
        enter_delay_ms: millis(RenderPlan::card_delay(index)),
    }
}

pub fn post_detail(post: &Post) -> PostDetailResponse {
    PostDetailResponse {
        id: post.id.clone(),
        title: post.title.clone(),
        category: post.category.to_string(),
        badge_class: post.category.badge_class(),
        content: post.content.clone(),
        paragraphs: post.paragraphs(),
        created_at: timestamp(&post.created_at),
    }
}

pub fn view_response(criteria: &Criteria, view: &[Post], total_posts: usize) -> ViewResponse {
    ViewResponse {
        criteria: CriteriaResponse {
            category: criteria.category.to_string(),
            search: criteria.search().to_string(),
            range: criteria.date_range.to_string(),
            sort: criteria.sort.to_string(),
        },
        active_filter_count: criteria.active_filter_count(),
        total_posts,
        posts: view
            .iter()
            .enumerate()
            .map(|(index, post)| post_summary(index, post))
            .collect(),
    }
}

pub fn render_plan_response(plan: &RenderPlan) -> RenderPlanResponse {
    RenderPlanResponse {
        generation: plan.generation,
        duration_ms: millis(plan.duration()),
        steps: plan.steps.iter().map(render_step_response).collect(),
    }
}

fn render_step_response(step: &RenderStep) -> RenderStepResponse {
    let action = match step.action {
        RenderAction::HideEmptyState => RenderActionResponse::HideEmptyState,
        RenderAction::ClearGrid => RenderActionResponse::ClearGrid,
        RenderAction::ShowEmptyState => RenderActionResponse::ShowEmptyState,
        RenderAction::MarkCardsRemoving { count } => {
            RenderActionResponse::MarkCardsRemoving { count }
        }
        RenderAction::DisplayCards { count } => RenderActionResponse::DisplayCards {
            count,
            stagger_ms: millis(CARD_STAGGER),
        },
    };
    RenderStepResponse {
        delay_ms: millis(step.delay),
        action,
    }
}

pub fn dashboard_response(snapshot: &DashboardSnapshot) -> DashboardResponse {
    DashboardResponse {
        generation: snapshot.generation,
        view: view_response(&snapshot.criteria, &snapshot.posts, snapshot.total_posts),
        render_plan: render_plan_response(&snapshot.render_plan),
    }
}

pub fn criteria_from_query(query: &ViewQuery) -> Result<Criteria, DomainError> {
    let mut criteria = Criteria::default();
    if let Some(category) = &query.category {
        criteria.category = category.parse()?;
    }
    if let Some(search) = &query.search {
        criteria.set_search(search);
    }
    if let Some(range) = &query.range {
        criteria.date_range = range.parse()?;
    }
    if let Some(sort) = &query.sort {
        criteria.sort = sort.parse()?;
    }
    Ok(criteria)
}

pub fn criteria_event(request: &DashboardEventRequest) -> Result<CriteriaEvent, DomainError> {
    Ok(match request {
        DashboardEventRequest::SelectCategory(category) => {
            CriteriaEvent::SelectCategory(category.parse()?)
        }
        DashboardEventRequest::SearchInput(term) => CriteriaEvent::SearchInput(term.clone()),
        DashboardEventRequest::SelectDateRange(range) => {
            CriteriaEvent::SelectDateRange(range.parse()?)
        }
        DashboardEventRequest::SelectSort(sort) => CriteriaEvent::SelectSort(sort.parse()?),
        DashboardEventRequest::ClearFilters => CriteriaEvent::ClearFilters,
    })
}
