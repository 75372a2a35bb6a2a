//! Post handlers.

use actix_web::{HttpResponse, web};

use blogdash_core::DomainError;
use blogdash_core::domain::CategoryFilter;
use blogdash_core::engine::recompute;
use blogdash_shared::ApiResponse;
use blogdash_shared::dto::{CategoryResponse, CreatePostRequest, ViewQuery};

use super::views;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories() -> HttpResponse {
    let categories: Vec<CategoryResponse> = CategoryFilter::chips()
        .map(|chip| CategoryResponse {
            name: chip.to_string(),
            assignable: chip != CategoryFilter::All,
        })
        .collect();

    HttpResponse::Ok().json(ApiResponse::ok(categories))
}

/// GET /api/posts - stateless view over the store; the session criteria
/// are not touched.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ViewQuery>,
) -> AppResult<HttpResponse> {
    let criteria = views::criteria_from_query(&query)?;

    let dashboard = state.dashboard.read().await;
    let posts = dashboard.store().posts();
    let view = recompute(&criteria, posts);

    Ok(HttpResponse::Ok().json(views::view_response(&criteria, &view, posts.len())))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let dashboard = state.dashboard.read().await;

    let post = dashboard
        .store()
        .get(&id)
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Post",
            id: id.clone(),
        })?;

    Ok(HttpResponse::Ok().json(views::post_detail(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Held across the write so stored snapshots follow creation order.
    let mut dashboard = state.dashboard.write().await;

    let post = dashboard
        .create_post(&req.title, &req.category, &req.content)
        .inspect_err(|e| tracing::debug!(error = %e, "Post rejected"))?;

    tracing::info!(post_id = %post.id, category = %post.category, "Post created");

    if let Some(archive) = &state.archive {
        if let Err(e) = archive.save(dashboard.store().posts()).await {
            tracing::error!(post_id = %post.id, error = %e, "Failed to persist posts");
        }
    }

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        views::post_detail(&post),
        "Blog added successfully!",
    )))
}
