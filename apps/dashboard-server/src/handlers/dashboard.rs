//! Session dashboard handlers.
//!
//! The server keeps one [`Dashboard`](blogdash_core::Dashboard). Criteria
//! events are applied through the reducer; search input goes through the
//! debouncer so a burst of keystrokes recomputes once.

use actix_web::{HttpResponse, web};

use blogdash_core::domain::CriteriaEvent;
use blogdash_shared::dto::{DashboardEventRequest, DashboardQuery, EventAcceptedResponse};

use super::views;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
///
/// With `?generation=N`, answers 304 when `N` is still the latest view.
pub async fn get_dashboard(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> AppResult<HttpResponse> {
    let snapshot = {
        let dashboard = state.dashboard.read().await;
        if query.generation.is_some_and(|g| dashboard.is_current(g)) {
            return Ok(HttpResponse::NotModified().finish());
        }
        dashboard.snapshot()
    };
    Ok(HttpResponse::Ok().json(views::dashboard_response(&snapshot)))
}

/// POST /api/dashboard/events
pub async fn dispatch_event(
    state: web::Data<AppState>,
    body: web::Json<DashboardEventRequest>,
) -> AppResult<HttpResponse> {
    let event = views::criteria_event(&body)?;

    if event.is_debounced() {
        let generation = state.dashboard.read().await.generation();
        let dashboard = state.dashboard.clone();

        state
            .search_debouncer
            .schedule(move || async move {
                let mut dashboard = dashboard.write().await;
                let generation = dashboard.dispatch(&event);
                tracing::debug!(generation, "Debounced search applied");
            })
            .await;

        let delay = state.search_debouncer.delay();
        return Ok(HttpResponse::Accepted().json(EventAcceptedResponse {
            debounced: true,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            generation,
        }));
    }

    if matches!(event, CriteriaEvent::ClearFilters)
        && state.search_debouncer.cancel().await
    {
        tracing::debug!("Pending search dropped by clear");
    }

    let snapshot = {
        let mut dashboard = state.dashboard.write().await;
        let generation = dashboard.dispatch(&event);
        tracing::debug!(generation, ?event, "Criteria updated");
        dashboard.snapshot()
    };

    Ok(HttpResponse::Ok().json(views::dashboard_response(&snapshot)))
}

/// POST /api/dashboard/reset
pub async fn reset_dashboard(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.search_debouncer.cancel().await;

    let snapshot = {
        let mut dashboard = state.dashboard.write().await;
        dashboard.reset();
        tracing::info!(generation = dashboard.generation(), "Dashboard reset");
        dashboard.snapshot()
    };

    Ok(HttpResponse::Ok().json(views::dashboard_response(&snapshot)))
}
