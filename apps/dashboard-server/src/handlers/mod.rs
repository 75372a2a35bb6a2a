//! HTTP handlers and route configuration.

mod dashboard;
mod health;
mod posts;
mod views;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/categories", web::get().to(posts::list_categories))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post)),
            )
            .service(
                web::scope("/dashboard")
                    .route("", web::get().to(dashboard::get_dashboard))
                    .route("/events", web::post().to(dashboard::dispatch_event))
                    .route("/reset", web::post().to(dashboard::reset_dashboard)),
            ),
    );
}
