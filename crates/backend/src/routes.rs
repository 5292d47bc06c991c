use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::data::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let upload_limit = state.uploads.max_bytes;

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // COURSE CONTENT ADMIN
        // ========================================
        .route(
            "/api/admin/content",
            get(handlers::a001_course_content::list).post(handlers::a001_course_content::create),
        )
        .route(
            "/api/admin/content/gdlink",
            post(handlers::a001_course_content::change_drive_link),
        )
        .route(
            "/api/admin/course/:id",
            get(handlers::a001_course_content::get_course),
        )
        .route(
            "/api/admin/upload",
            post(handlers::upload::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
