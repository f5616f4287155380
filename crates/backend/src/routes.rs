use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, shared};

/// Конфигурация всех роутов приложения
///
/// Everything outside `/api` and `/health` is served from `static_dir`,
/// the compiled frontend.
pub fn configure_routes(static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Sales overview
        .route("/api/sales", get(handlers::d100_sales_overview::get_sales))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(shared::logger::request_logger))
        .layer(cors)
}
