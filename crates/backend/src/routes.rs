use axum::{routing::get, Router};

use crate::handlers;

/// Route configuration for the whole application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CRAWLER SURFACES
        // ========================================
        .route("/sitemap.xml", get(handlers::sitemap::sitemap))
        .route("/robots.txt", get(handlers::sitemap::robots))
        // ========================================
        // CATALOG API
        // ========================================
        .route("/api/categories", get(handlers::catalog::list_categories))
        .route("/api/calculators", get(handlers::catalog::list_all))
        .route(
            "/api/calculators/:category",
            get(handlers::catalog::list_by_category),
        )
        // ========================================
        // STRUCTURED DATA API
        // ========================================
        .route(
            "/api/schema/calculator/:category/:slug",
            get(handlers::schema::calculator_page),
        )
        .route(
            "/api/schema/category/:category",
            get(handlers::schema::category_page),
        )
        // ========================================
        // LOCALE
        // ========================================
        .route("/api/alternate", get(handlers::locale::alternate))
}
