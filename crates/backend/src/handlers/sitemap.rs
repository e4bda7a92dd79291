use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use crate::seo::{sitemap_builder, sitemap_xml};
use crate::shared::config;

/// GET /sitemap.xml
///
/// Recomputed from the static tables on every request; `lastmod` for
/// non-blog pages is the request time.
pub async fn sitemap() -> Response {
    let entries = sitemap_builder::build_sitemap_entries(config::site_url(), Utc::now());
    let xml = sitemap_xml::render_sitemap(&entries);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// GET /robots.txt
pub async fn robots() -> Response {
    let body = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        config::site_url()
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
