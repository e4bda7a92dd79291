use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::seo::locale_map;

#[derive(Debug, Deserialize)]
pub struct AlternateQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateResponse {
    pub path: String,
    pub locale: &'static str,
    /// `null` when the page has no counterpart; callers must then omit the
    /// hreflang link instead of emitting a broken one
    pub alternate: Option<&'static str>,
}

/// GET /api/alternate?path=/calculators/finance/tax-calculator
///
/// Exact-key lookup in the locale mapping tables; no normalization.
pub async fn alternate(Query(query): Query<AlternateQuery>) -> Json<AlternateResponse> {
    let is_turkish = query.path == "/tr" || query.path.starts_with("/tr/");
    let (locale, alternate) = if is_turkish {
        ("tr", locale_map::english_path(&query.path))
    } else {
        ("en", locale_map::turkish_path(&query.path))
    };
    Json(AlternateResponse {
        path: query.path,
        locale,
        alternate,
    })
}
