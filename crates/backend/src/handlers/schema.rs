use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::catalog::CalculatorCategory;
use contracts::seo::{CalculatorPageSchemas, CategoryPageSchemas};

use crate::content::calculators;
use crate::seo::schema_gen;
use crate::shared::config;

/// GET /api/schema/calculator/:category/:slug
///
/// Every JSON-LD block a calculator page embeds. `faqPage` is absent when
/// the calculator has no FAQs.
pub async fn calculator_page(
    Path((category, slug)): Path<(String, String)>,
) -> Result<Json<CalculatorPageSchemas>, StatusCode> {
    let category = CalculatorCategory::from_slug(&category).ok_or(StatusCode::NOT_FOUND)?;
    let calc = calculators::find_calculator(category, &slug).ok_or(StatusCode::NOT_FOUND)?;

    let site_url = config::site_url();
    Ok(Json(CalculatorPageSchemas {
        web_application: schema_gen::calculator_schema(site_url, calc),
        faq_page: schema_gen::faq_schema(calc.faqs),
        breadcrumb: schema_gen::calculator_breadcrumb(site_url, calc),
    }))
}

/// GET /api/schema/category/:category
pub async fn category_page(
    Path(category): Path<String>,
) -> Result<Json<CategoryPageSchemas>, StatusCode> {
    let category = CalculatorCategory::from_slug(&category).ok_or(StatusCode::NOT_FOUND)?;

    let site_url = config::site_url();
    let category_path = format!("/calculators/{}", category.slug());
    let trail: [(&str, &str); 2] = [
        ("Calculators", "/calculators"),
        (category.display_name(), &category_path),
    ];
    Ok(Json(CategoryPageSchemas {
        collection_page: schema_gen::collection_schema(site_url, category),
        breadcrumb: schema_gen::breadcrumb_schema(site_url, &trail),
    }))
}
