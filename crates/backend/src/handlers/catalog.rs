use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::catalog::{CalculatorCategory, CalculatorDefinition, CategoryInfo};

use crate::content::calculators;

/// GET /api/categories
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        CalculatorCategory::all()
            .iter()
            .map(CalculatorCategory::info)
            .collect(),
    )
}

/// GET /api/calculators
pub async fn list_all() -> Json<&'static [CalculatorDefinition]> {
    Json(calculators::all_calculators())
}

/// GET /api/calculators/:category
pub async fn list_by_category(
    Path(category): Path<String>,
) -> Result<Json<Vec<&'static CalculatorDefinition>>, StatusCode> {
    let category =
        CalculatorCategory::from_slug(&category).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(
        calculators::calculators_in_category(category).collect(),
    ))
}
