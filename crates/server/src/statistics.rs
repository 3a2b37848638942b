//! Statistics API endpoints.

use axum::Json;

use api_types::category::{CategoriesRequest, CategoriesResponse, CategoryView};
use api_types::projection::{ProjectionRequest, ProjectionResponse};
use engine::MonthWindow;

use crate::{ServerError, wire};

/// Handle requests for a month-end spending projection.
pub async fn projection(
    Json(payload): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, ServerError> {
    let expenses = wire::expenses_from_wire(payload.expenses)?;

    let window = MonthWindow::for_date(payload.date);
    let projection = engine::project_for_date(&expenses, payload.date)?;

    Ok(Json(ProjectionResponse {
        spent: projection.spent.to_major_f64(),
        daily_average: projection.daily_average.to_major_f64(),
        projected: projection.projected.to_major_f64(),
        days_elapsed: window.days_elapsed,
        days_in_month: window.days_in_month,
    }))
}

/// Handle requests for the per-category spending breakdown.
pub async fn categories(
    Json(payload): Json<CategoriesRequest>,
) -> Result<Json<CategoriesResponse>, ServerError> {
    let expenses = wire::expenses_from_wire(payload.expenses)?;

    let categories = engine::spending_by_category(&expenses)
        .into_iter()
        .map(|stat| CategoryView {
            key: stat.key,
            spent: stat.spent.to_major_f64(),
            count: stat.count,
            percentage: stat.percentage,
        })
        .collect();

    Ok(Json(CategoriesResponse { categories }))
}
