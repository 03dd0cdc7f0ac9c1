use axum::{Json, Router, extract::State, response::Html, routing::get};
use platform_api::ApiResult;
use products_hr::reports::{self, KpiSnapshot, ReportScope};
use serde::Serialize;

use crate::{http::AppState, views};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_page))
        .route("/dashboard-full", get(dashboard_full_page))
        .route("/api/dashboard/kpi", get(kpi))
        .route(
            "/api/dashboard/salary-by-department",
            get(salary_by_department),
        )
        .route("/api/dashboard/hiring-trend", get(hiring_trend))
}

async fn dashboard_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let kpi = reports::kpi_snapshot(&state.pool).await?;
    Ok(views::dashboard(&kpi))
}

async fn dashboard_full_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let kpi = reports::kpi_snapshot(&state.pool).await?;
    Ok(views::dashboard_full(&kpi))
}

async fn kpi(State(state): State<AppState>) -> ApiResult<Json<KpiSnapshot>> {
    Ok(Json(reports::kpi_snapshot(&state.pool).await?))
}

/// Older dashboard widgets read `averageSalary` rather than `avgSalary`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SalaryByDepartment {
    department: String,
    average_salary: f64,
}

#[derive(Serialize)]
struct HiringPoint {
    month: String,
    count: i64,
}

async fn salary_by_department(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SalaryByDepartment>>> {
    let rows = reports::average_salary_by_department(&state.pool, ReportScope::all()).await?;
    Ok(Json(
        rows.into_iter()
            .map(|row| SalaryByDepartment {
                department: row.department,
                average_salary: row.avg_salary,
            })
            .collect(),
    ))
}

async fn hiring_trend(State(state): State<AppState>) -> ApiResult<Json<Vec<HiringPoint>>> {
    let rows = reports::hiring_trend(&state.pool).await?;
    Ok(Json(
        rows.into_iter()
            .map(|row| HiringPoint {
                month: row.year_month.to_string(),
                count: row.count,
            })
            .collect(),
    ))
}
