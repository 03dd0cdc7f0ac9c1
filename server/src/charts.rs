//! JSON chart feeds under `/api/charts`.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use platform_api::ApiResult;
use products_hr::reports::{
    self, AttendanceStatusCount, DepartmentCount, DepartmentPayroll, DepartmentPerformance,
    DepartmentSalary, DepartmentSummary, MonthlyCount, MonthlySalaryChange, ReportScope,
    SalaryDistribution,
};

use crate::http::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/charts/employees-by-department",
            get(employees_by_department),
        )
        .route(
            "/api/charts/avg-salary-by-department",
            get(avg_salary_by_department),
        )
        .route(
            "/api/charts/total-payroll-by-department",
            get(total_payroll_by_department),
        )
        .route("/api/charts/hiring-trend", get(hiring_trend))
        .route("/api/charts/salary-distribution", get(salary_distribution))
        .route("/api/charts/attendance-by-status", get(attendance_by_status))
        .route(
            "/api/charts/salary-vs-performance",
            get(salary_vs_performance),
        )
        .route(
            "/api/charts/salary-change-history",
            get(salary_change_history),
        )
        .route("/api/charts/department-summary", get(department_summary))
}

async fn employees_by_department(
    State(state): State<AppState>,
    Query(scope): Query<ReportScope>,
) -> ApiResult<Json<Vec<DepartmentCount>>> {
    Ok(Json(
        reports::employees_by_department(&state.pool, scope).await?,
    ))
}

async fn avg_salary_by_department(
    State(state): State<AppState>,
    Query(scope): Query<ReportScope>,
) -> ApiResult<Json<Vec<DepartmentSalary>>> {
    Ok(Json(
        reports::average_salary_by_department(&state.pool, scope).await?,
    ))
}

async fn total_payroll_by_department(
    State(state): State<AppState>,
    Query(scope): Query<ReportScope>,
) -> ApiResult<Json<Vec<DepartmentPayroll>>> {
    Ok(Json(
        reports::total_payroll_by_department(&state.pool, scope).await?,
    ))
}

async fn hiring_trend(State(state): State<AppState>) -> ApiResult<Json<Vec<MonthlyCount>>> {
    Ok(Json(reports::hiring_trend(&state.pool).await?))
}

async fn salary_distribution(State(state): State<AppState>) -> ApiResult<Json<SalaryDistribution>> {
    Ok(Json(reports::salary_distribution(&state.pool).await?))
}

async fn attendance_by_status(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AttendanceStatusCount>>> {
    Ok(Json(reports::attendance_by_status(&state.pool).await?))
}

async fn salary_vs_performance(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentPerformance>>> {
    Ok(Json(reports::salary_vs_performance(&state.pool).await?))
}

async fn salary_change_history(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MonthlySalaryChange>>> {
    Ok(Json(reports::salary_change_history(&state.pool).await?))
}

async fn department_summary(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentSummary>>> {
    Ok(Json(reports::department_salary_summary(&state.pool).await?))
}
