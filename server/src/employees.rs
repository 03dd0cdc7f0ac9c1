use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use platform_api::{ApiError, ApiResult};
use products_hr::{
    EmployeeRow, Page, PageRequest, SalaryChange, SalaryIncrease, increase_salary,
    list_active_employees, list_departments, reports,
};
use serde::Deserialize;

use crate::{
    http::AppState,
    views::{self, ListingLinks},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_json))
        .route("/api/employees/{id}/salary-increase", post(salary_increase_json))
        .route("/employees", get(list_page))
        .route("/employees/by-department", get(by_department_page))
        .route("/employees/department-summary", get(department_summary_page))
        .route(
            "/employees/increase-salary",
            get(increase_salary_form).post(increase_salary_form),
        )
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingQuery {
    page: Option<i64>,
    page_size: Option<i64>,
    /// Kept as text so the "all departments" form option (`departmentId=`)
    /// means no filter.
    department_id: Option<String>,
}

impl ListingQuery {
    fn page_request(&self, state: &AppState) -> ApiResult<PageRequest> {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(state.config.default_page_size),
        )
    }

    fn department_id(&self) -> ApiResult<Option<i32>> {
        match self.department_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ApiError::validation(format!("invalid departmentId: {raw}"))),
        }
    }
}

async fn list_json(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<Json<Page<EmployeeRow>>> {
    let request = query.page_request(&state)?;
    let page = list_active_employees(&state.pool, query.department_id()?, request).await?;
    Ok(Json(page))
}

async fn list_page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<Html<String>> {
    let request = query.page_request(&state)?;
    let page = list_active_employees(&state.pool, None, request).await?;
    let links = ListingLinks {
        path: "/employees",
        department_id: None,
    };
    Ok(views::employee_list("Employees", &page, &links, None))
}

async fn by_department_page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<Html<String>> {
    let request = query.page_request(&state)?;
    let department_id = query.department_id()?;
    let page = list_active_employees(&state.pool, department_id, request).await?;
    let departments = list_departments(&state.pool).await?;
    let links = ListingLinks {
        path: "/employees/by-department",
        department_id,
    };
    Ok(views::employee_list(
        "Employees by department",
        &page,
        &links,
        Some(&departments),
    ))
}

async fn department_summary_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let rows = reports::department_salary_summary(&state.pool).await?;
    Ok(views::department_summary(&rows))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SalaryIncreaseBody {
    percentage: Option<f64>,
    expected_version: Option<i32>,
}

async fn salary_increase_json(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<SalaryIncreaseBody>,
) -> ApiResult<Json<SalaryChange>> {
    let mut request = SalaryIncrease::new(
        id,
        body.percentage.unwrap_or(state.config.default_raise_percent),
    );
    if let Some(version) = body.expected_version {
        request = request.expecting_version(version);
    }
    Ok(Json(increase_salary(&state.pool, request).await?))
}

#[derive(Debug, Deserialize)]
struct IncreaseSalaryQuery {
    id: i32,
    percentage: Option<f64>,
    version: Option<i32>,
}

async fn increase_salary_form(
    State(state): State<AppState>,
    Query(query): Query<IncreaseSalaryQuery>,
) -> ApiResult<Redirect> {
    let mut request = SalaryIncrease::new(
        query.id,
        query
            .percentage
            .unwrap_or(state.config.default_raise_percent),
    );
    if let Some(version) = query.version {
        request = request.expecting_version(version);
    }
    increase_salary(&state.pool, request).await?;
    Ok(Redirect::to("/employees"))
}
