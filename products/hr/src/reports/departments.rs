use entity::department_salary_summary;
use platform_api::ApiResult;
use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult, QueryOrder};
use serde::Serialize;
use tracing::instrument;

use super::ReportScope;
use crate::{
    money::{average_to_amount, cents_to_amount, round2},
    sql::statement,
};

const DEPARTMENT_JOIN: &str = "FROM employee e JOIN department d ON d.id = e.department_id";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSalary {
    pub department: String,
    pub avg_salary: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayroll {
    pub department: String,
    pub total_payroll: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct AttendanceStatusCount {
    pub department: String,
    pub status: String,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPerformance {
    pub department: String,
    pub avg_performance_rating: f64,
    pub avg_salary: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub department: String,
    pub total_employees: i64,
    pub average_salary: f64,
    pub total_salary: f64,
}

#[derive(Debug, FromQueryResult)]
struct AverageRow {
    department: String,
    avg_salary_cents: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    department: String,
    total_cents: i64,
}

#[derive(Debug, FromQueryResult)]
struct PerformanceRow {
    department: String,
    avg_salary_cents: Option<f64>,
    avg_rating: Option<f64>,
}

#[instrument(name = "hr.reports.employees_by_department", skip(db))]
pub async fn employees_by_department<C: ConnectionTrait>(
    db: &C,
    scope: ReportScope,
) -> ApiResult<Vec<DepartmentCount>> {
    let sql = format!(
        "SELECT d.name AS department, COUNT(*) AS count \
         {DEPARTMENT_JOIN} {} \
         GROUP BY d.name ORDER BY d.name",
        scope.where_clause()
    );
    Ok(DepartmentCount::find_by_statement(statement(db, sql))
        .all(db)
        .await?)
}

#[instrument(name = "hr.reports.average_salary_by_department", skip(db))]
pub async fn average_salary_by_department<C: ConnectionTrait>(
    db: &C,
    scope: ReportScope,
) -> ApiResult<Vec<DepartmentSalary>> {
    let sql = format!(
        "SELECT d.name AS department, \
         CAST(AVG(e.base_salary_cents) AS DOUBLE PRECISION) AS avg_salary_cents \
         {DEPARTMENT_JOIN} {} \
         GROUP BY d.name ORDER BY d.name",
        scope.where_clause()
    );
    let rows = AverageRow::find_by_statement(statement(db, sql))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| DepartmentSalary {
            department: row.department,
            avg_salary: average_to_amount(row.avg_salary_cents),
        })
        .collect())
}

#[instrument(name = "hr.reports.total_payroll_by_department", skip(db))]
pub async fn total_payroll_by_department<C: ConnectionTrait>(
    db: &C,
    scope: ReportScope,
) -> ApiResult<Vec<DepartmentPayroll>> {
    let sql = format!(
        "SELECT d.name AS department, \
         CAST(COALESCE(SUM(e.base_salary_cents), 0) AS BIGINT) AS total_cents \
         {DEPARTMENT_JOIN} {} \
         GROUP BY d.name ORDER BY d.name",
        scope.where_clause()
    );
    let rows = TotalRow::find_by_statement(statement(db, sql))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| DepartmentPayroll {
            department: row.department,
            total_payroll: cents_to_amount(row.total_cents),
        })
        .collect())
}

#[instrument(name = "hr.reports.attendance_by_status", skip(db))]
pub async fn attendance_by_status<C: ConnectionTrait>(
    db: &C,
) -> ApiResult<Vec<AttendanceStatusCount>> {
    let sql = "SELECT d.name AS department, a.status AS status, COUNT(*) AS count \
               FROM attendance a \
               JOIN employee e ON e.id = a.employee_id \
               JOIN department d ON d.id = e.department_id \
               GROUP BY d.name, a.status \
               ORDER BY d.name, a.status";
    Ok(AttendanceStatusCount::find_by_statement(statement(db, sql))
        .all(db)
        .await?)
}

/// Average salary and average review rating per department. A department
/// whose employees have no reviews reports a rating of zero.
#[instrument(name = "hr.reports.salary_vs_performance", skip(db))]
pub async fn salary_vs_performance<C: ConnectionTrait>(
    db: &C,
) -> ApiResult<Vec<DepartmentPerformance>> {
    let sql = format!(
        "SELECT d.name AS department, \
         CAST(AVG(e.base_salary_cents) AS DOUBLE PRECISION) AS avg_salary_cents, \
         (SELECT CAST(AVG(pr.rating) AS DOUBLE PRECISION) \
            FROM performance_review pr \
            JOIN employee re ON re.id = pr.employee_id \
            JOIN department rd ON rd.id = re.department_id \
           WHERE rd.name = d.name) AS avg_rating \
         {DEPARTMENT_JOIN} \
         GROUP BY d.name ORDER BY d.name"
    );
    let rows = PerformanceRow::find_by_statement(statement(db, sql))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| DepartmentPerformance {
            department: row.department,
            avg_performance_rating: row.avg_rating.map(round2).unwrap_or(0.0),
            avg_salary: average_to_amount(row.avg_salary_cents),
        })
        .collect())
}

#[instrument(name = "hr.reports.department_salary_summary", skip(db))]
pub async fn department_salary_summary<C: ConnectionTrait>(
    db: &C,
) -> ApiResult<Vec<DepartmentSummary>> {
    let rows = department_salary_summary::Entity::find()
        .order_by_asc(department_salary_summary::Column::DepartmentName)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| DepartmentSummary {
            department: row.department_name,
            total_employees: row.total_employees,
            average_salary: average_to_amount(Some(row.average_salary_cents)),
            total_salary: cents_to_amount(row.total_payroll_cents),
        })
        .collect())
}
