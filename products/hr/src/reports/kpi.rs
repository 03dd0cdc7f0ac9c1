use platform_api::ApiResult;
use sea_orm::{ConnectionTrait, FromQueryResult};
use serde::Serialize;
use tracing::instrument;

use crate::{
    money::{average_to_amount, cents_to_amount},
    sql::statement,
};

/// Headline workforce figures. Payroll and average cover all employees,
/// active or not.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    pub total_employees: i64,
    pub active_employees: i64,
    pub inactive_employees: i64,
    pub total_payroll: f64,
    pub average_salary: f64,
    pub departments_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct KpiRow {
    total_employees: i64,
    active_employees: i64,
    total_payroll_cents: i64,
    average_salary_cents: Option<f64>,
    departments_count: i64,
}

impl From<KpiRow> for KpiSnapshot {
    fn from(row: KpiRow) -> Self {
        Self {
            total_employees: row.total_employees,
            active_employees: row.active_employees,
            inactive_employees: row.total_employees - row.active_employees,
            total_payroll: cents_to_amount(row.total_payroll_cents),
            average_salary: average_to_amount(row.average_salary_cents),
            departments_count: row.departments_count,
        }
    }
}

const KPI_SQL: &str = "SELECT COUNT(*) AS total_employees, \
    CAST(COALESCE(SUM(CASE WHEN e.is_active THEN 1 ELSE 0 END), 0) AS BIGINT) AS active_employees, \
    CAST(COALESCE(SUM(e.base_salary_cents), 0) AS BIGINT) AS total_payroll_cents, \
    CAST(AVG(e.base_salary_cents) AS DOUBLE PRECISION) AS average_salary_cents, \
    (SELECT COUNT(*) FROM department) AS departments_count \
    FROM employee e";

#[instrument(name = "hr.reports.kpi_snapshot", skip(db))]
pub async fn kpi_snapshot<C: ConnectionTrait>(db: &C) -> ApiResult<KpiSnapshot> {
    let row = KpiRow::find_by_statement(statement(db, KPI_SQL))
        .one(db)
        .await?;
    Ok(row.map(KpiSnapshot::from).unwrap_or_default())
}
