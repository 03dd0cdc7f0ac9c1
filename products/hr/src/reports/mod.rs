//! Aggregate workforce reports.
//!
//! Each report is a single grouped query. Grouped reports inner-join
//! employee to department and return an empty list (never an error) when
//! the underlying tables are empty. Averages over empty groups report zero.

mod departments;
mod distribution;
mod kpi;
mod trends;

pub use departments::{
    AttendanceStatusCount, DepartmentCount, DepartmentPayroll, DepartmentPerformance,
    DepartmentSalary, DepartmentSummary, attendance_by_status, average_salary_by_department,
    department_salary_summary, employees_by_department, salary_vs_performance,
    total_payroll_by_department,
};
pub use distribution::{SalaryBand, SalaryDistribution, salary_distribution};
pub use kpi::{KpiSnapshot, kpi_snapshot};
pub use trends::{MonthKey, MonthlyCount, MonthlySalaryChange, hiring_trend, salary_change_history};

use serde::Deserialize;

/// Which employees a department grouping covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportScope {
    #[serde(default)]
    pub active_only: bool,
}

impl ReportScope {
    pub fn all() -> Self {
        Self { active_only: false }
    }

    pub fn active() -> Self {
        Self { active_only: true }
    }

    fn where_clause(&self) -> &'static str {
        if self.active_only {
            "WHERE e.is_active"
        } else {
            ""
        }
    }
}
