//! HR vertical slice.
//!
//! Aggregate workforce reports, the paginated employee listing and the
//! salary-increase write path. Every operation runs against any sea-orm
//! connection; Postgres in production, SQLite in tests.

pub mod employees;
pub mod money;
pub mod paging;
pub mod reports;
pub mod salary;
pub mod seed;
mod sql;

pub use employees::{EmployeeRow, find_employee, list_active_employees, list_departments};
pub use paging::{Page, PageRequest};
pub use reports::{MonthKey, ReportScope, SalaryBand, SalaryDistribution};
pub use salary::{SalaryChange, SalaryIncrease, increase_salary};
pub use seed::{SeedSummary, seed_demo};
