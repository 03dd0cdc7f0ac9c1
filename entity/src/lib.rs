//! sea-orm entities for the HR schema.

pub mod attendance;
pub mod department;
pub mod department_salary_summary;
pub mod employee;
pub mod performance_review;
pub mod salary_history;

pub mod prelude {
    pub use super::attendance::Entity as Attendance;
    pub use super::department::Entity as Department;
    pub use super::department_salary_summary::Entity as DepartmentSalarySummary;
    pub use super::employee::Entity as Employee;
    pub use super::performance_review::Entity as PerformanceReview;
    pub use super::salary_history::Entity as SalaryHistory;
}
