use sea_orm::entity::prelude::*;

/// Read-only mapping over the `department_salary_summary` view.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "department_salary_summary")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub department_name: String,
    pub total_employees: i64,
    pub average_salary_cents: f64,
    pub total_payroll_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
