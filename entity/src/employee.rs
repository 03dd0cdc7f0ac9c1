use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    #[sea_orm(indexed)]
    pub department_id: i32,
    /// Monthly base salary in cents.
    pub base_salary_cents: i64,
    pub hire_date: Date,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    /// Optimistic concurrency token, bumped on every salary write.
    pub version: i32,
}

impl Model {
    /// Display name derived from the first and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::performance_review::Entity")]
    PerformanceReview,
    #[sea_orm(has_many = "super::salary_history::Entity")]
    SalaryHistory,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::performance_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PerformanceReview.def()
    }
}

impl Related<super::salary_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalaryHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
