use chrono::NaiveDate;
use entity::{department, employee};
use platform_api::{ApiError, ApiResult};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    money::cents_to_amount,
    paging::{Page, PageRequest},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: i32,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: i32,
    pub department: Option<String>,
    pub base_salary: f64,
    pub hire_date: NaiveDate,
    pub is_active: bool,
    pub version: i32,
}

impl EmployeeRow {
    fn from_models(model: employee::Model, department: Option<department::Model>) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name(),
            base_salary: cents_to_amount(model.base_salary_cents),
            department: department.map(|d| d.name),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            department_id: model.department_id,
            hire_date: model.hire_date,
            is_active: model.is_active,
            version: model.version,
        }
    }
}

/// Active employees, optionally restricted to one department, one page at a
/// time. Ordered by first name, last name, then id.
#[instrument(name = "hr.employees.list_active", skip(db))]
pub async fn list_active_employees<C: ConnectionTrait>(
    db: &C,
    department_id: Option<i32>,
    request: PageRequest,
) -> ApiResult<Page<EmployeeRow>> {
    if let Some(id) = department_id {
        department::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("department {id} not found")))?;
    }

    let mut query = employee::Entity::find().filter(employee::Column::IsActive.eq(true));
    if let Some(id) = department_id {
        query = query.filter(employee::Column::DepartmentId.eq(id));
    }

    let total_count = query.clone().count(db).await?;
    let window = request.window(total_count);
    let rows = query
        .find_also_related(department::Entity)
        .order_by_asc(employee::Column::FirstName)
        .order_by_asc(employee::Column::LastName)
        .order_by_asc(employee::Column::Id)
        .offset(window.offset)
        .limit(window.limit)
        .all(db)
        .await?;

    let items = rows
        .into_iter()
        .map(|(model, department)| EmployeeRow::from_models(model, department))
        .collect();
    Ok(Page::from_window(items, window, total_count))
}

#[instrument(name = "hr.employees.find", skip(db))]
pub async fn find_employee<C: ConnectionTrait>(db: &C, id: i32) -> ApiResult<EmployeeRow> {
    let (model, department) = employee::Entity::find_by_id(id)
        .find_also_related(department::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("employee {id} not found")))?;
    Ok(EmployeeRow::from_models(model, department))
}

pub async fn list_departments<C: ConnectionTrait>(db: &C) -> ApiResult<Vec<department::Model>> {
    Ok(department::Entity::find()
        .order_by_asc(department::Column::Name)
        .order_by_asc(department::Column::Id)
        .all(db)
        .await?)
}
