use chrono::Utc;
use entity::{employee, salary_history};
use platform_api::{ApiError, ApiResult};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseTransaction, DbBackend, EntityTrait, QueryFilter,
    QuerySelect, TransactionTrait, prelude::DateTimeWithTimeZone,
    sea_query::Expr,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::money::{apply_percentage, cents_to_amount};

/// Attempts made when the caller did not pin a version. Only backends without
/// row locks ever need more than one.
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalaryIncrease {
    pub employee_id: i32,
    pub percentage: f64,
    /// When set, the increase only applies to this exact version and is
    /// never retried.
    pub expected_version: Option<i32>,
}

impl SalaryIncrease {
    pub fn new(employee_id: i32, percentage: f64) -> Self {
        Self {
            employee_id,
            percentage,
            expected_version: None,
        }
    }

    pub fn expecting_version(mut self, version: i32) -> Self {
        self.expected_version = Some(version);
        self
    }

    fn validate(&self) -> ApiResult<()> {
        if !self.percentage.is_finite() || self.percentage <= -100.0 {
            return Err(ApiError::validation(
                "percentage must be a finite number greater than -100",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryChange {
    pub employee_id: i32,
    pub old_salary: f64,
    pub new_salary: f64,
    pub version: i32,
    pub changed_at: DateTimeWithTimeZone,
}

/// Raises one employee's base salary by a percentage and appends the
/// matching salary-history row, atomically.
#[instrument(
    name = "hr.salary.increase",
    skip(db),
    fields(employee_id = request.employee_id, percentage = request.percentage)
)]
pub async fn increase_salary<C>(db: &C, request: SalaryIncrease) -> ApiResult<SalaryChange>
where
    C: ConnectionTrait + TransactionTrait,
{
    request.validate()?;
    let attempts = if request.expected_version.is_some() {
        1
    } else {
        MAX_ATTEMPTS
    };

    let mut attempt = 1;
    loop {
        let txn = db.begin().await?;
        match apply_increase(&txn, &request).await {
            Ok(change) => {
                txn.commit().await?;
                info!(
                    old_salary = change.old_salary,
                    new_salary = change.new_salary,
                    version = change.version,
                    "salary increased"
                );
                return Ok(change);
            }
            Err(err) if err.is_conflict() && attempt < attempts => {
                warn!(attempt, "concurrent salary write, retrying");
                drop(txn);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn apply_increase(
    txn: &DatabaseTransaction,
    request: &SalaryIncrease,
) -> ApiResult<SalaryChange> {
    let id = request.employee_id;
    // Row lock: concurrent raises queue here instead of failing the version check.
    let mut select = employee::Entity::find_by_id(id);
    if txn.get_database_backend() != DbBackend::Sqlite {
        select = select.lock_exclusive();
    }
    let current = select
        .one(txn)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("employee {id} not found")))?;

    match request.expected_version {
        Some(expected) if expected != current.version => {
            return Err(ApiError::conflict(format!(
                "employee {id} is at version {}, not {expected}",
                current.version
            )));
        }
        _ => {}
    }

    let old_cents = current.base_salary_cents;
    let new_cents = apply_percentage(old_cents, request.percentage);

    let updated = employee::Entity::update_many()
        .col_expr(employee::Column::BaseSalaryCents, Expr::value(new_cents))
        .col_expr(
            employee::Column::Version,
            Expr::col(employee::Column::Version).add(1),
        )
        .filter(employee::Column::Id.eq(id))
        .filter(employee::Column::Version.eq(current.version))
        .exec(txn)
        .await?;
    if updated.rows_affected == 0 {
        return Err(ApiError::conflict(format!(
            "employee {id} was modified concurrently"
        )));
    }

    let changed_at: DateTimeWithTimeZone = Utc::now().fixed_offset();
    let history = salary_history::ActiveModel {
        id: NotSet,
        employee_id: Set(id),
        old_salary_cents: Set(old_cents),
        new_salary_cents: Set(new_cents),
        change_date: Set(changed_at),
    };
    salary_history::Entity::insert(history)
        .exec_without_returning(txn)
        .await?;

    Ok(SalaryChange {
        employee_id: id,
        old_salary: cents_to_amount(old_cents),
        new_salary: cents_to_amount(new_cents),
        version: current.version + 1,
        changed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bounds() {
        for good in [10.0, 0.01, 0.0, -5.0, 150.0] {
            assert!(SalaryIncrease::new(1, good).validate().is_ok(), "percentage {good}");
        }
        for bad in [-100.0, -250.0, f64::NAN, f64::INFINITY] {
            let err = SalaryIncrease::new(1, bad).validate().unwrap_err();
            assert_eq!(err.code(), "VALIDATION", "percentage {bad}");
        }
    }

    #[test]
    fn expecting_version_pins_the_request() {
        let request = SalaryIncrease::new(7, 10.0).expecting_version(3);
        assert_eq!(request.expected_version, Some(3));
    }
}
