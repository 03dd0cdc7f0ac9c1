use std::fmt;

use anyhow::anyhow;
use platform_api::{ApiError, ApiResult};
use sea_orm::{ConnectionTrait, FromQueryResult};
use serde::{Serialize, Serializer};
use tracing::instrument;

use crate::{
    money::average_to_amount,
    sql::{statement, year_month_exprs},
};

/// Year/month bucket. Displays as `YYYY-MM`; ordering is chronological and
/// matches the lexicographic order of the display form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((0..=9999).contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    fn from_row(year: i64, month: i64) -> ApiResult<Self> {
        i32::try_from(year)
            .ok()
            .zip(u32::try_from(month).ok())
            .and_then(|(y, m)| Self::new(y, m))
            .ok_or_else(|| ApiError::internal(anyhow!("invalid month bucket {year}-{month}")))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub year_month: MonthKey,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalaryChange {
    pub year_month: MonthKey,
    pub avg_new_salary: f64,
    pub avg_old_salary: f64,
}

#[derive(Debug, FromQueryResult)]
struct HiringRow {
    year: i64,
    month: i64,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct SalaryChangeRow {
    year: i64,
    month: i64,
    avg_new_cents: Option<f64>,
    avg_old_cents: Option<f64>,
}

#[instrument(name = "hr.reports.hiring_trend", skip(db))]
pub async fn hiring_trend<C: ConnectionTrait>(db: &C) -> ApiResult<Vec<MonthlyCount>> {
    let (year, month) = year_month_exprs(db.get_database_backend(), "e.hire_date");
    let sql = format!(
        "SELECT {year} AS year, {month} AS month, COUNT(*) AS count \
         FROM employee e GROUP BY 1, 2 ORDER BY 1, 2"
    );
    let rows = HiringRow::find_by_statement(statement(db, sql))
        .all(db)
        .await?;
    let mut trend = rows
        .into_iter()
        .map(|row| {
            Ok(MonthlyCount {
                year_month: MonthKey::from_row(row.year, row.month)?,
                count: row.count,
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;
    trend.sort_by_key(|point| point.year_month);
    Ok(trend)
}

#[instrument(name = "hr.reports.salary_change_history", skip(db))]
pub async fn salary_change_history<C: ConnectionTrait>(
    db: &C,
) -> ApiResult<Vec<MonthlySalaryChange>> {
    let (year, month) = year_month_exprs(db.get_database_backend(), "sh.change_date");
    let sql = format!(
        "SELECT {year} AS year, {month} AS month, \
         CAST(AVG(sh.new_salary_cents) AS DOUBLE PRECISION) AS avg_new_cents, \
         CAST(AVG(sh.old_salary_cents) AS DOUBLE PRECISION) AS avg_old_cents \
         FROM salary_history sh GROUP BY 1, 2 ORDER BY 1, 2"
    );
    let rows = SalaryChangeRow::find_by_statement(statement(db, sql))
        .all(db)
        .await?;
    let mut history = rows
        .into_iter()
        .map(|row| {
            Ok(MonthlySalaryChange {
                year_month: MonthKey::from_row(row.year, row.month)?,
                avg_new_salary: average_to_amount(row.avg_new_cents),
                avg_old_salary: average_to_amount(row.avg_old_cents),
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;
    history.sort_by_key(|point| point.year_month);
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_keys_are_zero_padded() {
        assert_eq!(MonthKey::new(2024, 3).unwrap().to_string(), "2024-03");
        assert_eq!(MonthKey::new(2024, 12).unwrap().to_string(), "2024-12");
    }

    #[test]
    fn lexicographic_order_matches_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 10).unwrap(),
            MonthKey::new(2023, 12).unwrap(),
            MonthKey::new(2024, 2).unwrap(),
            MonthKey::new(2024, 1).unwrap(),
        ];
        let mut labels: Vec<String> = keys.iter().map(ToString::to_string).collect();
        keys.sort();
        labels.sort();
        let sorted: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, labels);
        assert_eq!(sorted, ["2023-12", "2024-01", "2024-02", "2024-10"]);
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
        assert!(MonthKey::from_row(2024, 13).is_err());
    }
}
