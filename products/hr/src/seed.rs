//! Deterministic demo dataset for local runs and dashboards.

use anyhow::anyhow;
use chrono::{Days, NaiveDate, Utc};
use entity::{attendance, department, employee, performance_review, salary_history};
use platform_api::{ApiError, ApiResult};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, EntityTrait, PaginatorTrait, Set,
    TransactionTrait, prelude::DateTimeWithTimeZone,
};
use serde::Serialize;
use tracing::{info, instrument};

const DEPARTMENTS: [&str; 5] = ["Engineering", "Finance", "Human Resources", "Marketing", "Sales"];

const ATTENDANCE_STATUSES: [&str; 4] = ["Present", "Present", "Late", "Absent"];

struct SeedEmployee {
    first: &'static str,
    last: &'static str,
    department: usize,
    salary_cents: i64,
    hired: (i32, u32, u32),
    active: bool,
}

#[rustfmt::skip]
const EMPLOYEES: &[SeedEmployee] = &[
    SeedEmployee { first: "Ada", last: "Lovelace", department: 0, salary_cents: 950_000, hired: (2019, 4, 1), active: true },
    SeedEmployee { first: "Alan", last: "Turing", department: 0, salary_cents: 820_000, hired: (2020, 9, 14), active: true },
    SeedEmployee { first: "Grace", last: "Hopper", department: 0, salary_cents: 610_000, hired: (2021, 2, 8), active: true },
    SeedEmployee { first: "Linus", last: "Torvalds", department: 0, salary_cents: 540_000, hired: (2022, 11, 21), active: false },
    SeedEmployee { first: "Barbara", last: "Liskov", department: 0, salary_cents: 705_000, hired: (2023, 6, 5), active: true },
    SeedEmployee { first: "Carl", last: "Gauss", department: 1, salary_cents: 480_000, hired: (2018, 1, 15), active: true },
    SeedEmployee { first: "Emmy", last: "Noether", department: 1, salary_cents: 560_000, hired: (2021, 2, 22), active: true },
    SeedEmployee { first: "Luca", last: "Pacioli", department: 1, salary_cents: 295_000, hired: (2023, 6, 19), active: true },
    SeedEmployee { first: "Mary", last: "Parker", department: 2, salary_cents: 400_000, hired: (2020, 3, 2), active: true },
    SeedEmployee { first: "Frances", last: "Perkins", department: 2, salary_cents: 365_000, hired: (2022, 11, 7), active: true },
    SeedEmployee { first: "David", last: "Ogilvy", department: 3, salary_cents: 515_000, hired: (2019, 10, 28), active: true },
    SeedEmployee { first: "Mary", last: "Wells", department: 3, salary_cents: 450_000, hired: (2021, 8, 16), active: false },
    SeedEmployee { first: "Leo", last: "Burnett", department: 3, salary_cents: 280_000, hired: (2024, 1, 8), active: true },
    SeedEmployee { first: "Dale", last: "Carnegie", department: 4, salary_cents: 620_000, hired: (2018, 5, 7), active: true },
    SeedEmployee { first: "Estee", last: "Lauder", department: 4, salary_cents: 910_000, hired: (2020, 9, 1), active: true },
    SeedEmployee { first: "Zig", last: "Ziglar", department: 4, salary_cents: 390_000, hired: (2024, 1, 22), active: true },
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub skipped: bool,
    pub departments: usize,
    pub employees: usize,
    pub attendance: usize,
    pub performance_reviews: usize,
    pub salary_history: usize,
}

/// Inserts the demo dataset in one transaction. Does nothing when any
/// employee already exists.
#[instrument(name = "hr.seed", skip(db))]
pub async fn seed_demo<C>(db: &C) -> ApiResult<SeedSummary>
where
    C: ConnectionTrait + TransactionTrait,
{
    if employee::Entity::find().count(db).await? > 0 {
        info!("employees present, skipping demo seed");
        return Ok(SeedSummary {
            skipped: true,
            ..SeedSummary::default()
        });
    }

    let txn = db.begin().await?;
    let seeded_at: DateTimeWithTimeZone = Utc::now().fixed_offset();
    let mut summary = SeedSummary::default();

    let mut department_ids = Vec::with_capacity(DEPARTMENTS.len());
    for name in DEPARTMENTS {
        let model = department::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            created_at: Set(seeded_at),
        }
        .insert(&txn)
        .await?;
        department_ids.push(model.id);
    }
    summary.departments = department_ids.len();

    let attendance_start = date(2024, 3, 4)?;
    for (index, seed) in EMPLOYEES.iter().enumerate() {
        let hired = date(seed.hired.0, seed.hired.1, seed.hired.2)?;
        let raised_from = previous_salary(seed.salary_cents);
        let department_id = department_ids
            .get(seed.department)
            .copied()
            .ok_or_else(|| ApiError::internal(anyhow!("unknown seed department")))?;
        let model = employee::ActiveModel {
            id: NotSet,
            first_name: Set(seed.first.to_owned()),
            last_name: Set(seed.last.to_owned()),
            email: Set(format!(
                "{}.{}@hr.test",
                seed.first.to_lowercase(),
                seed.last.to_lowercase()
            )),
            phone: Set(format!("+1-555-{:04}", 100 + index)),
            department_id: Set(department_id),
            base_salary_cents: Set(seed.salary_cents),
            hire_date: Set(hired),
            is_active: Set(seed.active),
            created_at: Set(seeded_at),
            version: Set(0),
        }
        .insert(&txn)
        .await?;
        summary.employees += 1;

        for day in 0..5u64 {
            let status = ATTENDANCE_STATUSES[(index + day as usize) % ATTENDANCE_STATUSES.len()];
            attendance::ActiveModel {
                id: NotSet,
                employee_id: Set(model.id),
                attendance_date: Set(offset_days(attendance_start, day)?),
                status: Set(status.to_owned()),
            }
            .insert(&txn)
            .await?;
            summary.attendance += 1;
        }

        // Three of every four employees have a review.
        if index % 4 != 3 {
            performance_review::ActiveModel {
                id: NotSet,
                employee_id: Set(model.id),
                review_date: Set(date(2023, 12, 15)?),
                rating: Set(1 + (index as i32 * 3) % 5),
                comments: Set((index % 2 == 0).then(|| "Annual review".to_owned())),
            }
            .insert(&txn)
            .await?;
            summary.performance_reviews += 1;
        }

        if index % 2 == 0 {
            let changed = offset_days(hired, 365)?;
            salary_history::ActiveModel {
                id: NotSet,
                employee_id: Set(model.id),
                old_salary_cents: Set(raised_from),
                new_salary_cents: Set(seed.salary_cents),
                change_date: Set(noon(changed)?),
            }
            .insert(&txn)
            .await?;
            summary.salary_history += 1;
        }
    }

    txn.commit().await?;
    info!(
        employees = summary.employees,
        departments = summary.departments,
        "demo data seeded"
    );
    Ok(summary)
}

/// Salary before the seeded raise, a flat 8% below the current one.
fn previous_salary(current_cents: i64) -> i64 {
    (current_cents as f64 / 1.08).round() as i64
}

fn date(year: i32, month: u32, day: u32) -> ApiResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ApiError::internal(anyhow!("invalid seed date {year}-{month}-{day}")))
}

fn offset_days(from: NaiveDate, days: u64) -> ApiResult<NaiveDate> {
    from.checked_add_days(Days::new(days))
        .ok_or_else(|| ApiError::internal(anyhow!("seed date out of range")))
}

fn noon(day: NaiveDate) -> ApiResult<DateTimeWithTimeZone> {
    day.and_hms_opt(12, 0, 0)
        .map(|at| at.and_utc().fixed_offset())
        .ok_or_else(|| ApiError::internal(anyhow!("invalid seed time")))
}
