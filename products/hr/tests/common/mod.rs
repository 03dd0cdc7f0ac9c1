#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use entity::{attendance, department, employee, performance_review, salary_history};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Database, DatabaseConnection, Set};

pub async fn setup_sqlite() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn insert_department(db: &DatabaseConnection, name: &str) -> department::Model {
    department::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub struct NewEmployee<'a> {
    pub first: &'a str,
    pub last: &'a str,
    pub department_id: i32,
    pub salary: i64,
    pub hired: NaiveDate,
    pub active: bool,
}

impl<'a> NewEmployee<'a> {
    pub fn new(first: &'a str, last: &'a str, department_id: i32, salary: i64) -> Self {
        Self {
            first,
            last,
            department_id,
            salary,
            hired: ymd(2024, 1, 15),
            active: true,
        }
    }

    pub fn hired(mut self, date: NaiveDate) -> Self {
        self.hired = date;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// `salary` is in whole currency units.
    pub async fn insert(self, db: &DatabaseConnection) -> employee::Model {
        employee::ActiveModel {
            id: NotSet,
            first_name: Set(self.first.into()),
            last_name: Set(self.last.into()),
            email: Set(format!(
                "{}.{}.{}@hr.test",
                self.first.to_lowercase(),
                self.last.to_lowercase(),
                self.department_id
            )),
            phone: Set("555-0100".into()),
            department_id: Set(self.department_id),
            base_salary_cents: Set(self.salary * 100),
            hire_date: Set(self.hired),
            is_active: Set(self.active),
            created_at: Set(Utc::now().fixed_offset()),
            version: Set(0),
        }
        .insert(db)
        .await
        .unwrap()
    }
}

pub async fn insert_attendance(db: &DatabaseConnection, employee_id: i32, status: &str) {
    attendance::ActiveModel {
        id: NotSet,
        employee_id: Set(employee_id),
        attendance_date: Set(ymd(2024, 3, 4)),
        status: Set(status.into()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_review(db: &DatabaseConnection, employee_id: i32, rating: i32) {
    performance_review::ActiveModel {
        id: NotSet,
        employee_id: Set(employee_id),
        review_date: Set(ymd(2023, 12, 15)),
        rating: Set(rating),
        comments: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
}

/// Salaries in whole currency units; recorded at noon UTC on the given day.
pub async fn insert_salary_change(
    db: &DatabaseConnection,
    employee_id: i32,
    old: i64,
    new: i64,
    on: NaiveDate,
) {
    let at = Utc
        .from_utc_datetime(&on.and_hms_opt(12, 0, 0).unwrap())
        .fixed_offset();
    salary_history::ActiveModel {
        id: NotSet,
        employee_id: Set(employee_id),
        old_salary_cents: Set(old * 100),
        new_salary_cents: Set(new * 100),
        change_date: Set(at),
    }
    .insert(db)
    .await
    .unwrap();
}
