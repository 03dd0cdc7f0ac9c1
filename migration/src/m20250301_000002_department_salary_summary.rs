use sea_orm_migration::prelude::*;

// Plain view, recomputed on every read.
const UP_SQL: &str = r#"
CREATE VIEW department_salary_summary AS
SELECT d.name AS department_name,
       COUNT(e.id) AS total_employees,
       CAST(AVG(e.base_salary_cents) AS DOUBLE PRECISION) AS average_salary_cents,
       CAST(COALESCE(SUM(e.base_salary_cents), 0) AS BIGINT) AS total_payroll_cents
FROM department d
JOIN employee e ON e.department_id = d.id
GROUP BY d.name
"#;

const DOWN_SQL: &str = "DROP VIEW IF EXISTS department_salary_summary";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(UP_SQL)
            .await
            .map(|_| ())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DOWN_SQL)
            .await
            .map(|_| ())
    }
}
