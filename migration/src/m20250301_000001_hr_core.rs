use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    DepartmentId,
    BaseSalaryCents,
    HireDate,
    IsActive,
    CreatedAt,
    Version,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    EmployeeId,
    AttendanceDate,
    Status,
}

#[derive(DeriveIden)]
enum PerformanceReview {
    Table,
    Id,
    EmployeeId,
    ReviewDate,
    Rating,
    Comments,
}

#[derive(DeriveIden)]
enum SalaryHistory {
    Table,
    Id,
    EmployeeId,
    OldSalaryCents,
    NewSalaryCents,
    ChangeDate,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Department::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Department::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Department::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_department_name")
                    .table(Department::Table)
                    .col(Department::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Employee::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Employee::Email)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employee::Phone).string_len(64).not_null())
                    .col(ColumnDef::new(Employee::DepartmentId).integer().not_null())
                    .col(
                        ColumnDef::new(Employee::BaseSalaryCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employee::HireDate).date().not_null())
                    .col(
                        ColumnDef::new(Employee::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Employee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employee::Version)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_department")
                            .from(Employee::Table, Employee::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_department")
                    .table(Employee::Table)
                    .col(Employee::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_name_order")
                    .table(Employee::Table)
                    .col(Employee::FirstName)
                    .col(Employee::LastName)
                    .col(Employee::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(Attendance::AttendanceDate).date().not_null())
                    .col(ColumnDef::new(Attendance::Status).string_len(32).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_employee")
                            .from(Attendance::Table, Attendance::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_employee")
                    .table(Attendance::Table)
                    .col(Attendance::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PerformanceReview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PerformanceReview::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReview::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PerformanceReview::ReviewDate).date().not_null())
                    .col(ColumnDef::new(PerformanceReview::Rating).integer().not_null())
                    .col(ColumnDef::new(PerformanceReview::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_review_employee")
                            .from(PerformanceReview::Table, PerformanceReview::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_performance_review_employee")
                    .table(PerformanceReview::Table)
                    .col(PerformanceReview::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SalaryHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalaryHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalaryHistory::EmployeeId).integer().not_null())
                    .col(
                        ColumnDef::new(SalaryHistory::OldSalaryCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SalaryHistory::NewSalaryCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SalaryHistory::ChangeDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salary_history_employee")
                            .from(SalaryHistory::Table, SalaryHistory::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_salary_history_employee")
                    .table(SalaryHistory::Table)
                    .col(SalaryHistory::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalaryHistory::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PerformanceReview::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employee::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Department::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
