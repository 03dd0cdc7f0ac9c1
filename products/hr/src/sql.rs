use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Raw statement for the connection's backend.
pub(crate) fn statement<C: ConnectionTrait>(db: &C, sql: impl Into<String>) -> Statement {
    Statement::from_string(db.get_database_backend(), sql.into())
}

/// `(year, month)` integer expressions over a date or timestamp column.
///
/// Both expressions are `BIGINT` so rows decode as `i64` on every backend.
pub(crate) fn year_month_exprs(backend: DatabaseBackend, column: &str) -> (String, String) {
    match backend {
        DatabaseBackend::Sqlite => (
            format!("CAST(strftime('%Y', {column}) AS BIGINT)"),
            format!("CAST(strftime('%m', {column}) AS BIGINT)"),
        ),
        DatabaseBackend::MySql => (
            format!("CAST(YEAR({column}) AS SIGNED)"),
            format!("CAST(MONTH({column}) AS SIGNED)"),
        ),
        DatabaseBackend::Postgres => (
            format!("CAST(EXTRACT(YEAR FROM {column}) AS BIGINT)"),
            format!("CAST(EXTRACT(MONTH FROM {column}) AS BIGINT)"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_uses_extract() {
        let (year, month) = year_month_exprs(DatabaseBackend::Postgres, "e.hire_date");
        assert_eq!(year, "CAST(EXTRACT(YEAR FROM e.hire_date) AS BIGINT)");
        assert_eq!(month, "CAST(EXTRACT(MONTH FROM e.hire_date) AS BIGINT)");
    }

    #[test]
    fn sqlite_uses_strftime() {
        let (year, _) = year_month_exprs(DatabaseBackend::Sqlite, "sh.change_date");
        assert_eq!(year, "CAST(strftime('%Y', sh.change_date) AS BIGINT)");
    }
}
