mod common;

use common::setup_sqlite;
use products_hr::{PageRequest, list_active_employees, reports, seed_demo};

#[tokio::test]
async fn seeds_once_and_feeds_every_report() {
    let db = setup_sqlite().await;
    let summary = seed_demo(&db).await.unwrap();
    assert!(!summary.skipped);
    assert_eq!(summary.departments, 5);
    assert!(summary.employees > 0);

    let again = seed_demo(&db).await.unwrap();
    assert!(again.skipped);

    let kpi = reports::kpi_snapshot(&db).await.unwrap();
    assert_eq!(kpi.total_employees as usize, summary.employees);
    assert_eq!(kpi.departments_count, 5);

    let distribution = reports::salary_distribution(&db).await.unwrap();
    assert_eq!(distribution.total(), kpi.total_employees);

    let history = reports::salary_change_history(&db).await.unwrap();
    assert!(!history.is_empty());

    let page = list_active_employees(&db, None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total_count as i64, kpi.active_employees);
}
