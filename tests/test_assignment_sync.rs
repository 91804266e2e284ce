mod helpers;

use course_relay::domain::ports::assignment_repository::AssignmentRepository;
use course_relay::infrastructure::cache::InMemoryCacheStore;
use course_relay::{AssignmentService, DomainError};
use helpers::*;
use std::sync::Arc;

fn service(api: Arc<FakeCourseApi>, test_db: &TestDatabase) -> AssignmentService {
    AssignmentService::new(
        api,
        Arc::new(test_db.db().clone()),
        Arc::new(InMemoryCacheStore::new()),
    )
}

#[tokio::test]
async fn test_sync_skips_failing_course() {
    let test_db = setup_test_db().await;
    let api = Arc::new(
        FakeCourseApi::new()
            .with_course(
                current_term_course(101, "CPSC 449"),
                vec![
                    assignment(101, 55, "HW1", Some("2024-11-01T00:00:00Z")),
                    assignment(101, 56, "HW2", None),
                ],
            )
            .with_failing_course(current_term_course(202, "CPSC 474")),
    );
    let service = service(api, &test_db);

    let report = service.sync_assignments().await.unwrap();

    assert_eq!(report.upserted, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.courses.len(), 1);
    assert_eq!(report.courses[0].course_id, 101);
    assert_eq!(report.courses[0].course_name, "CPSC 449");

    let stored = test_db.db().list_assignments().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|a| a.course_id == 101));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_sync_is_idempotent() {
    let test_db = setup_test_db().await;
    let api = Arc::new(FakeCourseApi::new().with_course(
        current_term_course(101, "CPSC 449"),
        vec![
            assignment(101, 55, "HW1", Some("2024-11-01T00:00:00Z")),
            assignment(101, 56, "HW2", Some("2024-11-08T23:59:00Z")),
        ],
    ));
    let service = service(api, &test_db);

    service.sync_assignments().await.unwrap();
    let first = test_db.db().list_assignments().await.unwrap();

    service.sync_assignments().await.unwrap();
    let second = test_db.db().list_assignments().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second.len(), 2);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_sync_applies_upstream_changes_and_refreshes_cache() {
    let test_db = setup_test_db().await;
    let api = Arc::new(FakeCourseApi::new().with_course(
        current_term_course(101, "CPSC 449"),
        vec![assignment(101, 55, "HW1", None)],
    ));
    let service = service(api.clone(), &test_db);

    service.sync_assignments().await.unwrap();
    assert_eq!(service.read_assignment(101, 55).await.unwrap().name, "HW1");

    api.set_assignments(101, vec![assignment(101, 55, "HW1 (extended)", None)]);
    service.sync_assignments().await.unwrap();

    assert_eq!(
        service.read_assignment(101, 55).await.unwrap().name,
        "HW1 (extended)"
    );

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_sync_stamps_course_id_from_listing() {
    let test_db = setup_test_db().await;
    // Upstream record claims another course; the course it was listed under wins.
    let api = Arc::new(FakeCourseApi::new().with_course(
        current_term_course(101, "CPSC 449"),
        vec![assignment(0, 55, "HW1", None)],
    ));
    let service = service(api, &test_db);

    service.sync_assignments().await.unwrap();

    assert!(test_db.db().get_assignment(101, 55).await.is_ok());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_sync_fails_when_courses_cannot_be_listed() {
    let test_db = setup_test_db().await;
    let api = Arc::new(FakeCourseApi::new().failing_listing());
    let service = service(api, &test_db);

    let result = service.sync_assignments().await;

    assert!(matches!(result, Err(DomainError::Upstream(_))));
    assert!(test_db.db().list_assignments().await.unwrap().is_empty());

    teardown_test_db(test_db).await;
}
