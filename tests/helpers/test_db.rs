use course_relay::domain::ports::assignment_repository::AssignmentRepository;
use course_relay::infrastructure::persistence::Database;
use course_relay::Assignment;
use std::path::PathBuf;
use uuid::Uuid;

pub struct TestDatabase {
    db: Database,
    path: PathBuf,
}

impl TestDatabase {
    pub fn db(&self) -> &Database {
        &self.db
    }
}

/// File-backed SQLite database, unique per test so tests can run in parallel.
pub async fn setup_test_db() -> TestDatabase {
    let path = std::env::temp_dir().join(format!("course_relay_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to apply schema");

    TestDatabase { db, path }
}

pub async fn teardown_test_db(test_db: TestDatabase) {
    let TestDatabase { db, path } = test_db;
    db.pool().close().await;

    let base = path.display().to_string();
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", base, suffix));
    }
}

pub async fn seed_assignment(db: &Database, assignment: &Assignment) {
    db.upsert_assignment(assignment)
        .await
        .expect("Failed to seed assignment");
}
