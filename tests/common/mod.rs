#![allow(dead_code)]

use school_report::prelude::*;
use school_report::store::create_schema;
use sea_orm::{ConnectionTrait, Database};
use std::sync::Mutex;
use tempfile::TempDir;

/// A SQLite roster database in a temporary directory.
pub struct TestStore {
    _dir: TempDir,
    pub config: DatabaseConfig,
}

impl TestStore {
    pub async fn new(seed: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("roster.db").display());

        let conn = Database::connect(url.as_str()).await.unwrap();
        create_schema(&conn).await.unwrap();
        for statement in seed {
            conn.execute_unprepared(statement).await.unwrap();
        }
        conn.close().await.unwrap();

        Self {
            _dir: dir,
            config: DatabaseConfig::new(url),
        }
    }

    /// Ada teaches Algorithms, which Grace attends.
    pub async fn ada() -> Self {
        Self::new(&[
            "INSERT INTO teachers (id, name) VALUES (1, 'Ada')",
            "INSERT INTO courses (id, name, teacher_id) VALUES (10, 'Algorithms', 1)",
            "INSERT INTO students (id, name) VALUES (100, 'Grace')",
            "INSERT INTO enrollments (course_id, student_id) VALUES (10, 100)",
        ])
        .await
    }
}

pub fn ada_roster() -> Vec<Teacher> {
    vec![Teacher::new(1, "Ada").with_course(
        Course::new(10, "Algorithms", 1).with_student(Student::new(100, "Grace")),
    )]
}

/// Sender with a fixed outcome that keeps every batch it was given.
pub struct StubSender {
    outcome: bool,
    pub batches: Mutex<Vec<Vec<Teacher>>>,
}

impl StubSender {
    pub fn succeeding() -> Self {
        Self::with_outcome(true)
    }

    pub fn failing() -> Self {
        Self::with_outcome(false)
    }

    fn with_outcome(outcome: bool) -> Self {
        Self {
            outcome,
            batches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmailSender for StubSender {
    async fn send(&self, teachers: &[Teacher]) -> bool {
        self.batches.lock().unwrap().push(teachers.to_vec());
        self.outcome
    }
}

#[derive(Default)]
pub struct CollectingRecorder {
    pub events: Mutex<Vec<String>>,
}

impl FailureRecorder for CollectingRecorder {
    fn record(&self, error: &ReportError) {
        self.events.lock().unwrap().push(error.to_string());
    }
}
